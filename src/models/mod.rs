//! Domain models for the IPAM file.
//!
//! - [`Cidr`] - an address block, plus the canonical-form validator and containment tests
//! - [`IpamDocument`] and [`SubnetNode`] - the subnet hierarchy stored in a file

mod cidr;
mod subnet;

// Re-export public types
pub use cidr::{
    broadcast_addr, cut_addr, get_cidr_mask, is_subnet_of, is_supernet_of, max_length, validate,
    Cidr, MAX_LENGTH_V4, MAX_LENGTH_V6,
};
pub use subnet::{IpamDocument, SubnetMeta, SubnetNode, Subnets};
