//! Simple IPAM: a CIDR hierarchy kept in a YAML file.
//!
//! Every subnet is stored directly under its tightest enclosing block:
//!
//! ```yaml
//! description: lab
//! subnets:
//!   10.10.0.0/20:
//!     description: office
//!     tags: [floor_1]
//!     subnets:
//!       10.10.0.0/24: {}
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod storage;

pub use error::{IpamError, Result};
