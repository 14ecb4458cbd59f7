//! Reading and writing IPAM files.
//!
//! - [`file`] - YAML load, atomic save and no-clobber create

mod file;

pub use file::{create, load, parse_document, save};
