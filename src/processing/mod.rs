//! Subnet tree processing logic.
//!
//! - [`hierarchy`] - inserting and deleting blocks while keeping containment order

pub mod hierarchy;

// Re-export public functions
pub use hierarchy::{delete, insert, DeleteOptions};
