//! Output formatting for IPAM documents.
//!
//! - [`tree`] - indented tree view with colors

mod tree;

pub use tree::render_tree;
