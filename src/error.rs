//! Error types for IPAM operations.
//!
//! Every command ends in exactly one of these; none are retried.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IpamError>;

/// Everything that can go wrong while validating, mutating or persisting an IPAM file.
#[derive(Error, Debug)]
pub enum IpamError {
    /// Malformed or non-canonical CIDR input.
    #[error("invalid subnet {cidr:?}: {reason}")]
    InvalidCidr { cidr: String, reason: String },

    /// The CIDR is already present somewhere in the tree.
    #[error("{0:?} already exists in this IPAM file")]
    AlreadyExists(String),

    /// Non-recursive delete of a node that still has subnets.
    #[error(
        "cannot delete {0} as subnets are defined under it. Use '-r' or '--recursive' to delete {0} and everything defined under it"
    )]
    HasChildren(String),

    /// Delete target is not in the tree.
    #[error("{0} is not defined in this IPAM file")]
    NotFound(String),

    /// `init` refused to replace an existing file.
    #[error("IPAM file {} already exists", .0.display())]
    FileExists(PathBuf),

    /// File read, write, temp-file or rename failure.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be deserialized.
    #[error("error parsing IPAM file {}: {message} (at '{path}')", .file.display())]
    Parse {
        file: PathBuf,
        path: String,
        message: String,
    },

    /// The document could not be serialized.
    #[error("error marshaling IPAM: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

impl IpamError {
    /// Create an [`IpamError::InvalidCidr`].
    pub fn invalid_cidr(cidr: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCidr {
            cidr: cidr.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an [`IpamError::Io`] with a short description of what was attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an [`IpamError::Parse`] for `file`.
    pub fn parse(file: &Path, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.to_path_buf(),
            path: path.into(),
            message: message.into(),
        }
    }
}
