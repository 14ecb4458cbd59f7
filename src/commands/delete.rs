//! `delete`: remove a subnet, optionally with everything under it.

use crate::cli::DeleteArgs;
use crate::error::Result;
use crate::models::{validate, SubnetNode};
use crate::processing::{self, DeleteOptions};
use crate::storage;

/// Remove `args.subnet` from the file and return the removed node.
pub fn delete(args: &DeleteArgs) -> Result<SubnetNode> {
    let cidr = validate(&args.subnet)?;
    let mut ipam = storage::load(&args.file)?;

    let options = DeleteOptions {
        recursive: args.recursive,
    };
    let removed = processing::delete(&mut ipam.subnets, &cidr, options)?;
    storage::save(&args.file, &ipam)?;

    log::info!(
        "Deleted {cidr} ({} nested subnets) from {}",
        removed.count(),
        args.file.display()
    );
    Ok(removed)
}
