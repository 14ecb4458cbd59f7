//! `add`: insert a subnet into an IPAM file.

use crate::cli::AddArgs;
use crate::error::Result;
use crate::models::{validate, SubnetMeta};
use crate::processing::insert;
use crate::storage;

/// Validate `args.subnet`, insert it at the right depth and rewrite the file.
pub fn add(args: &AddArgs) -> Result<()> {
    let cidr = validate(&args.subnet)?;
    let mut ipam = storage::load(&args.file)?;

    insert(
        &mut ipam.subnets,
        cidr,
        SubnetMeta::new(&args.description, &args.tags),
    )?;
    storage::save(&args.file, &ipam)?;

    match ipam.ancestors(&cidr).and_then(|path| path.last().copied()) {
        Some(parent) => log::info!("Added {cidr} under {parent} in {}", args.file.display()),
        None => log::info!("Added {cidr} at top level in {}", args.file.display()),
    }
    Ok(())
}
