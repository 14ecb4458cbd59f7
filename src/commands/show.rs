//! `show`: print the subnet tree.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::render_tree;
use crate::storage;

pub fn show(args: &ShowArgs) -> Result<()> {
    let ipam = storage::load(&args.file)?;
    print!("{}", render_tree(&ipam, !args.no_color));
    Ok(())
}
