//! `init`: create an empty IPAM file.

use crate::cli::InitArgs;
use crate::config::FILE_EXTENSION;
use crate::error::Result;
use crate::models::IpamDocument;
use crate::storage;
use std::path::PathBuf;

/// File created for `name`: the `.yaml` extension is added unless already there.
pub fn ipam_file_name(name: &str) -> PathBuf {
    let path = PathBuf::from(name);
    match path.extension() {
        Some(ext) if ext == FILE_EXTENSION => path,
        _ => PathBuf::from(format!("{name}.{FILE_EXTENSION}")),
    }
}

/// Create `<file>.yaml` with an empty subnet forest. Returns the created path.
pub fn init(args: &InitArgs) -> Result<PathBuf> {
    let path = ipam_file_name(&args.file);
    storage::create(&path, &IpamDocument::new(&args.description))?;
    log::info!("Created IPAM file {}", path.display());
    Ok(path)
}
