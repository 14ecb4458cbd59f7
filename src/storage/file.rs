//! YAML file storage for IPAM documents.
//!
//! Writes never touch the target in place: the new content goes to a temp
//! file in the same directory which is then renamed over the target. A
//! reader sees either the old or the new file, never a partial one. The temp
//! file is deleted on every failure path when the [`NamedTempFile`] drops.

use crate::config::{TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use crate::error::{IpamError, Result};
use crate::models::IpamDocument;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read and parse an IPAM file.
pub fn load(path: &Path) -> Result<IpamDocument> {
    let yaml = std::fs::read_to_string(path)
        .map_err(|e| IpamError::io(format!("error reading IPAM file {}", path.display()), e))?;
    let ipam = parse_document(&yaml, path)?;
    log::debug!(
        "Loaded {} subnets from {}",
        ipam.len(),
        path.display()
    );
    Ok(ipam)
}

/// Parse YAML text. `file` is only used in error messages.
pub fn parse_document(yaml: &str, file: &Path) -> Result<IpamDocument> {
    if yaml.trim().is_empty() {
        log::warn!("IPAM file {} is empty", file.display());
        return Ok(IpamDocument::default());
    }
    let deserializer = serde_yaml::Deserializer::from_str(yaml);
    serde_path_to_error::deserialize(deserializer).map_err(|e| {
        let path = e.path().to_string();
        IpamError::parse(file, path, e.into_inner().to_string())
    })
}

/// Serialize `ipam` and atomically replace `path` with it.
pub fn save(path: &Path, ipam: &IpamDocument) -> Result<()> {
    let tmp = write_temp(path, ipam)?;
    if let Ok(metadata) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| IpamError::io("error setting temp file permissions", e))?;
    }
    tmp.persist(path).map_err(|e| {
        IpamError::io(
            format!("error writing IPAM data to {}", path.display()),
            e.error,
        )
    })?;
    log::debug!("Wrote {} subnets to {}", ipam.len(), path.display());
    Ok(())
}

/// Write `ipam` to a new file at `path`. Fails if `path` already exists.
pub fn create(path: &Path, ipam: &IpamDocument) -> Result<()> {
    if path.exists() {
        return Err(IpamError::FileExists(path.to_path_buf()));
    }
    let tmp = write_temp(path, ipam)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| IpamError::io("error setting temp file permissions", e))?;
    }
    tmp.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            IpamError::FileExists(path.to_path_buf())
        } else {
            IpamError::io(format!("unable to create IPAM file {}", path.display()), e.error)
        }
    })?;
    Ok(())
}

fn write_temp(path: &Path, ipam: &IpamDocument) -> Result<NamedTempFile> {
    let yaml = serde_yaml::to_string(ipam)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(TEMP_FILE_SUFFIX)
        .tempfile_in(dir)
        .map_err(|e| IpamError::io(format!("error creating temp file in {}", dir.display()), e))?;
    log::trace!("temp file {}", tmp.path().display());

    tmp.write_all(yaml.as_bytes())
        .map_err(|e| IpamError::io("error writing to temp file", e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| IpamError::io("error closing temp file", e))?;
    Ok(tmp)
}
