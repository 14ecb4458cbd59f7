//! Static configuration defaults.

/// Extension appended to the file name given to `init`.
pub const FILE_EXTENSION: &str = "yaml";

/// Temp files are created next to the target as `tmp_ipam.<random>.txt`.
pub const TEMP_FILE_PREFIX: &str = "tmp_ipam.";
pub const TEMP_FILE_SUFFIX: &str = ".txt";

/// Environment variable providing `--file` for commands that read an existing file.
pub const FILE_ENV: &str = "IPAM_FILE";

/// Environment variable naming a log4rs config file.
pub const LOG_CONFIG_ENV: &str = "IPAM_LOG_CONFIG";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Console log line used when no log4rs config file is present.
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// Output directory for `gendocs`.
pub const DEFAULT_DOCS_DIR: &str = "docs";
