//! Constants shared across the attache crates.

/// Application name used for XDG directories
pub const APP_NAME: &str = "attache";

/// Organization name used for XDG directories
pub const APP_ORGANIZATION: &str = "attache";

/// Environment variable overriding the configured API host
pub const ENV_API_HOST: &str = "ATTACHE_API_HOST";

/// Environment variable overriding the log verbosity (0-3)
pub const ENV_VERBOSITY: &str = "ATTACHE_VERBOSITY";

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// MIME type used when neither the caller nor the config names one
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";
