use cubealg::engine::config::StoreConfig;
use std::path::PathBuf;

/// Where the configuration file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// The platform default location; `loaded` is false when no file exists there.
    Default { path: PathBuf, loaded: bool },
    /// No config directory could be determined.
    None,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub store_config: StoreConfig,
    pub source: ConfigSource,
}
