use cubealg::core::io::json::DEFAULT_DATA_FILE;
use cubealg::engine::config::DEFAULT_MAX_RECORDS;
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub data_file: PathBuf,
    pub max_records: usize,
    /// Config file read when `--config` is not given; `None` if the platform
    /// has no config directory.
    pub config_path: Option<PathBuf>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            max_records: DEFAULT_MAX_RECORDS,
            config_path: ProjectDirs::from("org", "cubealg", "cubealg")
                .map(|dirs| dirs.config_dir().join("config.toml")),
        }
    }
}
