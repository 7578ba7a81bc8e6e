use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, ConfigSource};
use crate::cli::Cli;
use crate::error::{CliError, Result};
use cubealg::engine::config::{StoreConfig, StoreConfigBuilder};
use std::path::PathBuf;
use tracing::debug;

/// Merges settings with precedence flags, then config file, then defaults.
pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    build_config_with(cli, DefaultsConfig::default())
}

pub(crate) fn build_config_with(cli: &Cli, defaults: DefaultsConfig) -> Result<AppConfig> {
    let (file_config, source) = load_file_config(cli.config.as_ref(), defaults.config_path)?;

    let data_file = cli
        .data_file
        .clone()
        .or(file_config.data_file)
        .unwrap_or(defaults.data_file);

    let max_records = cli
        .max_records
        .or(file_config.max_records)
        .unwrap_or(defaults.max_records);

    Ok(AppConfig {
        data_file,
        store_config: store_config(max_records)?,
        source,
    })
}

fn load_file_config(
    explicit: Option<&PathBuf>,
    default_path: Option<PathBuf>,
) -> Result<(FileConfig, ConfigSource)> {
    if let Some(path) = explicit {
        let config = FileConfig::from_file(path)?;
        return Ok((config, ConfigSource::Explicit(path.clone())));
    }
    match default_path {
        Some(path) if path.is_file() => {
            let config = FileConfig::from_file(&path)?;
            Ok((config, ConfigSource::Default { path, loaded: true }))
        }
        Some(path) => {
            debug!("No configuration file at {:?}; using defaults.", path);
            Ok((FileConfig::default(), ConfigSource::Default { path, loaded: false }))
        }
        None => Ok((FileConfig::default(), ConfigSource::None)),
    }
}

fn store_config(max_records: usize) -> Result<StoreConfig> {
    let builder = match max_records {
        0 => StoreConfigBuilder::new().unlimited(),
        n => StoreConfigBuilder::new().max_records(n),
    };
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn defaults_in(dir: &Path) -> DefaultsConfig {
        DefaultsConfig {
            data_file: PathBuf::from("cube_algorithms.json"),
            max_records: 1000,
            config_path: Some(dir.join("config.toml")),
        }
    }

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["cubealg"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let dir = tempfile::tempdir().unwrap();
        let config = build_config_with(&cli(&["list"]), defaults_in(dir.path())).unwrap();

        assert_eq!(config.data_file, PathBuf::from("cube_algorithms.json"));
        assert_eq!(config.store_config.max_records, Some(1000));
        assert_eq!(
            config.source,
            ConfigSource::Default {
                path: dir.path().join("config.toml"),
                loaded: false
            }
        );
    }

    #[test]
    fn default_config_file_is_read_when_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "data-file = \"algs.json\"\nmax-records = 0\n",
        )
        .unwrap();

        let config = build_config_with(&cli(&["list"]), defaults_in(dir.path())).unwrap();

        assert_eq!(config.data_file, PathBuf::from("algs.json"));
        assert_eq!(config.store_config.max_records, None);
        assert!(matches!(config.source, ConfigSource::Default { loaded: true, .. }));
    }

    #[test]
    fn flags_override_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "data-file = \"algs.json\"\nmax-records = 20\n").unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let config = build_config_with(
            &cli(&["-c", &path_arg, "-f", "mine.json", "--max-records", "3", "list"]),
            defaults_in(dir.path()),
        )
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("mine.json"));
        assert_eq!(config.store_config.max_records, Some(3));
        assert_eq!(config.source, ConfigSource::Explicit(path));
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let missing_arg = missing.to_string_lossy().into_owned();

        let result = build_config_with(&cli(&["-c", &missing_arg, "list"]), defaults_in(dir.path()));

        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn zero_max_records_flag_means_unlimited() {
        let dir = tempfile::tempdir().unwrap();
        let config = build_config_with(
            &cli(&["--max-records", "0", "list"]),
            defaults_in(dir.path()),
        )
        .unwrap();
        assert_eq!(config.store_config.max_records, None);
    }
}
