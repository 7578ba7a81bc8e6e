use crate::cli::{ConfigArgs, ConfigCommands};
use crate::config::{AppConfig, ConfigSource};
use crate::error::Result;

pub fn run(args: ConfigArgs, config: &AppConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => println!("{}", describe_source(&config.source)),
        ConfigCommands::Show => {
            for line in describe(config) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn describe_source(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Explicit(path) => path.display().to_string(),
        ConfigSource::Default { path, loaded: true } => path.display().to_string(),
        ConfigSource::Default {
            path,
            loaded: false,
        } => format!("{} (not present)", path.display()),
        ConfigSource::None => "(no configuration directory available)".to_string(),
    }
}

fn describe(config: &AppConfig) -> Vec<String> {
    let max_records = match config.store_config.max_records {
        Some(limit) => limit.to_string(),
        None => "unlimited".to_string(),
    };
    vec![
        format!("config-file = {}", describe_source(&config.source)),
        format!("data-file   = {}", config.data_file.display()),
        format!("max-records = {max_records}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubealg::engine::config::StoreConfig;
    use std::path::PathBuf;

    #[test]
    fn show_lists_effective_values() {
        let config = AppConfig {
            data_file: PathBuf::from("algs.json"),
            store_config: StoreConfig { max_records: None },
            source: ConfigSource::Default {
                path: PathBuf::from("/home/u/.config/cubealg/config.toml"),
                loaded: false,
            },
        };
        assert_eq!(
            describe(&config),
            vec![
                "config-file = /home/u/.config/cubealg/config.toml (not present)",
                "data-file   = algs.json",
                "max-records = unlimited",
            ]
        );
    }
}
