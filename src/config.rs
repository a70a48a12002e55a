// Configuration module for shotfind
// This module handles loading and parsing configuration from
// ~/.config/shotfind/config.toml

mod types;

pub use types::{Config, ExportConfig};

use std::fs;
use std::path::PathBuf;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/shotfind/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/shotfind/config.toml on all platforms for
/// consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("shotfind")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert!(!config.export.edl_style_timecodes);
        assert!(!config.export.absolute_paths);
    }

    #[test]
    fn test_parse_export_section() {
        let toml = r#"
[export]
edl_style_timecodes = true
absolute_paths = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.export.edl_style_timecodes);
        assert!(config.export.absolute_paths);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("[export]\n").unwrap();
        assert!(!config.export.edl_style_timecodes);

        let config: Config = toml::from_str("").unwrap();
        assert!(!config.export.absolute_paths);
    }

    #[test]
    fn test_malformed_toml_fails_to_parse() {
        let toml = "[export\nedl_style_timecodes = true";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err(), "Malformed TOML should fail to parse");
    }

    #[test]
    fn test_config_path_consistency() {
        let path1 = get_config_path();
        let path2 = get_config_path();
        assert_eq!(path1, path2);

        let path_str = path1.to_string_lossy();
        assert!(
            path_str.ends_with("shotfind/config.toml")
                || path_str.ends_with("shotfind\\config.toml")
        );
    }
}
