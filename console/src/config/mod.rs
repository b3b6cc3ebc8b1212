mod console_config;

use std::path::Path;

use common::config::{ConfigError, ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use console_config::ConsoleConfig;

pub const DEFAULT_CONFIG_FILE: &str = "connect_console.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Unvalidated: CLI overrides are applied on top before the single validation pass.
pub fn load_config(path: &Path) -> Result<ConsoleConfig, ConfigError> {
    get_config_manager(path).get_unvalidated_config()
}
