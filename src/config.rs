use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the optional per-project configuration file, looked up in the
/// current directory and then in the user configuration directory.
pub const CONFIG_FILE: &str = ".exbackendrc.yaml";

/// Defaults the CLI starts from before flags and prompts are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CliConfig {
    /// Program used to install dependencies and run setup commands.
    pub package_manager: String,
    /// Project name offered as the prompt default.
    pub default_name: String,
    /// Materialization strategy used when no --strategy flag is given.
    pub default_strategy: String,
    /// Skip all external commands after materialization.
    pub skip_install: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            package_manager: "npm".to_string(),
            default_name: "my-app".to_string(),
            default_strategy: "generate".to_string(),
            skip_install: false,
        }
    }
}

/// Loads the configuration, preferring a file in the current directory
/// over the user-level one. Missing files yield the defaults.
pub fn load_config() -> Result<CliConfig> {
    if let Ok(cwd) = std::env::current_dir() {
        let local = cwd.join(CONFIG_FILE);
        if local.exists() {
            return load_config_from(&local);
        }
    }
    if let Some(user) = user_config_path() {
        if user.exists() {
            return load_config_from(&user);
        }
    }
    Ok(CliConfig::default())
}

pub fn load_config_from(path: &Path) -> Result<CliConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: CliConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("create-exbackend-app").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.package_manager, "npm");
        assert_eq!(config.default_name, "my-app");
        assert_eq!(config.default_strategy, "generate");
        assert!(!config.skip_install);
    }

    #[test]
    fn test_load_config_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "package-manager: pnpm\ndefault-name: backend\nskip-install: true\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.package_manager, "pnpm");
        assert_eq!(config.default_name, "backend");
        // Unset keys keep their defaults.
        assert_eq!(config.default_strategy, "generate");
        assert!(config.skip_install);
    }

    #[test]
    fn test_load_config_rejects_invalid_yaml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "package-manager: [unclosed").unwrap();

        assert!(load_config_from(&path).is_err());
    }
}
