use crate::dataset::Derivation;
use crate::estimator::DEFAULT_HAT_TRICK_TARGET;
use crate::formatting::BoxChars;
use crate::i18n::Language;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub language: Language,
    pub hat_trick_target: u32,
    pub derivation: Derivation,
    /// Dataset file replacing the built-in career
    pub dataset_file: Option<String>,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            language: Language::default(),
            hat_trick_target: DEFAULT_HAT_TRICK_TARGET,
            derivation: Derivation::default(),
            dataset_file: None,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            box_chars: BoxChars::unicode(),
        }
    }
}

impl DisplayConfig {
    pub fn new(use_unicode: bool) -> Self {
        DisplayConfig {
            use_unicode,
            box_chars: BoxChars::from_use_unicode(use_unicode),
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Parse config file contents. Box characters follow `use_unicode`.
pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.display = DisplayConfig::new(config.display.use_unicode);
    Ok(config)
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    // Check if file exists
    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    parse(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, "/dev/null");
        assert_eq!(config.language, Language::Esp);
        assert_eq!(config.hat_trick_target, 60);
        assert_eq!(config.derivation, Derivation::Estimate);
        assert!(config.dataset_file.is_none());
        assert!(config.display.use_unicode);
    }

    #[test]
    fn test_config_from_toml_full() {
        let toml_str = r#"
log_level = "debug"
log_file = "/tmp/player-stats.log"
language = "eng"
hat_trick_target = 45
derivation = "pre_baked"
dataset_file = "/data/career.toml"

[display]
use_unicode = false
        "#;

        let config = parse(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.language, Language::Eng);
        assert_eq!(config.hat_trick_target, 45);
        assert_eq!(config.derivation, Derivation::PreBaked);
        assert_eq!(config.dataset_file.as_deref(), Some("/data/career.toml"));
        assert!(!config.display.use_unicode);
        assert_eq!(config.display.box_chars, BoxChars::ascii());
    }

    #[test]
    fn test_config_from_toml_partial_uses_defaults() {
        let config = parse("language = \"cat\"\n").unwrap();
        assert_eq!(config.language, Language::Cat);
        assert_eq!(config.hat_trick_target, 60);
        assert_eq!(config.display.box_chars, BoxChars::unicode());
    }

    #[test]
    fn test_config_invalid_language_is_error() {
        assert!(parse("language = \"fr\"\n").is_err());
    }
}
