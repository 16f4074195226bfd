use crate::error::ConfigError;
use crate::Probability;
use std::path::Path;
use std::path::PathBuf;

/// Top-level configuration, loadable from TOML.
/// Every section and field falls back to the crate constants.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub learning: Learning,
    pub training: Training,
    pub storage: Storage,
    pub server: Server,
}

/// Q-learning hyperparameters shared by both agents.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Learning {
    pub rate: Probability,
    pub discount: Probability,
    pub exploration: Probability,
}

impl Default for Learning {
    fn default() -> Self {
        Self {
            rate: crate::LEARNING_RATE,
            discount: crate::DISCOUNT_FACTOR,
            exploration: crate::EXPLORATION_RATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Training {
    /// self-play games per run
    pub games: usize,
    /// board side length
    pub size: usize,
}

impl Default for Training {
    fn default() -> Self {
        Self {
            games: crate::TRAINING_GAMES,
            size: crate::SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Storage {
    pub models: PathBuf,
    pub output: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            models: PathBuf::from(crate::MODELS_DIR),
            output: PathBuf::from(crate::OUTPUT_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: crate::BIND_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Resolve from the environment: `GOMOKU_CONFIG` names the file,
    /// `BIND_ADDR` overrides the server address.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var("GOMOKU_CONFIG").unwrap_or_else(|_| crate::CONFIG_PATH.into());
        let mut config = Self::load_or_default(Path::new(&path))?;
        if let Ok(bind) = std::env::var("BIND_ADDR") {
            config.server.bind = bind;
        }
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Learning {
            rate,
            discount,
            exploration,
        } = self.learning;
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(ConfigError::Validation(
                "learning.rate must be in (0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&discount) {
            return Err(ConfigError::Validation(
                "learning.discount must be in [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&exploration) {
            return Err(ConfigError::Validation(
                "learning.exploration must be in [0, 1]".into(),
            ));
        }
        if self.training.games == 0 {
            return Err(ConfigError::Validation(
                "training.games must be > 0".into(),
            ));
        }
        if self.training.size < crate::FIVE {
            return Err(ConfigError::Validation(format!(
                "training.size must be >= {}",
                crate::FIVE
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.training.games, 2);
        assert_eq!(config.training.size, 15);
        assert_eq!(config.server.bind, "127.0.0.1:5000");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[training]
games = 50

[learning]
exploration = 0.0
"#
        )
        .unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.training.games, 50);
        assert_eq!(config.training.size, crate::SIZE);
        assert_eq!(config.learning.exploration, 0.0);
        assert_eq!(config.learning.rate, crate::LEARNING_RATE);
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_out_of_range() {
        let mut config = Config::default();
        config.learning.rate = 0.0;
        assert!(config.validate().is_err());
        let mut config = Config::default();
        config.learning.discount = 1.5;
        assert!(config.validate().is_err());
        let mut config = Config::default();
        config.training.games = 0;
        assert!(config.validate().is_err());
        let mut config = Config::default();
        config.training.size = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        std::fs::write(&path, "[training\ngames = ").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }
}
