use std::{fs, io, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_GAME_CONFIG_YAML: &str = include_str!("../../config/game.default.yaml");

/// Starting configuration for a question tree.
/// Every constructor checks that the initial answer is a single, non-blank record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    initial_answer: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            initial_answer: "computer".to_string(),
        }
    }
}

impl GameConfig {
    pub fn new(initial_answer: impl Into<String>) -> Result<Self, ConfigError> {
        let initial_answer = initial_answer.into();
        check_answer(&initial_answer)?;
        Ok(GameConfig { initial_answer })
    }

    /// Object guessed before anything has been learned or loaded
    pub fn initial_answer(&self) -> &str {
        &self.initial_answer
    }

    /// YAML text shipped in `config/game.default.yaml`
    pub fn builtin_yaml() -> &'static str {
        BUILTIN_GAME_CONFIG_YAML
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        BUILTIN_GAME_CONFIG_YAML.parse()
    }

    /// Read and check a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        fs::read_to_string(path)?.parse()
    }
}

impl FromStr for GameConfig {
    type Err = ConfigError;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        let config: GameConfig = serde_yaml::from_str(yaml)?;
        check_answer(&config.initial_answer)?;
        Ok(config)
    }
}

fn check_answer(answer: &str) -> Result<(), ConfigError> {
    if answer.trim().is_empty() {
        Err(ConfigError::BlankAnswer)
    } else if answer.contains(['\n', '\r']) {
        Err(ConfigError::MultiLineAnswer(answer.to_string()))
    } else {
        Ok(())
    }
}

#[derive(Debug, Error)]
/// Error type for reading a `GameConfig`.
pub enum ConfigError {
    #[error("failed to read game config: {0}")]
    Io(#[from] io::Error),

    #[error("game config is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("initial_answer must not be blank")]
    BlankAnswer,

    #[error("initial_answer must fit on one line, got {0:?}")]
    MultiLineAnswer(String),
}
