use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Player, StepRule, DEFAULT_BOARD_SIZE};

/// Rule settings for legality checks, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Side length of the square board.
    pub board_size: usize,
    /// Tag of the player asking to move when the caller does not say.
    pub player: Player,
    /// How a single diagonal step (no capture) is treated.
    pub step_rule: StepRule,
    /// Upper bound on positions the capture search may expand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            board_size: DEFAULT_BOARD_SIZE,
            player: Player::ONE,
            step_rule: StepRule::default(),
            max_expansions: None,
        }
    }
}

impl RulesConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: RulesConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Validation("board_size must be >= 1".into()));
        }
        if self.player.tag() == 0 {
            return Err(ConfigError::Validation(
                "player must be a nonzero tag".into(),
            ));
        }
        if self.max_expansions == Some(0) {
            return Err(ConfigError::Validation(
                "max_expansions must be >= 1 when set".into(),
            ));
        }
        Ok(())
    }

    /// Reject a board whose side differs from `board_size`.
    pub fn check_board_size(&self, size: usize) -> Result<(), ConfigError> {
        if size != self.board_size {
            return Err(ConfigError::Validation(format!(
                "board_size is {} but the board is {size}x{size}",
                self.board_size
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&RulesConfig::default()).expect("default config serializes")
    }
}
