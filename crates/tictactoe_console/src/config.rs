//! Game configuration: player names and symbols.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_board::{Player, Symbol};
use tracing::{debug, info, instrument};

/// Player setup, loaded from TOML and adjusted by command-line flags.
///
/// ```toml
/// player1_name = "Ada"
/// player2_name = "Grace"
/// player1_symbol = "O"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the player who moves first.
    #[serde(default = "default_player1_name")]
    player1_name: String,

    /// Name of the player who moves second.
    #[serde(default = "default_player2_name")]
    player2_name: String,

    /// Symbol of the first player; the second player gets the other one.
    #[serde(default = "default_player1_symbol")]
    player1_symbol: Symbol,
}

fn default_player1_name() -> String {
    "Player 1".to_string()
}

fn default_player2_name() -> String {
    "Player 2".to_string()
}

fn default_player1_symbol() -> Symbol {
    Symbol::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1_name: default_player1_name(),
            player2_name: default_player2_name(),
            player1_symbol: default_player1_symbol(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player1 = %config.player1_name, player2 = %config.player2_name, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces any setting for which a value is given.
    pub fn with_overrides(
        mut self,
        player1_name: Option<String>,
        player2_name: Option<String>,
        player1_symbol: Option<Symbol>,
    ) -> Self {
        if let Some(name) = player1_name {
            self.player1_name = name;
        }
        if let Some(name) = player2_name {
            self.player2_name = name;
        }
        if let Some(symbol) = player1_symbol {
            self.player1_symbol = symbol;
        }
        self
    }

    /// Checks that both names are usable and tell the players apart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let first = self.player1_name.trim();
        let second = self.player2_name.trim();
        if first.is_empty() || second.is_empty() {
            return Err(ConfigError::new("Player names must not be empty"));
        }
        if first == second {
            return Err(ConfigError::new(format!(
                "Both players are named {:?}",
                first
            )));
        }
        Ok(())
    }

    /// Builds the two players, validating first.
    #[instrument(skip(self))]
    pub fn players(&self) -> Result<(Player, Player), ConfigError> {
        self.validate()?;
        Ok((
            Player::new(self.player1_name.trim().to_string(), self.player1_symbol),
            Player::new(
                self.player2_name.trim().to_string(),
                self.player1_symbol.opponent(),
            ),
        ))
    }
}
