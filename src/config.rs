use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::game::{Board, Mark, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH};

/// Which kind of agent plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    Random,
    Human,
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(AgentKind::Minimax),
            "random" => Ok(AgentKind::Random),
            "human" => Ok(AgentKind::Human),
            other => Err(format!(
                "unknown agent kind '{other}' (expected minimax, random or human)"
            )),
        }
    }
}

/// Board geometry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

/// The two fixed opening placements: X at `first`, O at `second`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpeningConfig {
    pub first: [usize; 2],
    pub second: [usize; 2],
}

impl Default for OpeningConfig {
    fn default() -> Self {
        OpeningConfig {
            first: [2, 3],
            second: [2, 2],
        }
    }
}

/// Agent kind and search depth per side. Depths are independent; the two
/// sides may look ahead a different number of plies.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub x: AgentKind,
    pub o: AgentKind,
    pub x_depth: usize,
    pub o_depth: usize,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            x: AgentKind::Minimax,
            o: AgentKind::Minimax,
            x_depth: 2,
            o_depth: 4,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub opening: OpeningConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 || self.board.cols == 0 {
            return Err(ConfigError::Validation(
                "board.rows and board.cols must be > 0".into(),
            ));
        }
        if self.board.win_length < 2 {
            return Err(ConfigError::Validation(
                "board.win_length must be >= 2".into(),
            ));
        }
        if self.players.x_depth == 0 || self.players.o_depth == 0 {
            return Err(ConfigError::Validation(
                "players.x_depth and players.o_depth must be >= 1".into(),
            ));
        }

        let [fr, fc] = self.opening.first;
        let [sr, sc] = self.opening.second;
        if fr >= self.board.rows || fc >= self.board.cols {
            return Err(ConfigError::Validation(
                "opening.first is out of bounds".into(),
            ));
        }
        if sr >= self.board.rows || sc >= self.board.cols {
            return Err(ConfigError::Validation(
                "opening.second is out of bounds".into(),
            ));
        }
        if self.opening.first == self.opening.second {
            return Err(ConfigError::Validation(
                "opening placements must be distinct cells".into(),
            ));
        }
        Ok(())
    }

    /// Build the starting board with both opening placements applied.
    pub fn starting_board(&self) -> Board {
        let mut board = Board::new(self.board.rows, self.board.cols, self.board.win_length);
        let placed = board.place(self.opening.first[0], self.opening.first[1], Mark::X)
            && board.place(self.opening.second[0], self.opening.second[1], Mark::O);
        assert!(placed, "validated opening placements were rejected");
        board
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
