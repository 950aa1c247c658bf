//! Error types
//!
//! Every variant is an expected, recoverable condition. The presentation layer
//! decides how to surface them.

use std::fmt;
use std::io;

/// Rejected engine operation. State is left untouched whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Spawning needs at least one energy
    InsufficientEnergy,
    /// No empty slot left to spawn into
    BoardFull,
    /// No slot holds the item the current order asks for
    OrderNotReady,
    /// The daily bonus was already claimed this session
    BonusAlreadyClaimed,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InsufficientEnergy => write!(f, "not enough energy to spawn an item"),
            GameError::BoardFull => write!(f, "board is full, merge some items first"),
            GameError::OrderNotReady => write!(f, "no item on the board matches the current order"),
            GameError::BonusAlreadyClaimed => write!(f, "daily bonus already claimed"),
        }
    }
}

impl std::error::Error for GameError {}

/// Invalid or unreadable session settings
#[derive(Debug)]
pub enum ConfigError {
    /// Grid edge must be within `1..=MAX_GRID_SIZE`
    InvalidGridSize(usize),
    /// Starting energy may not exceed the cap
    EnergyAboveMax { initial: u32, max: u32 },
    /// Resumed state was built for a different grid size
    BoardSizeMismatch { expected: usize, found: usize },
    /// Resumed state carries a different energy cap
    MaxEnergyMismatch { expected: u32, found: u32 },
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGridSize(size) => write!(f, "invalid grid size {}", size),
            ConfigError::EnergyAboveMax { initial, max } => {
                write!(f, "initial energy {} exceeds max energy {}", initial, max)
            }
            ConfigError::BoardSizeMismatch { expected, found } => {
                write!(f, "state has a {}x{} board, settings expect {}x{}", found, found, expected, expected)
            }
            ConfigError::MaxEnergyMismatch { expected, found } => {
                write!(f, "state has max energy {}, settings expect {}", found, expected)
            }
            ConfigError::Io(e) => write!(f, "failed to read settings: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_messages() {
        assert_eq!(
            GameError::BoardFull.to_string(),
            "board is full, merge some items first"
        );
        assert!(GameError::InsufficientEnergy.to_string().contains("energy"));
    }

    #[test]
    fn test_config_error_source() {
        use std::error::Error;

        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ConfigError::from(parse);
        assert!(err.source().is_some());
        assert!(ConfigError::InvalidGridSize(0).source().is_none());
    }
}
