//! Merge Grid - a single-player merge puzzle engine
//!
//! Core modules:
//! - `sim`: Deterministic rules (board, merging, orders, energy)
//! - `catalog`: Display metadata per item, never read by the rules
//! - `input`: Tap-to-select gesture resolution
//! - `settings`: Session bootstrap configuration

pub mod catalog;
pub mod error;
pub mod input;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, GameError};
pub use settings::Settings;
pub use sim::{
    Action, Board, Fulfillment, GridEngine, Item, ItemKind, MoveOutcome, Order, Outcome,
    SessionState, Spawn,
};

/// Game configuration constants
pub mod consts {
    /// Default grid edge length (grid is always square)
    pub const GRID_SIZE: usize = 5;
    /// Largest accepted grid edge length
    pub const MAX_GRID_SIZE: usize = 64;
    /// Default energy cap
    pub const MAX_ENERGY: u32 = 100;
    /// Default energy at session start
    pub const INITIAL_ENERGY: u32 = 50;
    /// Energy granted by the one-time daily bonus
    pub const DAILY_BONUS_ENERGY: u32 = 50;

    /// Points granted per fulfilled order
    pub const ORDER_REWARD: u64 = 50;
    /// Lowest level an order may ask for
    pub const ORDER_MIN_LEVEL: u8 = 2;
    /// Highest level an order may ask for
    pub const ORDER_MAX_LEVEL: u8 = 4;

    /// Level of freshly spawned items
    pub const MIN_LEVEL: u8 = 1;
    /// Items never merge past this level
    pub const MAX_LEVEL: u8 = 5;
}
