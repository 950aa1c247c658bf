//! Deterministic rules module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, injected into the engine
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod board;
pub mod engine;
pub mod item;
pub mod order;
pub mod state;

pub use board::{Board, Slot};
pub use engine::{Action, Fulfillment, GridEngine, MoveOutcome, Outcome, Spawn};
pub use item::{Item, ItemKind};
pub use order::Order;
pub use state::SessionState;
