//! Session state
//!
//! Everything the rules read and write lives here. Only [`super::GridEngine`]
//! mutates it once a session is running.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::order::Order;
use crate::settings::Settings;

/// Complete session state (serializable snapshot for rendering)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSessionState")]
pub struct SessionState {
    /// Seed the session RNG was built from, if known
    pub(crate) seed: Option<u64>,
    pub(crate) board: Board,
    /// Always within `0..=max_energy`
    pub(crate) energy: u32,
    pub(crate) max_energy: u32,
    /// Never decreases during a session
    pub(crate) points: u64,
    pub(crate) current_order: Order,
    pub(crate) daily_bonus_claimed: bool,
}

impl SessionState {
    /// Fresh session: empty board, starting energy, no points
    pub fn new(settings: &Settings, order: Order) -> Self {
        Self {
            seed: None,
            board: Board::new(settings.grid_size),
            energy: settings.initial_energy.min(settings.max_energy),
            max_energy: settings.max_energy,
            points: 0,
            current_order: order,
            daily_bonus_claimed: false,
        }
    }

    /// Replace the board, e.g. to start from a prepared layout
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Set energy, clamped to the cap
    pub fn with_energy(mut self, energy: u32) -> Self {
        self.energy = energy.min(self.max_energy);
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.current_order = order;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn max_energy(&self) -> u32 {
        self.max_energy
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn current_order(&self) -> Order {
        self.current_order
    }

    pub fn daily_bonus_claimed(&self) -> bool {
        self.daily_bonus_claimed
    }

    /// True iff some slot holds the item the current order asks for.
    ///
    /// Derived from the board on every call, never cached.
    pub fn is_order_satisfiable(&self) -> bool {
        self.current_order.find_match(&self.board).is_some()
    }

    /// Add energy up to the cap, returning the amount actually added
    pub(crate) fn add_energy(&mut self, amount: u32) -> u32 {
        let before = self.energy;
        self.energy = self.energy.saturating_add(amount).min(self.max_energy);
        self.energy - before
    }
}

/// Unchecked wire form, validated into [`SessionState`] on deserialize
#[derive(Deserialize)]
struct RawSessionState {
    seed: Option<u64>,
    board: Board,
    energy: u32,
    max_energy: u32,
    points: u64,
    current_order: Order,
    daily_bonus_claimed: bool,
}

impl TryFrom<RawSessionState> for SessionState {
    type Error = String;

    fn try_from(raw: RawSessionState) -> Result<Self, Self::Error> {
        if raw.energy > raw.max_energy {
            return Err(format!(
                "energy {} exceeds max energy {}",
                raw.energy, raw.max_energy
            ));
        }
        Ok(SessionState {
            seed: raw.seed,
            board: raw.board,
            energy: raw.energy,
            max_energy: raw.max_energy,
            points: raw.points,
            current_order: raw.current_order,
            daily_bonus_claimed: raw.daily_bonus_claimed,
        })
    }
}
