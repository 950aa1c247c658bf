//! Rule engine
//!
//! The only writer of [`SessionState`]. Each operation validates first and then
//! applies its whole effect, so a rejected call leaves the state untouched.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::item::{Item, ItemKind};
use super::order::Order;
use super::state::SessionState;
use crate::consts::ORDER_REWARD;
use crate::error::{ConfigError, GameError};
use crate::settings::Settings;

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Spawn,
    MoveOrMerge { from: usize, to: usize },
    FulfillOrder,
    ClaimDailyBonus,
}

/// Result of a successful spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub index: usize,
    pub item: Item,
}

/// What `move_or_merge` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Item moved into an empty slot
    Moved,
    /// Two equal items combined into `item` at the destination
    Merged { item: Item },
    /// Source and destination items exchanged places
    Swapped,
    /// Nothing happened (same slot, empty source, bad index, max-level pair)
    Ignored,
}

/// Result of delivering an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fulfillment {
    /// Slot the delivered item was taken from
    pub index: usize,
    pub item: Item,
    pub reward: u64,
    /// Order generated to replace the fulfilled one
    pub next_order: Order,
}

/// Result of [`GridEngine::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Spawned(Spawn),
    Moved(MoveOutcome),
    Fulfilled(Fulfillment),
    BonusClaimed { gained: u32 },
}

/// Owns the session state and the RNG driving it
#[derive(Debug, Clone)]
pub struct GridEngine<R = Pcg32> {
    settings: Settings,
    state: SessionState,
    rng: R,
}

impl GridEngine<Pcg32> {
    /// Start a session with a seeded PCG generator
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        let mut engine = Self::with_rng(settings, Pcg32::seed_from_u64(seed))?;
        engine.state.seed = Some(seed);
        log::info!("Session started with seed: {}", seed);
        Ok(engine)
    }
}

impl<R: Rng> GridEngine<R> {
    /// Start a session driven by `rng`
    pub fn with_rng(settings: Settings, mut rng: R) -> Result<Self, ConfigError> {
        settings.validate()?;
        let order = Order::random(&mut rng);
        let state = SessionState::new(&settings, order);
        log::debug!(
            "New session: {}x{} board, energy {}/{}, {}",
            settings.grid_size,
            settings.grid_size,
            state.energy,
            state.max_energy,
            order
        );
        Ok(Self {
            settings,
            state,
            rng,
        })
    }

    /// Resume from an existing state built for the same settings
    pub fn from_state(settings: Settings, state: SessionState, rng: R) -> Result<Self, ConfigError> {
        settings.validate()?;
        if state.board.grid_size() != settings.grid_size {
            return Err(ConfigError::BoardSizeMismatch {
                expected: settings.grid_size,
                found: state.board.grid_size(),
            });
        }
        if state.max_energy != settings.max_energy {
            return Err(ConfigError::MaxEnergyMismatch {
                expected: settings.max_energy,
                found: state.max_energy,
            });
        }
        Ok(Self {
            settings,
            state,
            rng,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Dispatch a single action
    pub fn apply(&mut self, action: Action) -> Result<Outcome, GameError> {
        match action {
            Action::Spawn => self.spawn().map(Outcome::Spawned),
            Action::MoveOrMerge { from, to } => Ok(Outcome::Moved(self.move_or_merge(from, to))),
            Action::FulfillOrder => self.fulfill_order().map(Outcome::Fulfilled),
            Action::ClaimDailyBonus => self
                .claim_daily_bonus()
                .map(|gained| Outcome::BonusClaimed { gained }),
        }
    }

    /// Spend one energy to place a level 1 item of random kind in a random
    /// empty slot
    pub fn spawn(&mut self) -> Result<Spawn, GameError> {
        if self.state.energy == 0 {
            return Err(GameError::InsufficientEnergy);
        }
        let empty = self.state.board.empty_indices();
        if empty.is_empty() {
            return Err(GameError::BoardFull);
        }

        let index = empty[self.rng.random_range(0..empty.len())];
        let item = Item::base(ItemKind::random(&mut self.rng));

        self.state.energy -= 1;
        self.state.board.place(index, item);
        log::debug!(
            "Spawned {} at {} (energy {})",
            item,
            index,
            self.state.energy
        );

        Ok(Spawn { index, item })
    }

    /// Move, merge or swap the item at `from` onto `to`.
    ///
    /// Never fails: invalid or pointless requests are ignored.
    pub fn move_or_merge(&mut self, from: usize, to: usize) -> MoveOutcome {
        let board = &mut self.state.board;
        if from == to || !board.contains_index(from) || !board.contains_index(to) {
            return MoveOutcome::Ignored;
        }
        let Some(source) = board.get(from) else {
            return MoveOutcome::Ignored;
        };

        match board.get(to) {
            None => {
                board.take(from);
                board.place(to, source);
                log::debug!("Moved {} from {} to {}", source, from, to);
                MoveOutcome::Moved
            }
            Some(target) if target == source => match source.merged() {
                Some(merged) => {
                    board.take(from);
                    board.place(to, merged);
                    log::debug!("Merged {} at {} and {} into {}", source, from, to, merged);
                    MoveOutcome::Merged { item: merged }
                }
                None => MoveOutcome::Ignored,
            },
            Some(target) => {
                board.swap(from, to);
                log::debug!("Swapped {} at {} with {} at {}", source, from, target, to);
                MoveOutcome::Swapped
            }
        }
    }

    /// Replace the current order with a fresh random one
    pub fn generate_order(&mut self) -> Order {
        let order = Order::random(&mut self.rng);
        self.state.current_order = order;
        log::debug!("New {}", order);
        order
    }

    pub fn is_order_satisfiable(&self) -> bool {
        self.state.is_order_satisfiable()
    }

    /// Deliver the lowest-index item matching the current order
    pub fn fulfill_order(&mut self) -> Result<Fulfillment, GameError> {
        let order = self.state.current_order;
        let index = order
            .find_match(&self.state.board)
            .ok_or(GameError::OrderNotReady)?;

        let item = self
            .state
            .board
            .take(index)
            .ok_or(GameError::OrderNotReady)?;
        self.state.points = self.state.points.saturating_add(ORDER_REWARD);
        log::info!(
            "Delivered {} from slot {}: +{} points ({} total)",
            item,
            index,
            ORDER_REWARD,
            self.state.points
        );

        let next_order = self.generate_order();
        Ok(Fulfillment {
            index,
            item,
            reward: ORDER_REWARD,
            next_order,
        })
    }

    /// One-time energy bonus, clamped to the cap. Returns the energy gained.
    pub fn claim_daily_bonus(&mut self) -> Result<u32, GameError> {
        if self.state.daily_bonus_claimed {
            return Err(GameError::BonusAlreadyClaimed);
        }
        self.state.daily_bonus_claimed = true;
        let gained = self.state.add_energy(self.settings.daily_bonus_energy);
        log::info!(
            "Daily bonus claimed: +{} energy ({}/{})",
            gained,
            self.state.energy,
            self.state.max_energy
        );
        Ok(gained)
    }

    /// External energy refill, clamped to the cap. Returns the energy gained.
    pub fn refill_energy(&mut self, amount: u32) -> u32 {
        let gained = self.state.add_energy(amount);
        log::debug!("Refilled {} energy ({}/{})", gained, self.state.energy, self.state.max_energy);
        gained
    }
}
