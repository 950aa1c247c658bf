//! Delivery orders

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::item::{Item, ItemKind};
use crate::consts::{ORDER_MAX_LEVEL, ORDER_MIN_LEVEL};

/// The current delivery goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOrder")]
pub struct Order {
    target: Item,
}

impl Order {
    /// Order for `(kind, level)`, `None` unless `level` is a valid order level
    pub fn new(kind: ItemKind, level: u8) -> Option<Self> {
        if !(ORDER_MIN_LEVEL..=ORDER_MAX_LEVEL).contains(&level) {
            return None;
        }
        Item::new(kind, level).map(|target| Self { target })
    }

    /// Uniform kind, uniform level in `ORDER_MIN_LEVEL..=ORDER_MAX_LEVEL`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = ItemKind::random(rng);
        let level = rng.random_range(ORDER_MIN_LEVEL..=ORDER_MAX_LEVEL);
        // Order levels sit strictly inside the item level range
        let target = Item::new(kind, level).unwrap_or(Item::base(kind));
        Self { target }
    }

    /// The item this order asks for
    pub fn target(&self) -> Item {
        self.target
    }

    pub fn kind(&self) -> ItemKind {
        self.target.kind()
    }

    pub fn level(&self) -> u8 {
        self.target.level()
    }

    /// Lowest board index holding the requested item
    pub fn find_match(&self, board: &Board) -> Option<usize> {
        board.find_first(self.target)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order {}", self.target)
    }
}

/// Unchecked wire form, validated into [`Order`] on deserialize
#[derive(Deserialize)]
struct RawOrder {
    target: Item,
}

impl TryFrom<RawOrder> for Order {
    type Error = String;

    fn try_from(raw: RawOrder) -> Result<Self, Self::Error> {
        let target = raw.target;
        Order::new(target.kind(), target.level())
            .ok_or_else(|| format!("order level {} out of range", target.level()))
    }
}
