//! Leveled items

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_LEVEL, MIN_LEVEL};

/// Item track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Moisture,
    Makeup,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Moisture, ItemKind::Makeup];

    /// Uniform 50/50 draw between the two tracks
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            ItemKind::Moisture
        } else {
            ItemKind::Makeup
        }
    }

    /// Single-letter tag used in board dumps
    pub fn tag(&self) -> char {
        match self {
            ItemKind::Moisture => 'W',
            ItemKind::Makeup => 'M',
        }
    }
}

/// An item on the board. Level is always within `MIN_LEVEL..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    kind: ItemKind,
    level: u8,
}

impl Item {
    /// Build an item, `None` if `level` is outside the valid range
    pub fn new(kind: ItemKind, level: u8) -> Option<Self> {
        (MIN_LEVEL..=MAX_LEVEL)
            .contains(&level)
            .then_some(Self { kind, level })
    }

    /// Fresh level 1 item as produced by spawning
    pub fn base(kind: ItemKind) -> Self {
        Self {
            kind,
            level: MIN_LEVEL,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Item produced by merging two of this item, `None` at max level
    pub fn merged(&self) -> Option<Self> {
        Self::new(self.kind, self.level + 1)
    }

    /// Two items merge when they are equal and below the level cap
    pub fn can_merge_with(&self, other: &Item) -> bool {
        self == other && !self.is_max_level()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.tag(), self.level)
    }
}

/// Unchecked wire form, validated into [`Item`] on deserialize
#[derive(Deserialize)]
struct RawItem {
    kind: ItemKind,
    level: u8,
}

impl TryFrom<RawItem> for Item {
    type Error = String;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Item::new(raw.kind, raw.level).ok_or_else(|| format!("item level {} out of range", raw.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_level_bounds() {
        assert!(Item::new(ItemKind::Makeup, 0).is_none());
        assert!(Item::new(ItemKind::Makeup, 6).is_none());
        assert_eq!(Item::new(ItemKind::Makeup, 5).unwrap().level(), 5);
        assert_eq!(Item::base(ItemKind::Moisture).level(), 1);
    }

    #[test]
    fn test_merge_rules() {
        let w2 = Item::new(ItemKind::Moisture, 2).unwrap();
        let m2 = Item::new(ItemKind::Makeup, 2).unwrap();
        let w5 = Item::new(ItemKind::Moisture, 5).unwrap();

        assert!(w2.can_merge_with(&w2));
        assert!(!w2.can_merge_with(&m2));
        assert!(!w5.can_merge_with(&w5));
        assert_eq!(w2.merged(), Item::new(ItemKind::Moisture, 3));
        assert_eq!(w5.merged(), None);
    }

    #[test]
    fn test_deserialize_rejects_bad_level() {
        let ok: Item = serde_json::from_str(r#"{"kind":"Makeup","level":3}"#).unwrap();
        assert_eq!(ok, Item::new(ItemKind::Makeup, 3).unwrap());
        assert!(serde_json::from_str::<Item>(r#"{"kind":"Makeup","level":9}"#).is_err());
    }

    #[test]
    fn test_random_kind_hits_both_tracks() {
        let mut rng = Pcg32::seed_from_u64(7);
        let draws: Vec<ItemKind> = (0..64).map(|_| ItemKind::random(&mut rng)).collect();
        assert!(draws.contains(&ItemKind::Moisture));
        assert!(draws.contains(&ItemKind::Makeup));
    }

    #[test]
    fn test_display() {
        assert_eq!(Item::new(ItemKind::Makeup, 3).unwrap().to_string(), "M3");
    }
}
