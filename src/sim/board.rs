//! Fixed-size square board of slots
//!
//! Slots are stored row-major. The length is fixed at construction and never
//! changes for the life of a session.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::consts::MAX_GRID_SIZE;

/// One grid position: empty or holding exactly one item
pub type Slot = Option<Item>;

/// Slots on a `grid_size` x `grid_size` board, `None` outside `1..=MAX_GRID_SIZE`
pub fn slot_count_for(grid_size: usize) -> Option<usize> {
    if !(1..=MAX_GRID_SIZE).contains(&grid_size) {
        return None;
    }
    grid_size.checked_mul(grid_size)
}

/// The play grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    grid_size: usize,
    slots: Vec<Slot>,
}

impl Board {
    /// Empty `grid_size` x `grid_size` board.
    ///
    /// The size is clamped to `1..=MAX_GRID_SIZE`; [`crate::Settings::validate`]
    /// rejects anything outside that range before a session starts.
    pub fn new(grid_size: usize) -> Self {
        let grid_size = grid_size.clamp(1, MAX_GRID_SIZE);
        Self {
            grid_size,
            slots: vec![None; grid_size * grid_size],
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.slots.len()
    }

    /// Item at `index`, `None` for empty or out-of-range slots
    pub fn get(&self, index: usize) -> Option<Item> {
        self.slots.get(index).copied().flatten()
    }

    /// (row, column) of a slot index
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.grid_size, index % self.grid_size)
    }

    /// Put `item` at `index`, returning whatever was there.
    ///
    /// Out-of-range indices are ignored and return `None`.
    pub fn place(&mut self, index: usize, item: Item) -> Slot {
        self.slots.get_mut(index).and_then(|slot| slot.replace(item))
    }

    /// Empty the slot at `index`, returning its item
    pub fn take(&mut self, index: usize) -> Slot {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Exchange the contents of two slots
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// Indices of all empty slots, ascending
    pub fn empty_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Lowest index holding `item`
    pub fn find_first(&self, item: Item) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(item))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Occupied slots with their indices, ascending
    pub fn items(&self) -> impl Iterator<Item = (usize, Item)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|item| (i, item)))
    }
}

/// One line per row, cells separated by a space. Occupied cells print as the
/// item tag (`W1`, `M3`), empty cells as ` .` so columns stay two wide.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.slots.chunks(self.grid_size.max(1)) {
            let cells: Vec<String> = row
                .iter()
                .map(|slot| match slot {
                    Some(item) => item.to_string(),
                    None => " .".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Unchecked wire form, validated into [`Board`] on deserialize
#[derive(Deserialize)]
struct RawBoard {
    grid_size: usize,
    slots: Vec<Slot>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = slot_count_for(raw.grid_size)
            .ok_or_else(|| format!("invalid grid size {}", raw.grid_size))?;
        if raw.slots.len() != expected {
            return Err(format!(
                "board has {} slots, expected {}",
                raw.slots.len(),
                expected
            ));
        }
        Ok(Board {
            grid_size: raw.grid_size,
            slots: raw.slots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::item::ItemKind;

    fn item(kind: ItemKind, level: u8) -> Item {
        Item::new(kind, level).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.slot_count(), 25);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_indices().len(), 25);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_and_take() {
        let mut board = Board::new(3);
        let w1 = item(ItemKind::Moisture, 1);
        assert_eq!(board.place(4, w1), None);
        assert_eq!(board.get(4), Some(w1));
        assert_eq!(board.occupied_count(), 1);
        assert!(!board.empty_indices().contains(&4));

        assert_eq!(board.take(4), Some(w1));
        assert_eq!(board.get(4), None);
        assert_eq!(board.take(4), None);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut board = Board::new(2);
        assert_eq!(board.place(9, item(ItemKind::Makeup, 2)), None);
        assert_eq!(board.get(9), None);
        assert_eq!(board.take(9), None);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_find_first_is_lowest_index() {
        let mut board = Board::new(5);
        let m3 = item(ItemKind::Makeup, 3);
        board.place(12, m3);
        board.place(6, m3);
        board.place(2, item(ItemKind::Moisture, 3));
        assert_eq!(board.find_first(m3), Some(6));
        assert_eq!(board.find_first(item(ItemKind::Makeup, 4)), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2);
        for i in 0..4 {
            board.place(i, item(ItemKind::Moisture, 1));
        }
        assert!(board.is_full());
        assert!(board.empty_indices().is_empty());
    }

    #[test]
    fn test_row_col_and_display() {
        let mut board = Board::new(2);
        board.place(1, item(ItemKind::Makeup, 2));
        assert_eq!(board.row_col(3), (1, 1));
        assert_eq!(board.to_string(), " . M2\n .  .\n");
    }

    #[test]
    fn test_grid_size_bounds() {
        assert_eq!(slot_count_for(0), None);
        assert_eq!(slot_count_for(5), Some(25));
        assert_eq!(slot_count_for(MAX_GRID_SIZE), Some(MAX_GRID_SIZE * MAX_GRID_SIZE));
        assert_eq!(slot_count_for(MAX_GRID_SIZE + 1), None);
        assert_eq!(slot_count_for(usize::MAX), None);

        assert_eq!(Board::new(0).grid_size(), 1);
        assert_eq!(Board::new(usize::MAX).grid_size(), MAX_GRID_SIZE);
    }

    #[test]
    fn test_deserialize_rejects_bad_grid_size() {
        assert!(serde_json::from_str::<Board>(r#"{"grid_size":0,"slots":[]}"#).is_err());
        let json = r#"{"grid_size":4294967296,"slots":[]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn test_deserialize_checks_slot_count() {
        let json = r#"{"grid_size":2,"slots":[null,null,null]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
        let json = r#"{"grid_size":1,"slots":[{"kind":"Moisture","level":2}]}"#;
        let board: Board = serde_json::from_str(json).unwrap();
        assert_eq!(board.get(0), Item::new(ItemKind::Moisture, 2));
    }
}
