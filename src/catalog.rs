//! Item display catalog
//!
//! Static names, icons and images per (kind, level). Rendering only; the
//! rules never look at this table.

use crate::sim::{Item, ItemKind};

/// Display metadata for one item level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDef {
    pub kind: ItemKind,
    pub level: u8,
    pub name: &'static str,
    /// Emoji fallback when no image exists
    pub icon: &'static str,
    pub image: Option<&'static str>,
}

/// How a cell should draw an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    Image(&'static str),
    Icon(&'static str),
}

impl ItemDef {
    /// Image when available, icon otherwise
    pub fn visual(&self) -> Visual {
        match self.image {
            Some(path) => Visual::Image(path),
            None => Visual::Icon(self.icon),
        }
    }
}

const fn def(
    kind: ItemKind,
    level: u8,
    name: &'static str,
    icon: &'static str,
    image: Option<&'static str>,
) -> ItemDef {
    ItemDef {
        kind,
        level,
        name,
        icon,
        image,
    }
}

pub static MOISTURE: [ItemDef; 5] = [
    def(ItemKind::Moisture, 1, "Water Drop", "💧", None),
    // No dedicated skin image, shares the toner art
    def(ItemKind::Moisture, 2, "Skin Toner", "🧴", Some("images/toner.png")),
    def(ItemKind::Moisture, 3, "Cream", "🥣", Some("images/cream.png")),
    def(ItemKind::Moisture, 4, "Sheet Mask", "🎭", Some("images/sheet-mask.png")),
    def(ItemKind::Moisture, 5, "Ampoule", "🧪", Some("images/ampoule.png")),
];

pub static MAKEUP: [ItemDef; 5] = [
    def(ItemKind::Makeup, 1, "Red Powder", "✨", None),
    def(ItemKind::Makeup, 2, "Red Potion", "🍷", None),
    def(ItemKind::Makeup, 3, "Tint", "💄", Some("images/tint.png")),
    def(ItemKind::Makeup, 4, "Lip Balm", "💋", Some("images/lip-balm.png")),
    def(ItemKind::Makeup, 5, "Lipstick", "👄", Some("images/lipstick.png")),
];

/// All levels of one track, index 0 is level 1
pub fn track(kind: ItemKind) -> &'static [ItemDef; 5] {
    match kind {
        ItemKind::Moisture => &MOISTURE,
        ItemKind::Makeup => &MAKEUP,
    }
}

/// Catalog entry for an item
pub fn lookup(item: Item) -> &'static ItemDef {
    // Item levels are 1..=5, matching the table length
    &track(item.kind())[usize::from(item.level() - 1)]
}
