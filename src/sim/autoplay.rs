//! Greedy autoplay policy
//!
//! Picks one action per call from the current state. Used by the demo binary
//! and to drive long sessions in tests.

use super::engine::Action;
use super::state::SessionState;

/// Next action for the greedy player, `None` once nothing useful is left.
///
/// Priority: deliver a ready order, merge the most useful pair, spawn, then
/// claim the daily bonus when out of energy.
pub fn next_action(state: &SessionState) -> Option<Action> {
    if state.is_order_satisfiable() {
        return Some(Action::FulfillOrder);
    }

    if let Some((from, to)) = best_merge(state) {
        return Some(Action::MoveOrMerge { from, to });
    }

    let board = state.board();
    if !board.is_full() {
        if state.energy() > 0 {
            return Some(Action::Spawn);
        }
        if !state.daily_bonus_claimed() && state.max_energy() > 0 {
            return Some(Action::ClaimDailyBonus);
        }
    }

    None
}

/// Mergeable pair as (from, to). Pairs that build toward the current order
/// come first, then lower levels, then lower indices.
fn best_merge(state: &SessionState) -> Option<(usize, usize)> {
    let order = state.current_order();
    let items: Vec<_> = state.board().items().collect();

    let mut best: Option<((bool, u8, usize, usize), (usize, usize))> = None;
    for (a, &(i, item)) in items.iter().enumerate() {
        for &(j, other) in &items[a + 1..] {
            if !item.can_merge_with(&other) {
                continue;
            }
            let off_track = !(item.kind() == order.kind() && item.level() < order.level());
            let key = (off_track, item.level(), i, j);
            if best.is_none_or(|(k, _)| key < k) {
                best = Some((key, (i, j)));
            }
        }
    }
    best.map(|(_, pair)| pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::board::Board;
    use crate::sim::engine::GridEngine;
    use crate::sim::item::{Item, ItemKind};
    use crate::sim::order::Order;

    fn item(kind: ItemKind, level: u8) -> Item {
        Item::new(kind, level).unwrap()
    }

    fn state_with(board: Board, energy: u32, order: Order) -> SessionState {
        SessionState::new(&Settings::default(), order)
            .with_board(board)
            .with_energy(energy)
    }

    #[test]
    fn test_fulfill_first() {
        let mut board = Board::new(5);
        board.place(3, item(ItemKind::Makeup, 2));
        board.place(4, item(ItemKind::Moisture, 1));
        board.place(5, item(ItemKind::Moisture, 1));
        let state = state_with(board, 10, Order::new(ItemKind::Makeup, 2).unwrap());
        assert_eq!(next_action(&state), Some(Action::FulfillOrder));
    }

    #[test]
    fn test_prefers_merges_toward_order() {
        let mut board = Board::new(5);
        board.place(0, item(ItemKind::Moisture, 1));
        board.place(1, item(ItemKind::Moisture, 1));
        board.place(7, item(ItemKind::Makeup, 2));
        board.place(9, item(ItemKind::Makeup, 2));
        let state = state_with(board, 10, Order::new(ItemKind::Makeup, 4).unwrap());
        assert_eq!(
            next_action(&state),
            Some(Action::MoveOrMerge { from: 7, to: 9 })
        );
    }

    #[test]
    fn test_skips_max_level_pairs() {
        let mut board = Board::new(5);
        board.place(0, item(ItemKind::Makeup, 5));
        board.place(1, item(ItemKind::Makeup, 5));
        let state = state_with(board, 3, Order::new(ItemKind::Moisture, 2).unwrap());
        assert_eq!(next_action(&state), Some(Action::Spawn));
    }

    #[test]
    fn test_bonus_then_stop() {
        let state = state_with(Board::new(5), 0, Order::new(ItemKind::Moisture, 2).unwrap());
        assert_eq!(next_action(&state), Some(Action::ClaimDailyBonus));

        let mut board = Board::new(1);
        board.place(0, item(ItemKind::Moisture, 1));
        let state = state_with(board, 5, Order::new(ItemKind::Moisture, 2).unwrap());
        assert_eq!(next_action(&state), None);
    }

    #[test]
    fn test_full_session_terminates() {
        let mut engine = GridEngine::new(Settings::default(), 2024).unwrap();
        let mut steps = 0;
        while let Some(action) = next_action(engine.state()) {
            engine.apply(action).unwrap();
            steps += 1;
            assert!(steps < 10_000, "autoplay did not settle");
        }
        let state = engine.state();
        assert!(state.points() > 0);
        assert!(state.points() % 50 == 0);
        assert!(state.daily_bonus_claimed());
    }
}
