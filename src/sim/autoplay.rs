//! Demo / idle-mode player
//!
//! Greedy and short-sighted on purpose: it finishes sets it has already
//! started and otherwise digs from the top of the stack.

use super::state::GameState;
use super::tile::{Tile, TileId};

/// Pick the tile the demo player would tap next
///
/// Preference order: most copies of the same kind already in the slot, then
/// the higher layer (uncovers more), then the lowest id for determinism.
pub fn choose_tile(state: &GameState) -> Option<TileId> {
    if state.is_terminal() {
        return None;
    }

    let slot_kinds = state.slot_kinds();
    let in_slot = |tile: &Tile| slot_kinds.iter().filter(|&&k| k == tile.kind).count();

    state
        .selectable_tiles()
        .max_by(|a, b| {
            in_slot(a)
                .cmp(&in_slot(b))
                .then(a.layer.cmp(&b.layer))
                .then(b.id.cmp(&a.id))
        })
        .map(|tile| tile.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineParams;
    use crate::sim::occlusion::refresh_selectable;
    use crate::sim::slot::{select_tile, settle};
    use glam::Vec2;

    fn state_with(tiles: Vec<Tile>) -> GameState {
        let params = EngineParams::default();
        let mut state = GameState::new(0, tiles);
        refresh_selectable(&mut state.all_tiles, params.tile_size(), params.overlap_threshold);
        state
    }

    #[test]
    fn test_prefers_kind_already_in_slot() {
        let params = EngineParams::default();
        let mut state = state_with(vec![
            Tile::new(TileId(0), 2, 0, Vec2::new(0.0, 0.0)),
            Tile::new(TileId(1), 1, 0, Vec2::new(100.0, 0.0)),
            Tile::new(TileId(2), 2, 0, Vec2::new(200.0, 0.0)),
        ]);
        select_tile(&mut state, &params, TileId(0));
        settle(&mut state);
        assert_eq!(choose_tile(&state), Some(TileId(2)));
    }

    #[test]
    fn test_prefers_higher_layer_then_lower_id() {
        let state = state_with(vec![
            Tile::new(TileId(0), 0, 0, Vec2::new(0.0, 0.0)),
            Tile::new(TileId(1), 1, 1, Vec2::new(200.0, 0.0)),
            Tile::new(TileId(2), 2, 1, Vec2::new(400.0, 0.0)),
        ]);
        assert_eq!(choose_tile(&state), Some(TileId(1)));
    }

    #[test]
    fn test_nothing_to_pick_when_terminal() {
        let mut state = state_with(vec![Tile::new(TileId(0), 0, 0, Vec2::ZERO)]);
        state.phase = crate::sim::GamePhase::GameOver;
        assert_eq!(choose_tile(&state), None);
    }
}
