//! Read-only views for the presentation layer
//!
//! A [`Snapshot`] is a self-contained copy of the game for one frame: tile
//! geometry, faces resolved from configuration, and a hint of which animation
//! each tile should play. The hints come from the last action's events, last
//! until the host settles it, and never feed back into the engine.

use serde::{Deserialize, Serialize};

use crate::config::EngineParams;
use crate::sim::{GameEvent, GamePhase, GameState, Tile, TileFace, TileId};

/// Transient effect a tile should play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileAnim {
    /// Just dropped into the slot
    Bouncing,
    /// Part of the set that was just cleared
    Matching,
}

/// One tile as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileView {
    pub id: TileId,
    pub kind: u32,
    pub layer: u32,
    pub x: f32,
    pub y: f32,
    pub selectable: bool,
    pub removed: bool,
    pub in_slot: bool,
    pub face: Option<TileFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anim: Option<TileAnim>,
}

impl TileView {
    fn new(tile: &Tile, params: &EngineParams, anim: Option<TileAnim>) -> Self {
        Self {
            id: tile.id,
            kind: tile.kind,
            layer: tile.layer,
            x: tile.pos.x,
            y: tile.pos.y,
            selectable: tile.selectable,
            removed: tile.removed,
            in_slot: tile.in_slot,
            face: params.face(tile.kind).cloned(),
            anim,
        }
    }
}

/// Full frame state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tiles still on the board, in deal order (lower layers first)
    pub board: Vec<TileView>,
    /// Slot contents left to right
    pub slot: Vec<TileView>,
    /// Tiles cleared by the last action, for the exit effect
    pub matched: Vec<TileView>,
    pub slot_capacity: usize,
    pub tile_size: f32,
    pub score: u64,
    pub phase: GamePhase,
    pub game_over: bool,
    /// A placement is still waiting on `settle`
    pub pending: bool,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(state: &GameState, params: &EngineParams) -> Self {
        let mut slotted = None;
        let mut matched_ids: Vec<TileId> = Vec::new();
        for event in &state.events {
            match event {
                GameEvent::TileSlotted { id, .. } => slotted = Some(*id),
                GameEvent::Matched { ids, .. } => matched_ids.extend(ids.iter().copied()),
                _ => {}
            }
        }

        let anim_for = |id: TileId| {
            if matched_ids.contains(&id) {
                Some(TileAnim::Matching)
            } else if slotted == Some(id) {
                Some(TileAnim::Bouncing)
            } else {
                None
            }
        };

        let board = state
            .all_tiles
            .iter()
            .filter(|t| t.is_live())
            .map(|t| TileView::new(t, params, None))
            .collect();
        let slot = state
            .slot_tiles()
            .map(|t| TileView::new(t, params, anim_for(t.id)))
            .collect();
        let matched = matched_ids
            .iter()
            .filter_map(|&id| state.tile(id))
            .map(|t| TileView::new(t, params, anim_for(t.id)))
            .collect();

        Self {
            board,
            slot,
            matched,
            slot_capacity: params.slot_capacity,
            tile_size: params.tile_size(),
            score: state.score,
            phase: state.phase,
            game_over: state.game_over(),
            pending: state.pending.is_some(),
            events: state.events.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{refresh_selectable, select_tile, settle};
    use glam::Vec2;

    fn state(kinds: &[u32]) -> (GameState, EngineParams) {
        let params = EngineParams::default();
        let tiles = kinds
            .iter()
            .enumerate()
            .map(|(i, &k)| Tile::new(TileId(i as u32), k, 0, Vec2::new(i as f32 * 80.0, 0.0)))
            .collect();
        let mut state = GameState::new(0, tiles);
        refresh_selectable(&mut state.all_tiles, params.tile_size(), params.overlap_threshold);
        (state, params)
    }

    #[test]
    fn test_slotted_tile_bounces() {
        let (mut state, params) = state(&[0, 1, 0]);
        select_tile(&mut state, &params, TileId(0));
        settle(&mut state);
        select_tile(&mut state, &params, TileId(1));

        let snap = Snapshot::capture(&state, &params);
        assert_eq!(snap.board.len(), 1);
        assert_eq!(snap.slot.len(), 2);
        assert_eq!(snap.slot[0].anim, None);
        assert_eq!(snap.slot[1].anim, Some(TileAnim::Bouncing));
        assert!(snap.pending);
        assert_eq!(snap.slot[1].face.as_ref().unwrap().name, "grape");
    }

    #[test]
    fn test_matched_tiles_listed_with_matching_anim() {
        let (mut state, params) = state(&[2, 2, 2, 1]);
        for id in 0..2 {
            select_tile(&mut state, &params, TileId(id));
            settle(&mut state);
        }
        select_tile(&mut state, &params, TileId(2));
        let snap = Snapshot::capture(&state, &params);
        assert!(snap.slot.is_empty());
        assert_eq!(snap.matched.len(), 3);
        assert!(snap.matched.iter().all(|t| t.anim == Some(TileAnim::Matching) && t.removed));
        assert_eq!(snap.score, 100);
        assert_eq!(snap.board.len(), 1);
    }

    #[test]
    fn test_hints_gone_after_settle() {
        let (mut state, params) = state(&[0, 0, 0, 1]);
        select_tile(&mut state, &params, TileId(3));
        settle(&mut state);
        let snap = Snapshot::capture(&state, &params);
        assert!(snap.slot.iter().all(|t| t.anim.is_none()));
        assert!(snap.events.is_empty());

        for id in 0..2 {
            select_tile(&mut state, &params, TileId(id));
            settle(&mut state);
        }
        select_tile(&mut state, &params, TileId(2));
        assert_eq!(Snapshot::capture(&state, &params).matched.len(), 3);

        settle(&mut state);
        let snap = Snapshot::capture(&state, &params);
        assert!(snap.matched.is_empty());
        assert_eq!(snap.score, 100);
        assert_eq!(snap.slot.len(), 1);
        assert_eq!(snap.slot[0].anim, None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let (state, params) = state(&[0, 1]);
        let json = Snapshot::capture(&state, &params).to_json().unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        assert!(json.contains("\"game_over\":false"));
        assert!(!json.contains("\"anim\""));
    }
}
