//! Slot engine
//!
//! Handles a tap on the board: moves the tile into the slot next to its own
//! kind, clears a completed set, refreshes what can be picked and decides
//! whether the run is over. Rejected taps leave the state untouched.

use super::occlusion::refresh_selectable;
use super::state::{GameEvent, GamePhase, GameState};
use super::tile::TileId;
use crate::config::EngineParams;

/// Why a tap was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotPlaying,
    SlotFull,
    Pending,
    UnknownTile,
    NotSelectable,
}

/// Index a tile of `kind` goes to: right after the last tile of the same
/// kind, or at the end when the kind is not in the slot yet
pub fn insertion_index(slot_kinds: &[u32], kind: u32) -> usize {
    slot_kinds
        .iter()
        .rposition(|&k| k == kind)
        .map_or(slot_kinds.len(), |last| last + 1)
}

/// Check whether a tap on `id` would be accepted
pub fn check_select(state: &GameState, params: &EngineParams, id: TileId) -> Result<(), Rejection> {
    if state.phase != GamePhase::Playing {
        return Err(Rejection::NotPlaying);
    }
    if state.slot.len() >= params.slot_capacity {
        return Err(Rejection::SlotFull);
    }
    if state.pending.is_some() {
        return Err(Rejection::Pending);
    }
    match state.tile(id) {
        None => Err(Rejection::UnknownTile),
        Some(tile) if !tile.selectable => Err(Rejection::NotSelectable),
        Some(_) => Ok(()),
    }
}

/// Apply a tap on `id`
///
/// Returns whether the tap was accepted. The tile stays pending until
/// [`settle`] is called.
pub fn select_tile(state: &mut GameState, params: &EngineParams, id: TileId) -> bool {
    if let Err(reason) = check_select(state, params, id) {
        log::debug!("Ignored tap on {}: {:?}", id, reason);
        return false;
    }
    state.events.clear();

    let Some(tile) = state.tile_mut(id) else {
        return false;
    };
    tile.in_slot = true;
    let kind = tile.kind;

    let index = insertion_index(&state.slot_kinds(), kind);
    state.slot.insert(index, id);
    state.pending = Some(id);
    state.moves += 1;
    state.events.push(GameEvent::TileSlotted { id, index });
    log::debug!("Slotted {} (kind {}) at {}", id, kind, index);

    refresh_selectable(&mut state.all_tiles, params.tile_size(), params.overlap_threshold);

    if resolve_match(state, params, kind) {
        refresh_selectable(&mut state.all_tiles, params.tile_size(), params.overlap_threshold);
    }

    update_phase(state, params);
    true
}

/// Clear `kind` from the slot if it has reached a full set
fn resolve_match(state: &mut GameState, params: &EngineParams, kind: u32) -> bool {
    if state.slot_count(kind) != params.match_count {
        return false;
    }

    let (matched, rest): (Vec<TileId>, Vec<TileId>) = state
        .slot
        .iter()
        .partition(|&&id| state.tile(id).is_some_and(|t| t.kind == kind));
    state.slot = rest;

    for &id in &matched {
        if let Some(tile) = state.tile_mut(id) {
            tile.in_slot = false;
            tile.removed = true;
        }
    }

    state.score += params.match_bonus;
    log::debug!("Matched kind {} (+{}, score {})", kind, params.match_bonus, state.score);
    state.events.push(GameEvent::Matched {
        kind,
        ids: matched,
        bonus: params.match_bonus,
    });
    true
}

/// Terminal checks on the post-match slot
fn update_phase(state: &mut GameState, params: &EngineParams) {
    if state.all_tiles.iter().all(|t| t.removed) {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Cleared);
        log::info!("Board cleared in {} moves, score {}", state.moves, state.score);
    } else if state.slot.len() >= params.slot_capacity {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!("Slot full after {} moves, score {}", state.moves, state.score);
    }
}

/// Host finished animating the last placement
///
/// The events of that placement have been shown by now and are dropped.
pub fn settle(state: &mut GameState) -> Option<TileId> {
    state.events.clear();
    state.pending.take()
}
