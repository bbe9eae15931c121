//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here. The engine is the
//! only writer.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting taps
    Playing,
    /// Slot filled up without a match
    GameOver,
    /// Every tile cleared
    Won,
}

/// Something the last action did, for effects and sounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile moved into the slot at `index`
    TileSlotted { id: TileId, index: usize },
    /// A full set left the slot
    Matched {
        kind: u32,
        ids: Vec<TileId>,
        bonus: u64,
    },
    /// Slot is full
    GameOver,
    /// Board and slot are empty
    Cleared,
}

/// Complete game state (deterministic for a given seed and tap sequence)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the board was generated from
    pub seed: u64,
    /// Every tile of the run in deal order, including cleared ones
    pub all_tiles: Vec<Tile>,
    /// Slot contents left to right
    pub slot: Vec<TileId>,
    pub score: u64,
    pub phase: GamePhase,
    /// Tile whose move into the slot has not been settled by the host yet
    pub pending: Option<TileId>,
    /// Tiles accepted this run
    pub moves: u32,
    /// Events produced by the most recent accepted action, until it settles
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state around a generated board
    pub fn new(seed: u64, all_tiles: Vec<Tile>) -> Self {
        Self {
            seed,
            all_tiles,
            slot: Vec::new(),
            score: 0,
            phase: GamePhase::Playing,
            pending: None,
            moves: 0,
            events: Vec::new(),
        }
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.all_tiles.iter().find(|t| t.id == id)
    }

    pub fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.all_tiles.iter_mut().find(|t| t.id == id)
    }

    /// Slot tiles left to right
    pub fn slot_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.slot.iter().filter_map(|&id| self.tile(id))
    }

    /// Kinds in the slot left to right
    pub fn slot_kinds(&self) -> Vec<u32> {
        self.slot_tiles().map(|t| t.kind).collect()
    }

    /// Number of slot tiles of `kind`
    pub fn slot_count(&self, kind: u32) -> usize {
        self.slot_tiles().filter(|t| t.kind == kind).count()
    }

    pub fn selectable_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.all_tiles.iter().filter(|t| t.selectable)
    }

    /// Tiles still on the board
    pub fn live_count(&self) -> usize {
        self.all_tiles.iter().filter(|t| t.is_live()).count()
    }

    pub fn removed_count(&self) -> usize {
        self.all_tiles.iter().filter(|t| t.removed).count()
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// No further taps will be accepted until a reset
    pub fn is_terminal(&self) -> bool {
        self.phase != GamePhase::Playing
    }
}
