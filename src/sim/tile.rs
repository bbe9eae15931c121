//! Tile entity and its face description

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque tile identifier, allocated once and never reused by an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Visual identity of a kind, looked up from configuration by kind index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileFace {
    pub name: String,
    pub image: String,
    pub base_color: String,
}

/// A tile on the board
///
/// Geometry (`kind`, `layer`, `pos`) is fixed at creation. Only the status
/// flags change during play, and tiles are never dropped from the board so
/// ids stay resolvable after a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    /// Matching category in `[0, num_kinds)`
    pub kind: u32,
    /// Stacking order, higher covers lower
    pub layer: u32,
    /// Top-left corner in board pixels
    pub pos: Vec2,
    /// Cleared by a match
    pub removed: bool,
    /// Currently held in the slot
    pub in_slot: bool,
    /// Derived by the occlusion pass, never written by actions
    pub selectable: bool,
}

impl Tile {
    pub fn new(id: TileId, kind: u32, layer: u32, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            layer,
            pos,
            removed: false,
            in_slot: false,
            selectable: false,
        }
    }

    /// Still on the board (neither slotted nor cleared)
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.removed && !self.in_slot
    }
}
