//! Triple Stack - A layered tile-matching puzzle
//!
//! Core modules:
//! - `sim`: Deterministic game-state engine (board, occlusion, slot)
//! - `config`: Data-driven layout and gameplay values
//! - `engine`: Action entry point owning state, parameters and RNG
//! - `snapshot`: Read-only views handed to the presentation layer

pub mod config;
pub mod engine;
pub mod sim;
pub mod snapshot;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, ConfigResult, EngineParams, GameConfig};
pub use engine::Engine;
pub use snapshot::{Snapshot, TileAnim, TileView};

/// Fallback values used when the configuration document omits a field
pub mod consts {
    /// Tile edge length in pixels
    pub const TILE_SIZE: f32 = 51.0;
    /// Board container (presentation only)
    pub const BOARD_CONTAINER_WIDTH: f32 = 280.0;
    pub const BOARD_CONTAINER_HEIGHT: f32 = 320.0;

    /// Gap between grid cells
    pub const TILE_SPACING_H: f32 = 4.0;
    pub const TILE_SPACING_V: f32 = 4.0;

    /// Top-left of the grid
    pub const START_X: f32 = 50.0;
    pub const START_Y: f32 = 30.0;
    /// Full width of the per-tile jitter window (samples fall in ±range/2)
    pub const JITTER_RANGE: f32 = 35.0;
    /// Vertical shift applied per layer so stacks read as depth
    pub const LAYER_Z_OFFSET: f32 = 2.0;

    /// Overlap (px) a covering tile must exceed on every edge
    pub const OVERLAP_THRESHOLD: f32 = 10.0;

    /// Slot size
    pub const SLOT_CAPACITY: usize = 6;

    /// Board composition
    pub const NUM_KINDS: usize = 6;
    pub const TOTAL_TILES: usize = 36;
    pub const MATCH_COUNT: usize = 3;
    pub const TILES_PER_LAYER: usize = 12;
    pub const GRID_COLUMNS: usize = 3;

    /// Points per cleared triple
    pub const MATCH_BONUS: u64 = 100;

    /// Animation hints for the host (milliseconds)
    pub const TILE_ENTER_SLOT_MS: u32 = 300;
    pub const MATCH_CLEAR_MS: u32 = 400;
}
