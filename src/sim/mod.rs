//! Deterministic game-state engine
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only (board generation is the only consumer)
//! - Stable iteration order (deal order of `all_tiles`)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod board;
pub mod occlusion;
pub mod slot;
pub mod state;
pub mod tile;

pub use autoplay::choose_tile;
pub use board::{BoardParams, generate_board};
pub use occlusion::{Footprint, is_covered, occludes, refresh_selectable};
pub use slot::{Rejection, check_select, insertion_index, select_tile, settle};
pub use state::{GameEvent, GamePhase, GameState};
pub use tile::{Tile, TileFace, TileId};
