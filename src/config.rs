//! Game configuration
//!
//! Mirrors the `uiConfig.json` document shipped with the web build. Every
//! section and field is optional; anything missing falls back to
//! [`crate::consts`]. The document is resolved once into [`EngineParams`],
//! which is what the engine actually consumes.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::board::BoardParams;
use crate::sim::tile::TileFace;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid kind count: at least one tile kind is required")]
    NoKinds,

    #[error("Invalid match count: must be at least 1")]
    ZeroMatchCount,

    #[error("Invalid tile count: {total} tiles cannot be split evenly across {kinds} kinds")]
    UnevenKinds { total: usize, kinds: usize },

    #[error("Invalid tile count: {per_kind} tiles per kind is not a multiple of {match_count}")]
    UnmatchableKind { per_kind: usize, match_count: usize },

    #[error("Invalid layout: tiles per layer must be at least 1")]
    EmptyLayer,

    #[error("Invalid layout: grid needs at least one column")]
    NoColumns,

    #[error("Invalid tile size: {0}")]
    TileSize(f32),

    #[error("Invalid jitter range: {0}")]
    JitterRange(f32),

    #[error("Invalid overlap threshold: {threshold} (tile size {tile_size})")]
    OverlapThreshold { threshold: f32, tile_size: f32 },

    #[error("Invalid slot capacity: {capacity} cannot hold a match of {match_count}")]
    SlotTooSmall { capacity: usize, match_count: usize },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Descriptive header of the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for GameInfo {
    fn default() -> Self {
        Self {
            name: "Triple Stack".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileDimensions {
    pub size: f32,
}

impl Default for TileDimensions {
    fn default() -> Self {
        Self { size: TILE_SIZE }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardContainer {
    pub width: f32,
    pub height: f32,
}

impl Default for BoardContainer {
    fn default() -> Self {
        Self {
            width: BOARD_CONTAINER_WIDTH,
            height: BOARD_CONTAINER_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSpacing {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Default for TileSpacing {
    fn default() -> Self {
        Self {
            horizontal: TILE_SPACING_H,
            vertical: TILE_SPACING_V,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TilePosition {
    pub start_x: f32,
    pub start_y: f32,
    pub random_offset_range: f32,
    pub layer_z_offset: f32,
}

impl Default for TilePosition {
    fn default() -> Self {
        Self {
            start_x: START_X,
            start_y: START_Y,
            random_offset_range: JITTER_RANGE,
            layer_z_offset: LAYER_Z_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TileCollision {
    pub overlap_threshold: f32,
}

impl Default for TileCollision {
    fn default() -> Self {
        Self {
            overlap_threshold: OVERLAP_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlotDimensions {
    pub max_capacity: usize,
}

impl Default for SlotDimensions {
    fn default() -> Self {
        Self {
            max_capacity: SLOT_CAPACITY,
        }
    }
}

/// Pixel geometry of the board and slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dimensions {
    pub game_board_tile: TileDimensions,
    pub game_board_container: BoardContainer,
    pub tile_spacing: TileSpacing,
    pub tile_position: TilePosition,
    pub tile_collision: TileCollision,
    pub slot: SlotDimensions,
}

/// One tile face (the web build calls them fruits)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaceAsset {
    pub id: u32,
    pub path: String,
    pub name: String,
    pub base_color: String,
}

impl Default for FaceAsset {
    fn default() -> Self {
        Self {
            id: 0,
            path: String::new(),
            name: String::new(),
            base_color: "#7d89d9".to_string(),
        }
    }
}

impl FaceAsset {
    fn fruit(id: u32, name: &str, base_color: &str) -> Self {
        Self {
            id,
            path: format!("/assets/ic_tile_{name}.png"),
            name: name.to_string(),
            base_color: base_color.to_string(),
        }
    }

    fn to_face(&self) -> TileFace {
        TileFace {
            name: self.name.clone(),
            image: self.path.clone(),
            base_color: self.base_color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileAssets {
    pub fruits: Vec<FaceAsset>,
}

impl Default for TileAssets {
    fn default() -> Self {
        Self {
            fruits: vec![
                FaceAsset::fruit(0, "strawberry", "#ff6b6b"),
                FaceAsset::fruit(1, "grape", "#9775fa"),
                FaceAsset::fruit(2, "orange", "#ff922b"),
                FaceAsset::fruit(3, "lemon", "#ffd43b"),
                FaceAsset::fruit(4, "blueberry", "#4c6ef5"),
                FaceAsset::fruit(5, "watermelon", "#51cf66"),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    pub tiles: TileAssets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scoring {
    pub match_bonus: u64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            match_bonus: MATCH_BONUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TileCounts {
    pub total_count: usize,
    pub types_count: usize,
    pub match_count: usize,
}

impl Default for TileCounts {
    fn default() -> Self {
        Self {
            total_count: TOTAL_TILES,
            types_count: NUM_KINDS,
            match_count: MATCH_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Layout {
    pub tiles_per_layer: usize,
    pub columns: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            tiles_per_layer: TILES_PER_LAYER,
            columns: GRID_COLUMNS,
        }
    }
}

/// Rules of the game proper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gameplay {
    pub scoring: Scoring,
    pub tiles: TileCounts,
    pub layout: Layout,
}

/// Presentation timing; the engine only passes these through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Animations {
    pub tile_enter_slot_ms: u32,
    pub match_clear_ms: u32,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            tile_enter_slot_ms: TILE_ENTER_SLOT_MS,
            match_clear_ms: MATCH_CLEAR_MS,
        }
    }
}

/// The full configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub game_info: GameInfo,
    pub dimensions: Dimensions,
    pub assets: Assets,
    pub gameplay: Gameplay,
    pub animations: Animations,
}

impl GameConfig {
    /// Parse a configuration document
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document if there is one, falling back to defaults on any failure
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded config: {} {}", config.game_info.name, config.game_info.version);
                config
            }
            Some(Err(e)) => {
                log::warn!("Config rejected ({}), using defaults", e);
                Self::default()
            }
            None => {
                log::info!("No config supplied, using defaults");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Face list the engine will cycle through, never empty
    fn faces(&self) -> Vec<TileFace> {
        let fruits = if self.assets.tiles.fruits.is_empty() {
            log::warn!("Config has no tile faces, using built-in fruit set");
            TileAssets::default().fruits
        } else {
            self.assets.tiles.fruits.clone()
        };
        fruits.iter().map(FaceAsset::to_face).collect()
    }

    /// Validate and flatten into engine parameters
    pub fn resolve(&self) -> ConfigResult<EngineParams> {
        let dims = &self.dimensions;
        let tiles = &self.gameplay.tiles;

        let board = BoardParams {
            num_kinds: tiles.types_count,
            total_tiles: tiles.total_count,
            tiles_per_layer: self.gameplay.layout.tiles_per_layer,
            columns: self.gameplay.layout.columns,
            tile_size: dims.game_board_tile.size,
            spacing: Vec2::new(dims.tile_spacing.horizontal, dims.tile_spacing.vertical),
            start: Vec2::new(dims.tile_position.start_x, dims.tile_position.start_y),
            jitter_range: dims.tile_position.random_offset_range,
            layer_z_offset: dims.tile_position.layer_z_offset,
        };

        let params = EngineParams {
            board,
            overlap_threshold: dims.tile_collision.overlap_threshold,
            slot_capacity: dims.slot.max_capacity,
            match_count: tiles.match_count,
            match_bonus: self.gameplay.scoring.match_bonus,
            faces: self.faces(),
            animations: self.animations.clone(),
        };
        params.validate()?;
        Ok(params)
    }
}

/// Resolved, validated engine inputs
#[derive(Debug, Clone, PartialEq)]
pub struct EngineParams {
    pub board: BoardParams,
    pub overlap_threshold: f32,
    pub slot_capacity: usize,
    pub match_count: usize,
    pub match_bonus: u64,
    /// Faces indexed by kind, cycling when shorter than the kind count
    pub faces: Vec<TileFace>,
    pub animations: Animations,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            board: BoardParams::default(),
            overlap_threshold: OVERLAP_THRESHOLD,
            slot_capacity: SLOT_CAPACITY,
            match_count: MATCH_COUNT,
            match_bonus: MATCH_BONUS,
            faces: GameConfig::default().faces(),
            animations: Animations::default(),
        }
    }
}

impl EngineParams {
    pub fn validate(&self) -> ConfigResult<()> {
        self.board.validate(self.match_count)?;
        if self.slot_capacity < self.match_count {
            return Err(ConfigError::SlotTooSmall {
                capacity: self.slot_capacity,
                match_count: self.match_count,
            });
        }
        // At or past the tile size no two tiles can ever overlap
        let threshold = self.overlap_threshold;
        if threshold.is_nan() || threshold < 0.0 || threshold >= self.tile_size() {
            return Err(ConfigError::OverlapThreshold {
                threshold,
                tile_size: self.tile_size(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.board.tile_size
    }

    /// Face for a kind
    pub fn face(&self, kind: u32) -> Option<&TileFace> {
        if self.faces.is_empty() {
            return None;
        }
        self.faces.get(kind as usize % self.faces.len())
    }

    /// How long the host should wait before calling `settle`
    pub fn settle_delay_ms(&self) -> u32 {
        self.animations.tile_enter_slot_ms
    }

    /// Duration of the match flash on cleared tiles
    pub fn match_clear_ms(&self) -> u32 {
        self.animations.match_clear_ms
    }
}
