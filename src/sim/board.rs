//! Board generation
//!
//! Builds the full tile population for a fresh game: an equal number of tiles
//! per kind, shuffled, then dealt into fixed-size layers laid out on a small
//! grid with per-tile jitter so the stacks look hand-piled.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;

use super::tile::{Tile, TileId};
use crate::config::{ConfigError, ConfigResult};
use crate::consts::*;

/// Layout and composition inputs for the generator
#[derive(Debug, Clone, PartialEq)]
pub struct BoardParams {
    pub num_kinds: usize,
    pub total_tiles: usize,
    pub tiles_per_layer: usize,
    pub columns: usize,
    pub tile_size: f32,
    /// Horizontal / vertical gap between grid cells
    pub spacing: Vec2,
    /// Grid origin
    pub start: Vec2,
    pub jitter_range: f32,
    pub layer_z_offset: f32,
}

impl Default for BoardParams {
    fn default() -> Self {
        Self {
            num_kinds: NUM_KINDS,
            total_tiles: TOTAL_TILES,
            tiles_per_layer: TILES_PER_LAYER,
            columns: GRID_COLUMNS,
            tile_size: TILE_SIZE,
            spacing: Vec2::new(TILE_SPACING_H, TILE_SPACING_V),
            start: Vec2::new(START_X, START_Y),
            jitter_range: JITTER_RANGE,
            layer_z_offset: LAYER_Z_OFFSET,
        }
    }
}

impl BoardParams {
    /// Reject shapes that could leave unmatched tiles behind
    pub fn validate(&self, match_count: usize) -> ConfigResult<()> {
        if self.num_kinds == 0 {
            return Err(ConfigError::NoKinds);
        }
        if match_count == 0 {
            return Err(ConfigError::ZeroMatchCount);
        }
        if self.total_tiles == 0 || !self.total_tiles.is_multiple_of(self.num_kinds) {
            return Err(ConfigError::UnevenKinds {
                total: self.total_tiles,
                kinds: self.num_kinds,
            });
        }
        let per_kind = self.total_tiles / self.num_kinds;
        if !per_kind.is_multiple_of(match_count) {
            return Err(ConfigError::UnmatchableKind {
                per_kind,
                match_count,
            });
        }
        if self.tiles_per_layer == 0 {
            return Err(ConfigError::EmptyLayer);
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.tile_size.is_nan() || self.tile_size <= 0.0 {
            return Err(ConfigError::TileSize(self.tile_size));
        }
        if self.jitter_range.is_nan() || self.jitter_range < 0.0 {
            return Err(ConfigError::JitterRange(self.jitter_range));
        }
        Ok(())
    }

    pub fn tiles_per_kind(&self) -> usize {
        self.total_tiles / self.num_kinds.max(1)
    }

    /// Number of layers needed for the whole deck (last one may be partial)
    pub fn layer_count(&self) -> usize {
        self.total_tiles.div_ceil(self.tiles_per_layer.max(1))
    }

    /// Layer and un-jittered position for the tile dealt at `index`
    pub fn slot_for(&self, index: usize) -> (u32, Vec2) {
        let layer = index / self.tiles_per_layer;
        let in_layer = index % self.tiles_per_layer;
        let col = (in_layer % self.columns) as f32;
        let row = (in_layer / self.columns) as f32;

        let pos = Vec2::new(
            col * (self.tile_size + self.spacing.x) + self.start.x,
            row * (self.tile_size + self.spacing.y) + self.start.y + layer as f32 * self.layer_z_offset,
        );
        (layer as u32, pos)
    }
}

/// Uniform sample in `[-range/2, range/2)`
fn jitter<R: Rng + ?Sized>(rng: &mut R, range: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    (rng.random::<f32>() - 0.5) * range
}

/// Generate a fresh board, ids allocated sequentially from `first_id`
///
/// Tiles come back in deal order (layer ascending). Selectability is left
/// unset; the caller runs the occlusion pass before showing the board.
pub fn generate_board<R: Rng + ?Sized>(
    params: &BoardParams,
    match_count: usize,
    first_id: u32,
    rng: &mut R,
) -> ConfigResult<Vec<Tile>> {
    params.validate(match_count)?;

    let per_kind = params.tiles_per_kind();
    let mut deck: Vec<(TileId, u32)> = Vec::with_capacity(params.total_tiles);
    let mut next_id = first_id;
    for kind in 0..params.num_kinds {
        for _ in 0..per_kind {
            deck.push((TileId(next_id), kind as u32));
            next_id += 1;
        }
    }

    // Fisher-Yates
    deck.shuffle(rng);

    let tiles: Vec<Tile> = deck
        .into_iter()
        .enumerate()
        .map(|(index, (id, kind))| {
            let (layer, base) = params.slot_for(index);
            let offset = Vec2::new(
                jitter(rng, params.jitter_range),
                jitter(rng, params.jitter_range),
            );
            Tile::new(id, kind, layer, base + offset)
        })
        .collect();

    log::debug!(
        "Generated board: {} tiles, {} kinds, {} layers",
        tiles.len(),
        params.num_kinds,
        params.layer_count()
    );

    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn board(params: &BoardParams, seed: u64) -> Vec<Tile> {
        let mut rng = Pcg32::seed_from_u64(seed);
        generate_board(params, MATCH_COUNT, 1, &mut rng).unwrap()
    }

    #[test]
    fn test_default_board_shape() {
        let tiles = board(&BoardParams::default(), 7);
        assert_eq!(tiles.len(), 36);

        for layer in 0..3 {
            assert_eq!(tiles.iter().filter(|t| t.layer == layer).count(), 12);
        }
        for kind in 0..6 {
            assert_eq!(tiles.iter().filter(|t| t.kind == kind).count(), 6);
        }
        assert!(tiles.iter().all(|t| !t.removed && !t.in_slot));
    }

    #[test]
    fn test_ids_unique_from_first_id() {
        let mut rng = Pcg32::seed_from_u64(3);
        let tiles = generate_board(&BoardParams::default(), MATCH_COUNT, 100, &mut rng).unwrap();
        let mut ids: Vec<u32> = tiles.iter().map(|t| t.id.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, (100..136).collect::<Vec<_>>());
    }

    #[test]
    fn test_grid_positions_without_jitter() {
        let params = BoardParams {
            jitter_range: 0.0,
            ..Default::default()
        };
        let tiles = board(&params, 1);

        // Index 4 in layer 0: col 1, row 1
        assert_eq!(tiles[4].pos, Vec2::new(51.0 + 4.0 + 50.0, 51.0 + 4.0 + 30.0));
        // Index 12 opens layer 1 at the origin, shifted by the z offset
        assert_eq!(tiles[12].layer, 1);
        assert_eq!(tiles[12].pos, Vec2::new(50.0, 32.0));
        // Last tile of layer 2: col 2, row 3
        assert_eq!(tiles[35].pos, Vec2::new(2.0 * 55.0 + 50.0, 3.0 * 55.0 + 30.0 + 4.0));
    }

    #[test]
    fn test_jitter_stays_in_window() {
        let params = BoardParams::default();
        let tiles = board(&params, 42);
        let half = params.jitter_range / 2.0;
        for (index, tile) in tiles.iter().enumerate() {
            let (_, base) = params.slot_for(index);
            let d = tile.pos - base;
            assert!(d.x.abs() <= half + 1e-3, "x jitter {} out of range", d.x);
            assert!(d.y.abs() <= half + 1e-3, "y jitter {} out of range", d.y);
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let params = BoardParams::default();
        assert_eq!(board(&params, 555), board(&params, 555));
    }

    #[test]
    fn test_shuffle_varies_with_seed() {
        let params = BoardParams::default();
        let kinds = |seed| board(&params, seed).iter().map(|t| t.kind).collect::<Vec<_>>();
        assert!((1..10).any(|seed| kinds(seed) != kinds(0)));
    }

    #[test]
    fn test_shuffle_spreads_kinds_over_positions() {
        // Every kind should land in the first slot for some seed
        let params = BoardParams::default();
        let mut seen = [false; NUM_KINDS];
        for seed in 0..200 {
            seen[board(&params, seed)[0].kind as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_rejects_zero_kinds() {
        let params = BoardParams {
            num_kinds: 0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(0);
        assert!(matches!(
            generate_board(&params, MATCH_COUNT, 1, &mut rng),
            Err(ConfigError::NoKinds)
        ));
    }

    #[test]
    fn test_rejects_uneven_kinds() {
        let params = BoardParams {
            total_tiles: 35,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(MATCH_COUNT),
            Err(ConfigError::UnevenKinds { total: 35, kinds: 6 })
        ));
    }

    #[test]
    fn test_rejects_unmatchable_kind() {
        // 24 / 6 = 4 per kind, not a multiple of 3
        let params = BoardParams {
            total_tiles: 24,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(MATCH_COUNT),
            Err(ConfigError::UnmatchableKind {
                per_kind: 4,
                match_count: 3
            })
        ));
    }

    #[test]
    fn test_partial_last_layer() {
        let params = BoardParams {
            total_tiles: 18,
            num_kinds: 3,
            ..Default::default()
        };
        let tiles = board(&params, 9);
        assert_eq!(params.layer_count(), 2);
        assert_eq!(tiles.iter().filter(|t| t.layer == 1).count(), 6);
    }
}
