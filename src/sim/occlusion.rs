//! Occlusion and selectability
//!
//! A tile can be picked only while nothing on a higher layer sits on top of
//! it. Every tile is treated as an axis-aligned square of `tile_size` anchored
//! at its position. Two squares count as covering when they overlap by more
//! than `threshold` pixels on every edge, so tiles that merely brush past each
//! other do not lock one another.
//!
//! The pass is O(n²) over the board. That is fine for a few dozen tiles; a
//! board in the hundreds would want a spatial grid per layer.

use glam::Vec2;

use super::tile::Tile;

/// Axis-aligned square footprint of a tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub min: Vec2,
    pub size: f32,
}

impl Footprint {
    pub fn new(min: Vec2, size: f32) -> Self {
        Self { min, size }
    }

    pub fn of(tile: &Tile, size: f32) -> Self {
        Self::new(tile.pos, size)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + Vec2::splat(self.size)
    }

    /// Strict overlap test with `threshold` shaved off both squares on every edge
    pub fn overlaps(&self, other: &Footprint, threshold: f32) -> bool {
        let (a_min, a_max) = (self.min, self.max());
        let (b_min, b_max) = (other.min, other.max());

        a_min.x < b_max.x - threshold
            && a_max.x > b_min.x + threshold
            && a_min.y < b_max.y - threshold
            && a_max.y > b_min.y + threshold
    }
}

/// Whether `upper` hides `lower`
pub fn occludes(upper: &Tile, lower: &Tile, tile_size: f32, threshold: f32) -> bool {
    if upper.id == lower.id || !upper.is_live() || upper.layer <= lower.layer {
        return false;
    }
    Footprint::of(lower, tile_size).overlaps(&Footprint::of(upper, tile_size), threshold)
}

/// Whether any live tile on a higher layer hides `tile`
pub fn is_covered(tile: &Tile, tiles: &[Tile], tile_size: f32, threshold: f32) -> bool {
    tiles
        .iter()
        .any(|other| occludes(other, tile, tile_size, threshold))
}

/// Recompute `selectable` for every tile from scratch
pub fn refresh_selectable(tiles: &mut [Tile], tile_size: f32, threshold: f32) {
    let open: Vec<bool> = tiles
        .iter()
        .map(|tile| tile.is_live() && !is_covered(tile, tiles, tile_size, threshold))
        .collect();

    for (tile, open) in tiles.iter_mut().zip(open) {
        tile.selectable = open;
    }
}
