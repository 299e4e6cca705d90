use serde::{Deserialize, Serialize};

use crate::vec2::Vec2;

/// Default map extent in world units.
pub const DEFAULT_MAP_SIZE: Vec2 = Vec2::new(640.0, 480.0);
/// Default tile extent in world units.
pub const DEFAULT_TILE_SIZE: Vec2 = Vec2::new(32.0, 32.0);

/// Geometry a [TileGrid](crate::TileGrid) is created from. Missing fields fall back to the
/// defaults when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub map_size: Vec2,
    pub tile_size: Vec2,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            map_size: DEFAULT_MAP_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl GridConfig {
    /// A map with square tiles of side `tile`.
    pub fn square_tiles(width: f64, height: f64, tile: f64) -> GridConfig {
        GridConfig {
            map_size: Vec2::new(width, height),
            tile_size: Vec2::new(tile, tile),
        }
    }
}
