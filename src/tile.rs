use core::fmt;
use grid_util::point::Point;
use serde::{Deserialize, Serialize};

use crate::vec2::Vec2;

/// Identity of a tile: its flat index `row * columns + col` into the grid's tile arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(pub usize);

impl TileId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Classification of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Unknown,
    Marked,
    Path,
    Start,
    End,
    Obstacle,
}

impl TileState {
    /// Whether a tile in this state may be entered. Shared by the graph builder and the live
    /// check done during search.
    pub fn is_movable(self) -> bool {
        matches!(self, TileState::Unknown | TileState::Start | TileState::End)
    }
    /// Single character used when rendering a grid as text.
    pub fn symbol(self) -> char {
        match self {
            TileState::Unknown => '.',
            TileState::Marked => 'm',
            TileState::Path => '*',
            TileState::Start => 'S',
            TileState::End => 'E',
            TileState::Obstacle => '#',
        }
    }
}

/// A single grid cell. Everything but the state is fixed when the grid is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    id: TileId,
    row: usize,
    col: usize,
    center: Vec2,
    pub(crate) state: TileState,
}

impl Tile {
    pub(crate) fn new(id: TileId, row: usize, col: usize, center: Vec2) -> Tile {
        Tile {
            id,
            row,
            col,
            center,
            state: TileState::Unknown,
        }
    }
    pub fn id(&self) -> TileId {
        self.id
    }
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    /// World-space center of the tile.
    pub fn center(&self) -> Vec2 {
        self.center
    }
    pub fn state(&self) -> TileState {
        self.state
    }
    pub fn is_movable(&self) -> bool {
        self.state.is_movable()
    }
    /// Grid position as a [Point] with `x` the column and `y` the row.
    pub fn position(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
}
