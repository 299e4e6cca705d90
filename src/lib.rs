//! # tile_pathfinding
//!
//! Shortest paths on a rectangular tile grid using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Manhattan heuristic.
//! A [TileGrid] is split into whole tiles of a fixed size, each carrying a [TileState]. On
//! construction a navigation graph is built by a
//! [breadth-first traversal](https://en.wikipedia.org/wiki/Breadth-first_search) from tile
//! (0, 0), linking every reachable tile to its 4-neighbours with unit weight. Searches run over
//! that graph while re-checking tile states live, so obstacles placed afterwards are avoided even
//! before the graph is rebuilt.
//!
//! ```
//! use tile_pathfinding::{TileGrid, Vec2};
//!
//! let mut grid = TileGrid::new(Vec2::new(3.0, 3.0), Vec2::new(1.0, 1.0));
//! grid.set_obstacle(1, 1);
//! let chain = grid
//!     .shortest_path(Vec2::new(0.5, 0.5), Vec2::new(2.5, 2.5))
//!     .unwrap();
//! assert_eq!(chain.hops(), 4);
//! grid.set_path(&chain.to_path());
//! ```
pub mod collections;
pub mod config;
pub mod graph;
pub mod grid;
pub mod layout;
pub mod solver;
pub mod tile;
pub mod vec2;

pub use config::GridConfig;
pub use graph::NavGraph;
pub use grid::TileGrid;
pub use layout::{LayoutError, ObstacleLayout};
pub use solver::{astar, AstarSolver, SearchChain, SearchNode};
pub use tile::{Tile, TileId, TileState};
pub use vec2::Vec2;

/// Weight of every edge between 4-neighbours.
pub const EDGE_WEIGHT: f64 = 1.0;
/// Absolute tolerance used when comparing [Vec2] components.
pub const EPSILON: f64 = 1e-9;
/// Inline capacity for neighbourhoods, which never exceed four tiles.
pub const N_SMALLVEC_SIZE: usize = 4;
