use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use itertools::Itertools;
use log::{info, warn};

use crate::config::GridConfig;
use crate::graph::NavGraph;
use crate::layout::{LayoutError, ObstacleLayout};
use crate::solver::{AstarSolver, SearchChain};
use crate::tile::{Tile, TileId, TileState};
use crate::vec2::Vec2;

/// [TileGrid] owns a rows × columns arena of [Tile]s together with the [NavGraph] built from
/// them. The graph is built once on construction; obstacle changes afterwards only flag it as
/// dirty until [update](Self::update) or [rebuild_graph](Self::rebuild_graph) is called.
/// Searches stay correct on a stale graph because tile movability is checked live.
#[derive(Clone, Debug)]
pub struct TileGrid {
    tiles: SimpleGrid<Tile>,
    map_size: Vec2,
    tile_size: Vec2,
    graph: NavGraph,
    graph_dirty: bool,
}

fn positive_extent(v: Vec2) -> bool {
    v.x > 0.0 && v.y > 0.0 && v.x.is_finite() && v.y.is_finite()
}

impl TileGrid {
    /// Creates a grid of as many whole tiles as fit in `map_size`; any remainder is left out.
    pub fn new(map_size: Vec2, tile_size: Vec2) -> TileGrid {
        let (rows, columns) = if positive_extent(tile_size)
            && map_size.x >= 0.0
            && map_size.y >= 0.0
            && map_size.x.is_finite()
            && map_size.y.is_finite()
        {
            (
                (map_size.y / tile_size.y).floor() as usize,
                (map_size.x / tile_size.x).floor() as usize,
            )
        } else {
            warn!(
                "Map size {} with tile size {} gives no tiles",
                map_size, tile_size
            );
            (0, 0)
        };
        let half_tile = tile_size.scale(0.5);
        let values = (0..rows)
            .cartesian_product(0..columns)
            .enumerate()
            .map(|(ix, (row, col))| {
                let corner = Vec2::new(col as f64 * tile_size.x, row as f64 * tile_size.y);
                Tile::new(TileId(ix), row, col, corner + half_tile)
            })
            .collect::<Vec<_>>();
        let tiles = SimpleGrid {
            width: columns,
            height: rows,
            values,
        };
        info!("Created {}x{} tile grid", rows, columns);
        let graph = NavGraph::build(&tiles);
        TileGrid {
            tiles,
            map_size,
            tile_size,
            graph,
            graph_dirty: false,
        }
    }

    pub fn from_config(config: &GridConfig) -> TileGrid {
        TileGrid::new(config.map_size, config.tile_size)
    }

    pub fn rows(&self) -> usize {
        self.tiles.height()
    }
    pub fn columns(&self) -> usize {
        self.tiles.width()
    }
    pub fn map_size(&self) -> Vec2 {
        self.map_size
    }
    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }
    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }
    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles.values
    }
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.is_row_col_valid(row, col)
            .then(|| &self.tiles.values[self.tiles.get_ix(col, row)])
    }
    /// The tile at grid position `point`, with `x` the column and `y` the row.
    pub fn tile_at_point(&self, point: Point) -> Option<&Tile> {
        self.tiles
            .point_in_bounds(point)
            .then(|| &self.tiles.values[self.tiles.get_ix_point(&point)])
    }
    pub fn tile_by_id(&self, id: TileId) -> Option<&Tile> {
        self.tiles.values.get(id.index())
    }
    /// The tile containing the world point (x, y), if there is one.
    pub fn tile_at(&self, x: f64, y: f64) -> Option<&Tile> {
        let (row, col) = self.row_col_at(x, y)?;
        self.tile(row, col)
    }
    fn row_col_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        Some((
            (y / self.tile_size.y).floor() as usize,
            (x / self.tile_size.x).floor() as usize,
        ))
    }
    fn tile_id_at(&self, x: f64, y: f64) -> Option<TileId> {
        if !self.is_coords_valid(x, y) {
            return None;
        }
        self.tile_at(x, y).map(Tile::id)
    }

    /// Whether (x, y) lies within the map, upper bounds included.
    pub fn is_coords_valid(&self, x: f64, y: f64) -> bool {
        (0.0..=self.map_size.x).contains(&x) && (0.0..=self.map_size.y).contains(&y)
    }
    pub fn is_row_col_valid(&self, row: usize, col: usize) -> bool {
        self.tiles.index_in_bounds(col, row)
    }
    /// Whether a start or end point may be placed at (x, y).
    pub fn is_tile_available(&self, x: f64, y: f64) -> bool {
        self.tile_id_at(x, y)
            .is_some_and(|id| self.tiles.values[id.index()].state == TileState::Unknown)
    }

    /// Whether obstacles changed since the graph was last built.
    pub fn graph_dirty(&self) -> bool {
        self.graph_dirty
    }

    /// Only transitions that change movability alter what the builder would produce, so only
    /// those dirty the graph.
    fn set_state(&mut self, id: TileId, state: TileState) {
        if let Some(tile) = self.tiles.values.get_mut(id.index()) {
            if tile.state.is_movable() != state.is_movable() {
                self.graph_dirty = true;
            }
            tile.state = state;
        }
    }

    pub fn set_obstacle(&mut self, row: usize, col: usize) {
        if self.is_row_col_valid(row, col) {
            let id = TileId(self.tiles.get_ix(col, row));
            self.set_state(id, TileState::Obstacle);
        }
    }
    pub fn set_start_point(&mut self, x: f64, y: f64) {
        if let Some(id) = self.tile_id_at(x, y) {
            self.set_state(id, TileState::Start);
        }
    }
    pub fn set_end_point(&mut self, x: f64, y: f64) {
        if let Some(id) = self.tile_id_at(x, y) {
            self.set_state(id, TileState::End);
        }
    }
    /// Resets the tile at (x, y) to [TileState::Unknown].
    pub fn clear_tile(&mut self, x: f64, y: f64) {
        if let Some(id) = self.tile_id_at(x, y) {
            self.set_state(id, TileState::Unknown);
        }
    }
    pub fn set_path(&mut self, path: &[TileId]) {
        for &id in path {
            self.set_state(id, TileState::Path);
        }
    }
    pub fn clear_path(&mut self, path: &[TileId]) {
        for &id in path {
            self.set_state(id, TileState::Unknown);
        }
    }

    /// Marks every flagged cell of `layout` as an obstacle. The graph is left dirty.
    pub fn apply_layout(&mut self, layout: &ObstacleLayout) -> Result<(), LayoutError> {
        if layout.rows() != self.rows() || layout.columns() != self.columns() {
            return Err(LayoutError::DimensionMismatch {
                expected: (self.rows(), self.columns()),
                found: (layout.rows(), layout.columns()),
            });
        }
        for (row, col) in layout.obstacles() {
            self.set_obstacle(row, col);
        }
        Ok(())
    }

    /// Rebuilds the graph if obstacles changed since it was built.
    pub fn update(&mut self) {
        if self.graph_dirty {
            info!("Navigation graph is dirty: rebuilding");
            self.rebuild_graph();
        }
    }
    /// Rebuilds the navigation graph from the current tile states.
    pub fn rebuild_graph(&mut self) {
        self.graph = NavGraph::build(&self.tiles);
        self.graph_dirty = false;
    }

    /// Shortest path between the tiles containing `from` and `to`, using the default
    /// [AstarSolver]. [None] if either point has no tile or the goal cannot be reached.
    pub fn shortest_path(&self, from: Vec2, to: Vec2) -> Option<SearchChain> {
        self.shortest_path_with(&AstarSolver::new(), from, to)
    }
    pub fn shortest_path_with(
        &self,
        solver: &AstarSolver,
        from: Vec2,
        to: Vec2,
    ) -> Option<SearchChain> {
        let start = self.tile_at(from.x, from.y)?.id();
        let goal = self.tile_at(to.x, to.y)?.id();
        solver.solve(self, start, goal)
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        if self.columns() == 0 {
            return Ok(());
        }
        for row in self.tiles.values.chunks(self.columns()) {
            writeln!(f, "{}", row.iter().map(|t| t.state().symbol()).join(" "))?;
        }
        Ok(())
    }
}
