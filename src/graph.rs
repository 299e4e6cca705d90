use grid_util::grid::{BoolGrid, Grid, SimpleGrid};
use grid_util::point::Point;
use log::info;
use petgraph::graphmap::UnGraphMap;
use smallvec::SmallVec;

use crate::collections::Queue;
use crate::tile::{Tile, TileId};
use crate::{EDGE_WEIGHT, N_SMALLVEC_SIZE};

/// Undirected navigation graph over tile identities. Every edge is stored once and reported from
/// both endpoints with the same weight.
#[derive(Clone, Debug, Default)]
pub struct NavGraph {
    graph: UnGraphMap<TileId, f64>,
}

/// In-bounds 4-neighbourhood of `point` in the order left, right, up, down.
pub(crate) fn neumann_neighbours<T: Copy, G: Grid<T>>(
    grid: &G,
    point: Point,
) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
    [
        Point::new(point.x - 1, point.y),
        Point::new(point.x + 1, point.y),
        Point::new(point.x, point.y - 1),
        Point::new(point.x, point.y + 1),
    ]
    .into_iter()
    .filter(|&p| grid.point_in_bounds(p))
    .collect()
}

impl NavGraph {
    pub fn new() -> NavGraph {
        NavGraph::default()
    }

    /// Inserts the undirected edge between `origin` and `destination`. Re-adding an existing
    /// edge overwrites its weight.
    pub fn add_edge(&mut self, origin: TileId, destination: TileId, weight: f64) {
        self.graph.add_edge(origin, destination, weight);
    }

    /// Neighbours of `node` with their edge weights. Unknown nodes have no edges.
    pub fn edges(&self, node: TileId) -> impl Iterator<Item = (TileId, f64)> + '_ {
        self.graph.edges(node).map(|(_, n, &w)| (n, w))
    }

    pub fn contains(&self, node: TileId) -> bool {
        self.graph.contains_node(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = TileId> + '_ {
        self.graph.nodes()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Builds the graph with a breadth-first traversal seeded at tile (0, 0). Only movable tiles
    /// become nodes, so the result is exactly the 4-connected component of the seed. A blocked
    /// seed or an empty grid gives an empty graph.
    pub fn build(tiles: &SimpleGrid<Tile>) -> NavGraph {
        let mut nav_graph = NavGraph::new();
        let seed = Point::new(0, 0);
        if !tiles.point_in_bounds(seed) {
            return nav_graph;
        }
        let mut visited = BoolGrid::new(tiles.width(), tiles.height(), false);
        let can_move =
            |visited: &BoolGrid, p: Point| !visited.get_point(p) && tiles.get_point(p).is_movable();

        let mut queue = Queue::new();
        queue.push(seed);
        while let Some(point) = queue.try_pop() {
            if !can_move(&visited, point) {
                continue;
            }
            visited.set_point(point, true);
            let origin = TileId(tiles.get_ix_point(&point));
            for neighbour in neumann_neighbours(tiles, point) {
                if can_move(&visited, neighbour) {
                    queue.push(neighbour);
                    let destination = TileId(tiles.get_ix_point(&neighbour));
                    nav_graph.add_edge(origin, destination, EDGE_WEIGHT);
                }
            }
        }
        info!(
            "Built navigation graph with {} nodes and {} edges",
            nav_graph.node_count(),
            nav_graph.edge_count()
        );
        nav_graph
    }
}
