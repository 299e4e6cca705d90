use fxhash::{FxBuildHasher, FxHashMap};
use indexmap::IndexSet;
use log::{debug, info};

use crate::collections::MinHeap;
use crate::grid::TileGrid;
use crate::solver::{SearchChain, SearchNode};
use crate::tile::{Tile, TileId};
use crate::vec2::Vec2;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Frontier payload. The heap priority is `cost + h`, the accumulated cost is kept apart so
/// that relaxation never adds up heuristic estimates.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    cost: f64,
    index: usize,
}

/// A* over an arbitrary graph given by `successors`. Tiles for which `movable` is false are
/// dropped when popped, even if the graph still links to them. Returns the chain rooted at
/// `goal`, or [None] once the frontier is exhausted.
///
/// With a non-negative admissible `heuristic` the first time the goal is popped its chain is
/// optimal.
pub fn astar<FN, IN, FH, FM>(
    start: TileId,
    goal: TileId,
    mut successors: FN,
    mut heuristic: FH,
    mut movable: FM,
) -> Option<SearchChain>
where
    FN: FnMut(TileId) -> IN,
    IN: IntoIterator<Item = (TileId, f64)>,
    FH: FnMut(TileId) -> f64,
    FM: FnMut(TileId) -> bool,
{
    let mut arena = vec![SearchNode {
        tile: start,
        parent: None,
    }];
    let mut frontier = MinHeap::new();
    frontier.push(heuristic(start), Frontier { cost: 0.0, index: 0 });
    let mut closed: FxIndexSet<TileId> = FxIndexSet::default();
    let mut best_cost: FxHashMap<TileId, f64> = FxHashMap::default();
    best_cost.insert(start, 0.0);

    while let Some(entry) = frontier.try_pop() {
        let Frontier { cost, index } = entry.payload;
        let tile = arena[index].tile;
        if closed.contains(&tile) || !movable(tile) {
            continue;
        }
        if tile == goal {
            debug!(
                "Reached {} from {} at cost {} after closing {} tiles",
                goal,
                start,
                cost,
                closed.len()
            );
            return Some(SearchChain::from_arena(&arena, index, cost));
        }
        closed.insert(tile);
        for (successor, weight) in successors(tile) {
            if closed.contains(&successor) {
                continue;
            }
            let new_cost = cost + weight;
            // A cheaper or equal route to this tile is already queued
            if best_cost
                .get(&successor)
                .is_some_and(|&known| known <= new_cost)
            {
                continue;
            }
            best_cost.insert(successor, new_cost);
            arena.push(SearchNode {
                tile: successor,
                parent: Some(index),
            });
            frontier.push(
                new_cost + heuristic(successor),
                Frontier {
                    cost: new_cost,
                    index: arena.len() - 1,
                },
            );
        }
    }
    debug!(
        "Frontier exhausted after closing {} tiles, no path from {} to {}",
        closed.len(),
        start,
        goal
    );
    None
}

/// Manhattan distance between two points.
pub fn manhattan(a: Vec2, b: Vec2) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// A* on a [TileGrid] using its navigation graph and a Manhattan heuristic between tile centers.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Multiplies the heuristic. Values above 1 trade optimality for fewer expansions.
    pub heuristic_factor: f64,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// Manhattan distance between the tile centers expressed in tiles, so that it never exceeds
    /// the number of unit-weight moves between them.
    pub fn heuristic(&self, grid: &TileGrid, current: &Tile, target: &Tile) -> f64 {
        let tile_size = grid.tile_size();
        let scale = |v: Vec2| Vec2::new(v.x / tile_size.x, v.y / tile_size.y);
        manhattan(scale(current.center()), scale(target.center())) * self.heuristic_factor
    }

    /// Searches from `start` to `goal` over the grid's navigation graph, checking tile
    /// movability live. Tiles missing from the graph are reported unreachable without
    /// searching.
    pub fn solve(&self, grid: &TileGrid, start: TileId, goal: TileId) -> Option<SearchChain> {
        let (_, goal_tile) = (grid.tile_by_id(start)?, grid.tile_by_id(goal)?);
        let graph = grid.graph();
        if start != goal && !(graph.contains(start) && graph.contains(goal)) {
            info!("{} is not reachable from {}", goal, start);
            return None;
        }
        astar(
            start,
            goal,
            |tile| graph.edges(tile),
            |tile| {
                grid.tile_by_id(tile)
                    .map_or(0.0, |t| self.heuristic(grid, t, goal_tile))
            },
            |tile| grid.tile_by_id(tile).is_some_and(Tile::is_movable),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Line graph 0 - 1 - 2 - 3 with a shortcut 0 - 3 of weight 5.
    fn line_successors(tile: TileId) -> Vec<(TileId, f64)> {
        let mut succ = Vec::new();
        if tile.0 > 0 {
            succ.push((TileId(tile.0 - 1), 1.0));
        }
        if tile.0 < 3 {
            succ.push((TileId(tile.0 + 1), 1.0));
        }
        match tile.0 {
            0 => succ.push((TileId(3), 5.0)),
            3 => succ.push((TileId(0), 5.0)),
            _ => {}
        }
        succ
    }

    #[test]
    fn finds_cheapest_route() {
        let chain = astar(
            TileId(0),
            TileId(3),
            line_successors,
            |t| (3 - t.0) as f64,
            |_| true,
        )
        .unwrap();
        assert_eq!(chain.cost(), 3.0);
        assert_eq!(
            chain.to_path(),
            vec![TileId(0), TileId(1), TileId(2), TileId(3)]
        );
    }

    /// A zero heuristic degrades to Dijkstra and still finds the optimum.
    #[test]
    fn zero_heuristic() {
        let chain = astar(TileId(0), TileId(3), line_successors, |_| 0.0, |_| true).unwrap();
        assert_eq!(chain.cost(), 3.0);
        assert_eq!(chain.hops(), 3);
    }

    /// Blocking tile 1 live forces the expensive shortcut.
    #[test]
    fn live_movability_is_respected() {
        let chain = astar(
            TileId(0),
            TileId(3),
            line_successors,
            |_| 0.0,
            |t| t != TileId(1),
        )
        .unwrap();
        assert_eq!(chain.cost(), 5.0);
        assert_eq!(chain.to_path(), vec![TileId(0), TileId(3)]);
    }

    #[test]
    fn start_is_goal() {
        let chain = astar(TileId(2), TileId(2), line_successors, |_| 0.0, |_| true).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.cost(), 0.0);
    }

    #[test]
    fn exhausted_frontier_is_none() {
        let result = astar(
            TileId(0),
            TileId(9),
            line_successors,
            |_| 0.0,
            |_| true,
        );
        assert!(result.is_none());
    }

    #[test]
    fn blocked_start_is_none() {
        let result = astar(
            TileId(0),
            TileId(2),
            line_successors,
            |_| 0.0,
            |t| t != TileId(0),
        );
        assert!(result.is_none());
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Vec2::new(0.5, 0.5), Vec2::new(2.5, 1.5)), 3.0);
        assert_eq!(manhattan(Vec2::new(2.0, -1.0), Vec2::new(-1.0, 3.0)), 7.0);
    }
}
