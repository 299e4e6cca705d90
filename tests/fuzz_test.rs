/// Fuzzes the search by comparing it against a plain breadth-first search on many random grids.
/// A path must be found exactly when the goal is reachable, and its length must be optimal.
use rand::prelude::*;
use std::collections::VecDeque;
use tile_pathfinding::{TileGrid, TileId, Vec2};

fn random_grid(n: usize, rng: &mut StdRng) -> TileGrid {
    let mut grid = TileGrid::new(Vec2::new(n as f64, n as f64), Vec2::new(1.0, 1.0));
    for row in 0..n {
        for col in 0..n {
            if rng.gen_bool(0.35) {
                grid.set_obstacle(row, col);
            }
        }
    }
    grid
}

fn random_center(grid: &TileGrid, rng: &mut StdRng) -> Vec2 {
    let row = rng.gen_range(0..grid.rows());
    let col = rng.gen_range(0..grid.columns());
    grid.tile(row, col).unwrap().center()
}

/// Hop distances from `source` over movable tiles, [None] where unreachable.
fn bfs_distances(grid: &TileGrid, source: TileId) -> Vec<Option<usize>> {
    let mut distances = vec![None; grid.tiles().len()];
    if !grid.tile_by_id(source).unwrap().is_movable() {
        return distances;
    }
    let mut queue = VecDeque::from([source]);
    distances[source.index()] = Some(0);
    while let Some(id) = queue.pop_front() {
        let tile = grid.tile_by_id(id).unwrap();
        let d = distances[id.index()].unwrap();
        let (row, col) = (tile.row() as i64, tile.col() as i64);
        for (r, c) in [(row, col - 1), (row, col + 1), (row - 1, col), (row + 1, col)] {
            if r < 0 || c < 0 {
                continue;
            }
            if let Some(next) = grid.tile(r as usize, c as usize) {
                if next.is_movable() && distances[next.id().index()].is_none() {
                    distances[next.id().index()] = Some(d + 1);
                    queue.push_back(next.id());
                }
            }
        }
    }
    distances
}

fn visualize_grid(grid: &TileGrid, start: Vec2, end: Vec2) {
    println!("{grid}");
    println!("Start: {start}; End: {end}");
}

/// Obstacles are placed after the graph was built, so only the live movability check keeps the
/// search away from them.
#[test]
fn fuzz_stale_graph() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng);
        assert_eq!(grid.graph().node_count(), N * N);
        let start = random_center(&grid, &mut rng);
        let end = random_center(&grid, &mut rng);
        let start_id = grid.tile_at(start.x, start.y).unwrap().id();
        let end_id = grid.tile_at(end.x, end.y).unwrap().id();
        let expected = bfs_distances(&grid, start_id)[end_id.index()];
        let chain = grid.shortest_path(start, end);
        if chain.as_ref().map(|c| c.hops()) != expected {
            visualize_grid(&grid, start, end);
        }
        assert_eq!(chain.as_ref().map(|c| c.hops()), expected);
        if let Some(chain) = chain {
            assert_eq!(chain.cost(), chain.hops() as f64);
            assert_eq!(chain.start(), start_id);
            assert_eq!(chain.goal(), end_id);
        }
    }
}

/// After a rebuild the graph only covers the component of tile (0, 0), so paths exist exactly
/// between tiles of that component.
#[test]
fn fuzz_rebuilt_graph() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.update();
        let seed_distances = bfs_distances(&grid, TileId(0));
        for id in grid.graph().nodes() {
            assert!(seed_distances[id.index()].is_some());
        }
        let start = random_center(&grid, &mut rng);
        let end = random_center(&grid, &mut rng);
        let start_id = grid.tile_at(start.x, start.y).unwrap().id();
        let end_id = grid.tile_at(end.x, end.y).unwrap().id();
        let chain = grid.shortest_path(start, end);
        if start_id == end_id {
            assert_eq!(
                chain.is_some(),
                grid.tile_by_id(start_id).unwrap().is_movable()
            );
            continue;
        }
        let in_component = |id: TileId| seed_distances[id.index()].is_some();
        let expected = if in_component(start_id) && in_component(end_id) {
            bfs_distances(&grid, start_id)[end_id.index()]
        } else {
            None
        };
        if chain.as_ref().map(|c| c.hops()) != expected {
            visualize_grid(&grid, start, end);
        }
        assert_eq!(chain.map(|c| c.hops()), expected);
    }
}
