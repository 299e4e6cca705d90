use tile_pathfinding::{TileGrid, Vec2};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Tiles have a 4-neighbourhood

fn main() {
    let mut grid = TileGrid::new(Vec2::new(3.0, 3.0), Vec2::new(1.0, 1.0));
    grid.set_obstacle(1, 1);
    grid.update();
    let start = Vec2::new(0.5, 0.5);
    let end = Vec2::new(2.5, 2.5);
    let chain = grid.shortest_path(start, end).unwrap();
    println!("Path:");
    for id in chain.to_path() {
        let tile = grid.tile_by_id(id).unwrap();
        println!("({}, {})", tile.row(), tile.col());
    }
    grid.set_path(&chain.to_path());
    println!("{}", grid);
}
