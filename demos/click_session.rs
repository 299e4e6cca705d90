use tile_pathfinding::{GridConfig, TileGrid, TileId, Vec2};

/// Replays the clicks of an interactive session on the default 640x480 map with 32x32 tiles:
/// every pair of clicks picks a start and an end, after which the path between them is drawn
/// and the previous one is cleared.
fn main() {
    let mut grid = TileGrid::from_config(&GridConfig::default());
    for col in 3..17 {
        grid.set_obstacle(7, col);
    }
    grid.update();

    let clicks = [
        Vec2::new(10.0, 10.0),
        Vec2::new(600.0, 460.0),
        Vec2::new(320.0, 235.0), // obstacle, ignored
        Vec2::new(300.0, 20.0),
        Vec2::new(40.0, 400.0),
    ];
    let mut start: Option<Vec2> = None;
    let mut previous: Option<(Vec2, Vec2, Vec<TileId>)> = None;
    for click in clicks {
        if !grid.is_tile_available(click.x, click.y) {
            println!("{click} is not available");
            continue;
        }
        match start.take() {
            None => {
                if let Some((s, e, path)) = previous.take() {
                    grid.clear_path(&path);
                    grid.clear_tile(s.x, s.y);
                    grid.clear_tile(e.x, e.y);
                }
                grid.set_start_point(click.x, click.y);
                start = Some(click);
            }
            Some(s) => {
                grid.set_end_point(click.x, click.y);
                match grid.shortest_path(s, click) {
                    Some(chain) => {
                        println!("{s} -> {click}: {} moves", chain.hops());
                        let path = chain.to_path();
                        grid.set_path(&path);
                        previous = Some((s, click, path));
                    }
                    None => {
                        println!("{s} -> {click}: no path");
                        previous = Some((s, click, Vec::new()));
                    }
                }
                println!("{grid}");
            }
        }
    }
}
