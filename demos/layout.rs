use tile_pathfinding::{LayoutError, ObstacleLayout, TileGrid, Vec2};

// Loads an obstacle layout where 1 marks an obstacle and routes around it.
const LAYOUT: &str = r#"[
    [0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 1, 0],
    [1, 1, 1, 0, 1, 0],
    [0, 0, 0, 0, 1, 0]
]"#;

fn main() -> Result<(), LayoutError> {
    let layout = ObstacleLayout::from_json(LAYOUT)?;
    let mut grid = TileGrid::new(
        Vec2::new(layout.columns() as f64 * 16.0, layout.rows() as f64 * 16.0),
        Vec2::new(16.0, 16.0),
    );
    grid.apply_layout(&layout)?;
    grid.update();
    let (from, to) = (Vec2::new(8.0, 72.0), Vec2::new(88.0, 72.0));
    match grid.shortest_path(from, to) {
        Some(chain) => {
            println!("Found a path of {} moves", chain.hops());
            grid.set_path(&chain.to_path());
        }
        None => println!("No path from {from} to {to}"),
    }
    println!("{grid}");
    Ok(())
}
