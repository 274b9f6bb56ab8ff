//! Demo runner: load a configuration and a map document, project every
//! location and print the derived scene values without any rendering surface.

use std::env;
use std::process;

use polarmap::storage::records;
use polarmap::{grid_bounds, ColorMapper, ColorScheme, MapConfig, SceneFilter};

fn main() {
    let mut args = env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "config.json".to_string());
    let map_path = args.next().unwrap_or_else(|| "locations.json".to_string());

    if let Err(error) = run(&config_path, &map_path) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn run(config_path: &str, map_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = MapConfig::load(config_path)?;
    let document = records::load_document(map_path)?;
    let map = records::build_map(&document, &config.categories)?;

    let extents = map.extents();
    let bounds = grid_bounds(&extents, config.major_grid);

    let mut mapper = ColorMapper::new(
        config.categories.clone(),
        config.marker_done_color,
        config.depth_scale.clone(),
    );

    // Show everything the file contains: full depth range, all configured
    // categories, done included.
    let filter = SceneFilter {
        min_depth: extents.min_depth,
        max_depth: extents.max_depth,
        categories: config.categories.keys().cloned().collect(),
        include_done: true,
        beacons_only: false,
    };

    println!("{}", map);
    println!(
        "grid: x {}..{} y {}..{} (major {}, minor {})",
        bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y, config.major_grid, config.minor_grid
    );

    for (id, location) in map.iter() {
        let point = location.position();
        let category_color = mapper.color(location, &extents)?;
        mapper.set_scheme(ColorScheme::Depth);
        let depth_color = mapper.color(location, &extents)?;
        mapper.set_scheme(ColorScheme::Category);

        println!(
            "{} {} -> ({}, {}) visible={} category_hsl=({}, {}, {}) depth_hsl=({}, {}, {})",
            id,
            location,
            point.x,
            point.y,
            filter.is_visible(location),
            category_color.hue,
            category_color.saturation,
            category_color.lightness,
            depth_color.hue,
            depth_color.saturation,
            depth_color.lightness
        );
    }

    Ok(())
}
