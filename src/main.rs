mod config;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use warren_mesh::{GeometryBuffer, GeometryBuilder};
use warren_walls::{LevelStats, OccupancyGrid, TileMap, build_level};

use crate::config::{WarrenConfig, load_config_from_path};

#[derive(Parser, Debug)]
#[command(
    name = "warren",
    about = "Mesh an ASCII tile map into floor, ceiling and wall geometry"
)]
struct Args {
    /// Map file: '#' or '1' marks a set cell; '.', '0' or a space a clear one.
    #[arg(long, default_value = "assets/maps/cave.txt")]
    map: PathBuf,
    /// TOML settings; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides `walls.wall_height` from the config.
    #[arg(long)]
    wall_height: Option<f32>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut cfg = match &args.config {
        Some(path) => load_config_from_path(path)
            .map_err(|e| format!("config {}: {}", path.display(), e))?,
        None => WarrenConfig::default(),
    };
    if let Some(h) = args.wall_height {
        cfg.walls.wall_height = h;
    }

    let map = OccupancyGrid::load(&args.map)
        .map_err(|e| format!("map {}: {}", args.map.display(), e))?;
    log::info!(
        "loaded {} ({}x{}, {:.1}% set)",
        args.map.display(),
        map.width(),
        map.height(),
        map.coverage() * 100.0
    );

    let mut builder = GeometryBuilder::new();
    let stats = build_level(&map, &cfg.wall_params(), &mut builder);
    let buffer = builder.into_buffer();
    println!("{}", summary(&stats, &buffer));
    Ok(())
}

fn summary(stats: &LevelStats, buffer: &GeometryBuffer) -> String {
    let e = &stats.emission;
    let mut out = format!(
        "tiles: {}\nquads: {} (ceiling {}, floor {}, rim {}, interior {})\nvertices: {}\ntriangles: {}",
        stats.tiles,
        e.quads(),
        e.ceilings,
        e.floors,
        e.boundary,
        e.interior,
        buffer.count,
        buffer.triangle_count()
    );
    if let Some(b) = buffer.bounds() {
        out.push_str(&format!(
            "\nbounds: ({}, {}, {}) .. ({}, {}, {})",
            b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z
        ));
    }
    out
}
