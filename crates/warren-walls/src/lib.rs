//! Marching-squares level synthesis: turns a dual tile map into floor,
//! ceiling and wall quads in a shared geometry builder.
#![forbid(unsafe_code)]

pub mod level;
pub mod settle;
pub mod synth;
pub mod tiles;

pub use level::{LevelStats, build_level, generate_level};
pub use settle::{MapGenerator, SettleOutcome, SettleParams, StopReason, settle};
pub use synth::{TileEmission, WallParams, synthesize_tile};
pub use tiles::{Corner, DualTile, MapParseError, OccupancyGrid, TileMap};
