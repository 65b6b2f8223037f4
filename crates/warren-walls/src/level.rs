use std::time::Instant;

use warren_mesh::{GeometryBuffer, GeometryBuilder};

use crate::settle::{MapGenerator, SettleOutcome, SettleParams, settle};
use crate::synth::{TileEmission, WallParams, synthesize_tile};
use crate::tiles::TileMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelStats {
    pub tiles: usize,
    pub emission: TileEmission,
}

/// Synthesizes every dual tile of `map`, in order, into `out`.
///
/// `out` is appended to, not reset; clear it between maps.
pub fn build_level<M: TileMap + ?Sized>(
    map: &M,
    params: &WallParams,
    out: &mut GeometryBuilder,
) -> LevelStats {
    let t0 = Instant::now();
    let (width, height) = (map.width(), map.height());
    let tiles = map.dual_tiles();
    // Upper bound is 14 quads a tile; most tiles emit far fewer.
    out.reserve_quads(tiles.len() * 4);
    let mut stats = LevelStats::default();
    for tile in tiles {
        stats.emission += synthesize_tile(tile, width, height, params, out);
        stats.tiles += 1;
    }
    log::info!(
        "level {}x{}: {} tiles -> {} quads ({} interior walls, {} rim walls) in {:.2?}",
        width,
        height,
        stats.tiles,
        stats.emission.quads(),
        stats.emission.interior,
        stats.emission.boundary,
        t0.elapsed()
    );
    stats
}

/// Settles `generator`, meshes the final map into a fresh builder and
/// returns the flattened result.
pub fn generate_level<G: MapGenerator>(
    generator: &mut G,
    settle_params: &SettleParams,
    wall_params: &WallParams,
) -> (SettleOutcome, LevelStats, GeometryBuffer) {
    let t0 = Instant::now();
    let outcome = settle(generator, settle_params);
    let mut builder = GeometryBuilder::new();
    let stats = build_level(generator.map(), wall_params, &mut builder);
    let buffer = builder.into_buffer();
    log::debug!(
        "generated {} vertices in {:.2?}",
        buffer.count,
        t0.elapsed()
    );
    (outcome, stats, buffer)
}
