use std::ops::AddAssign;

use warren_geom::{Color, Vec3};
use warren_mesh::GeometryBuilder;

use crate::tiles::{Corner, DualTile};

pub const DEFAULT_WALL_HEIGHT: f32 = 2.0;
pub const DEFAULT_WALL_COLOR: u32 = 0xff0000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallParams {
    pub wall_height: f32,
    /// Accent applied to interior walls; everything else keeps the default white.
    pub wall_color: Color,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            wall_height: DEFAULT_WALL_HEIGHT,
            wall_color: Color::from_hex(DEFAULT_WALL_COLOR),
        }
    }
}

/// Quads emitted for one tile, by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileEmission {
    pub ceilings: u32,
    pub floors: u32,
    pub boundary: u32,
    pub interior: u32,
}

impl TileEmission {
    #[inline]
    pub fn quads(&self) -> u32 {
        self.ceilings + self.floors + self.boundary + self.interior
    }
}

impl AddAssign for TileEmission {
    fn add_assign(&mut self, rhs: TileEmission) {
        self.ceilings += rhs.ceilings;
        self.floors += rhs.floors;
        self.boundary += rhs.boundary;
        self.interior += rhs.interior;
    }
}

/// World-space `(x, z)` of a tile's min-x edge and its horizontal midline.
/// The tile covers `[x, x + 2] x [z - 1, z + 1]`.
#[inline]
pub fn tile_origin(tile: &DualTile, width: i32, height: i32) -> (i32, i32) {
    (tile.x * 2 - width, tile.y * 2 - height)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Winding {
    Forward,
    Reversed,
}

impl Winding {
    #[inline]
    fn flip(self) -> Winding {
        match self {
            Winding::Forward => Winding::Reversed,
            Winding::Reversed => Winding::Forward,
        }
    }
}

/// Half-wall running from the tile centre to one edge midpoint.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum HalfWall {
    /// Towards the top edge (-z), between the two top corners.
    NegZ,
    /// Towards the right edge (+x), between the two right corners.
    PosX,
    /// Towards the bottom edge (+z), between the two bottom corners.
    PosZ,
    /// Towards the left edge (-x), between the two left corners.
    NegX,
}

impl HalfWall {
    /// Forward corners: bottom edge in +axis order, then back along the top.
    /// Forward x-walls face +z and forward z-walls face -x.
    fn corners(self, cx: f32, z: f32, h: f32, winding: Winding) -> [Vec3; 4] {
        let (p0, p1) = match self {
            HalfWall::NegZ => (Vec3::new(cx, 0.0, z - 1.0), Vec3::new(cx, 0.0, z)),
            HalfWall::PosZ => (Vec3::new(cx, 0.0, z), Vec3::new(cx, 0.0, z + 1.0)),
            HalfWall::NegX => (Vec3::new(cx - 1.0, 0.0, z), Vec3::new(cx, 0.0, z)),
            HalfWall::PosX => (Vec3::new(cx, 0.0, z), Vec3::new(cx + 1.0, 0.0, z)),
        };
        let up = Vec3::new(0.0, h, 0.0);
        let mut quad = [p0, p1, p1 + up, p0 + up];
        if winding == Winding::Reversed {
            quad.reverse();
        }
        quad
    }
}

// Edges of the 2x2 corner square, walked clockwise from the top. Each entry
// names the half-wall separating the pair and the winding that faces the
// wall towards `from` when `from` is set and `to` is clear.
const EDGES: [(Corner, Corner, HalfWall, Winding); 4] = [
    (Corner::TopLeft, Corner::TopRight, HalfWall::NegZ, Winding::Forward),
    (Corner::TopRight, Corner::BottomRight, HalfWall::PosX, Winding::Reversed),
    (Corner::BottomRight, Corner::BottomLeft, HalfWall::PosZ, Winding::Reversed),
    (Corner::BottomLeft, Corner::TopLeft, HalfWall::NegX, Winding::Forward),
];

/// Outer edges of the level that get a sealing wall.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Side {
    MinX,
    MaxX,
    MinZ,
    MaxZ,
}

impl Side {
    /// Full-height wall along the tile's side, facing out of the level.
    fn corners(self, x: f32, z: f32, h: f32) -> [Vec3; 4] {
        match self {
            Side::MinX => [
                Vec3::new(x, h, z + 1.0),
                Vec3::new(x, h, z - 1.0),
                Vec3::new(x, 0.0, z - 1.0),
                Vec3::new(x, 0.0, z + 1.0),
            ],
            Side::MaxX => [
                Vec3::new(x + 2.0, 0.0, z + 1.0),
                Vec3::new(x + 2.0, 0.0, z - 1.0),
                Vec3::new(x + 2.0, h, z - 1.0),
                Vec3::new(x + 2.0, h, z + 1.0),
            ],
            Side::MinZ => [
                Vec3::new(x + 2.0, 0.0, z - 1.0),
                Vec3::new(x, 0.0, z - 1.0),
                Vec3::new(x, h, z - 1.0),
                Vec3::new(x + 2.0, h, z - 1.0),
            ],
            Side::MaxZ => [
                Vec3::new(x + 2.0, h, z + 1.0),
                Vec3::new(x, h, z + 1.0),
                Vec3::new(x, 0.0, z + 1.0),
                Vec3::new(x + 2.0, 0.0, z + 1.0),
            ],
        }
    }
}

/// Min-x and min-z of the quadrant a corner covers, relative to the tile origin.
#[inline]
fn quadrant_offset(corner: Corner) -> (f32, f32) {
    match corner {
        Corner::TopLeft => (0.0, -1.0),
        Corner::TopRight => (1.0, -1.0),
        Corner::BottomLeft => (0.0, 0.0),
        Corner::BottomRight => (1.0, 0.0),
    }
}

/// Emits the geometry for one dual tile into `out`.
///
/// Clear corners get a ceiling (facing +y, at wall height) and a floor
/// (facing -y, at 0) over their quadrant. Tiles on the grid rim get a
/// sealing wall per rim side. Every edge of the corner square whose two bits
/// differ gets an accent-colored half-wall facing the set corner.
pub fn synthesize_tile(
    tile: &DualTile,
    width: i32,
    height: i32,
    params: &WallParams,
    out: &mut GeometryBuilder,
) -> TileEmission {
    let mut emitted = TileEmission::default();
    let h = params.wall_height;
    let (xi, zi) = tile_origin(tile, width, height);
    let (x, z) = (xi as f32, zi as f32);

    for corner in Corner::ALL {
        if tile.is_set(corner) {
            continue;
        }
        let (dx, dz) = quadrant_offset(corner);
        let (x0, x1) = (x + dx, x + dx + 1.0);
        let (z0, z1) = (z + dz, z + dz + 1.0);
        out.add_quad(
            Vec3::new(x0, h, z1),
            Vec3::new(x1, h, z1),
            Vec3::new(x1, h, z0),
            Vec3::new(x0, h, z0),
        );
        emitted.ceilings += 1;
        out.add_quad(
            Vec3::new(x0, 0.0, z0),
            Vec3::new(x1, 0.0, z0),
            Vec3::new(x1, 0.0, z1),
            Vec3::new(x0, 0.0, z1),
        );
        emitted.floors += 1;
    }

    let rim = [
        (xi == -width, Side::MinX),
        (xi == width, Side::MaxX),
        (zi == -height, Side::MinZ),
        (zi == height, Side::MaxZ),
    ];
    for (on_rim, side) in rim {
        if on_rim {
            let [a, b, c, d] = side.corners(x, z, h);
            out.add_quad(a, b, c, d);
            emitted.boundary += 1;
        }
    }

    if tile.is_clear() {
        return emitted;
    }
    log::trace!(
        "tile ({}, {}) case {} walls",
        tile.x,
        tile.y,
        tile.case_index()
    );

    let cx = x + 1.0;
    let mut wall = |half: HalfWall, winding: Winding| {
        let [a, b, c, d] = half.corners(cx, z, h, winding);
        let q = out.add_quad(a, b, c, d);
        out.set_quad_color(q, params.wall_color);
        emitted.interior += 1;
    };
    for &(from, to, half, winding) in &EDGES {
        if tile.is_set(from) && !tile.is_set(to) {
            wall(half, winding);
        }
    }
    for &(from, to, half, winding) in &EDGES {
        if !tile.is_set(from) && tile.is_set(to) {
            wall(half, winding.flip());
        }
    }
    emitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_mesh::face_normal;

    fn normal_of(q: [Vec3; 4]) -> Vec3 {
        face_normal(q[0], q[1], q[2])
    }

    #[test]
    fn forward_half_walls_face_documented_axes() {
        let n = |hw: HalfWall| normal_of(hw.corners(1.0, 0.0, 2.0, Winding::Forward));
        assert_eq!(n(HalfWall::PosX), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(n(HalfWall::NegX), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(n(HalfWall::PosZ), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(n(HalfWall::NegZ), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn reversed_half_wall_is_mirrored() {
        let f = HalfWall::NegZ.corners(1.0, 0.0, 2.0, Winding::Forward);
        let r = HalfWall::NegZ.corners(1.0, 0.0, 2.0, Winding::Reversed);
        assert_eq!(r, [f[3], f[2], f[1], f[0]]);
        assert_eq!(normal_of(r), -normal_of(f));
    }

    #[test]
    fn edge_table_faces_the_set_corner() {
        // Direction from the tile centre towards each corner's quadrant.
        let towards = |c: Corner| match c {
            Corner::TopLeft => Vec3::new(-1.0, 0.0, -1.0),
            Corner::TopRight => Vec3::new(1.0, 0.0, -1.0),
            Corner::BottomLeft => Vec3::new(-1.0, 0.0, 1.0),
            Corner::BottomRight => Vec3::new(1.0, 0.0, 1.0),
        };
        for &(from, to, half, winding) in &EDGES {
            let n = normal_of(half.corners(0.0, 0.0, 2.0, winding));
            assert!(n.dot(towards(from)) > 0.0, "{:?} should face {:?}", half, from);
            let n = normal_of(half.corners(0.0, 0.0, 2.0, winding.flip()));
            assert!(n.dot(towards(to)) > 0.0, "{:?} should face {:?}", half, to);
        }
    }

    #[test]
    fn rim_walls_face_outwards() {
        let n = |s: Side| normal_of(s.corners(0.0, 0.0, 2.0));
        assert_eq!(n(Side::MinX), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(n(Side::MaxX), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(n(Side::MinZ), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(n(Side::MaxZ), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn emission_sums() {
        let mut total = TileEmission::default();
        total += TileEmission {
            ceilings: 1,
            floors: 1,
            boundary: 0,
            interior: 2,
        };
        total += TileEmission {
            ceilings: 0,
            floors: 0,
            boundary: 1,
            interior: 0,
        };
        assert_eq!(total.quads(), 5);
        assert_eq!(total.interior, 2);
    }
}
