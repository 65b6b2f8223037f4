use warren_geom::{Aabb, Vec3};

use crate::arena::Vertex;

/// Flattened, unindexed vertex data. Every array is keyed by `count`;
/// `indices` is always `0..count`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBuffer {
    pub count: usize,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub colors: Vec<f32>,
    pub uvs: Vec<f32>,
    pub face_indices: Vec<u32>,
    pub indices: Vec<u32>,
}

impl GeometryBuffer {
    /// Flattens `vertices` in slice order.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let count = vertices.len();
        let mut out = GeometryBuffer {
            count,
            positions: Vec::with_capacity(count * 3),
            normals: Vec::with_capacity(count * 3),
            colors: Vec::with_capacity(count * 3),
            uvs: Vec::with_capacity(count * 2),
            face_indices: Vec::with_capacity(count),
            indices: (0..count as u32).collect(),
        };
        for v in vertices {
            out.positions
                .extend_from_slice(&[v.position.x, v.position.y, v.position.z]);
            out.normals
                .extend_from_slice(&[v.normal.x, v.normal.y, v.normal.z]);
            out.colors.extend_from_slice(&[v.color.r, v.color.g, v.color.b]);
            out.uvs.extend_from_slice(&[v.uv.x, v.uv.y]);
            out.face_indices.push(v.face_index);
        }
        out
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.count / 3
    }

    pub fn position(&self, i: usize) -> Option<Vec3> {
        read_vec3(&self.positions, i)
    }

    pub fn normal(&self, i: usize) -> Option<Vec3> {
        read_vec3(&self.normals, i)
    }

    /// Bounding box over all positions; `None` for an empty buffer.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(
            self.positions
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2])),
        )
    }
}

#[inline]
fn read_vec3(data: &[f32], i: usize) -> Option<Vec3> {
    let s = data.get(i * 3..i * 3 + 3)?;
    Some(Vec3::new(s[0], s[1], s[2]))
}
