use warren_geom::{Color, Vec2, Vec3};

use crate::arena::{Quad, QuadId, Triangle, TriangleId, Vertex, VertexId};
use crate::buffer::GeometryBuffer;

/// Normal of the triangle `(a, b, c)`: `normalize((b - a) × (c - a))`.
/// Degenerate input yields the zero vector.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalized()
}

// Per-corner UVs of the two triangles of a quad.
const QUAD_UVS: [[Vec2; 3]; 2] = [
    [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)],
    [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)],
];

/// Owns every emitted vertex, triangle and quad, and lazily flattens the
/// vertex arena into a [`GeometryBuffer`].
///
/// Vertices are never shared: each triangle pushes three fresh vertices and
/// each quad pushes six. The cached buffer is valid while `dirty` is false;
/// every mutation sets it and the next read re-derives the buffer.
///
/// Handles are stamped with the builder's epoch. [`clear`](Self::clear)
/// starts a new epoch, so handles from before it are rejected even once the
/// arena slots they name have been refilled.
#[derive(Default, Clone, Debug)]
pub struct GeometryBuilder {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
    quads: Vec<Quad>,
    face_count: u32,
    epoch: u32,
    dirty: bool,
    cache: GeometryBuffer,
    rebuilds: u64,
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-reserve arena capacity for approximately `n_quads` quads.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.vertices.reserve(n_quads * 6);
        self.triangles.reserve(n_quads * 2);
        self.quads.reserve(n_quads);
    }

    /// Appends one triangle with a flat normal, default UV and color, and
    /// face index 0. Does not advance the face counter.
    pub fn add_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) -> TriangleId {
        let n = face_normal(a, b, c);
        self.push_triangle([Vertex::new(a, n), Vertex::new(b, n), Vertex::new(c, n)])
    }

    /// Appends a quad as triangles `(a, b, c)` and `(a, c, d)`.
    ///
    /// All six vertices share the normal of `(a, b, c)` and the current face
    /// index; UVs follow corner order, so callers pass points with a
    /// consistent winding.
    pub fn add_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> QuadId {
        let n = face_normal(a, b, c);
        let face = self.face_count;
        let [uv0, uv1] = QUAD_UVS;
        let abc = self.push_triangle([
            Vertex::with_face(a, n, uv0[0], face),
            Vertex::with_face(b, n, uv0[1], face),
            Vertex::with_face(c, n, uv0[2], face),
        ]);
        self.push_triangle([
            Vertex::with_face(a, n, uv1[0], face),
            Vertex::with_face(c, n, uv1[1], face),
            Vertex::with_face(d, n, uv1[2], face),
        ]);
        let id = QuadId::new(self.quads.len() as u32, self.epoch);
        self.quads.push(Quad {
            first_triangle: abc.index() as u32,
        });
        self.face_count += 1;
        id
    }

    fn push_triangle(&mut self, verts: [Vertex; 3]) -> TriangleId {
        let first_vertex = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&verts);
        let id = TriangleId::new(self.triangles.len() as u32, self.epoch);
        self.triangles.push(Triangle { first_vertex });
        self.dirty = true;
        id
    }

    fn live_triangle(&self, id: TriangleId) -> Option<Triangle> {
        if id.epoch() != self.epoch {
            return None;
        }
        self.triangles.get(id.index()).copied()
    }

    fn live_quad(&self, id: QuadId) -> Option<Quad> {
        if id.epoch() != self.epoch {
            return None;
        }
        self.quads.get(id.index()).copied()
    }

    fn recolor(&mut self, tri: Triangle, color: Color) {
        for v in tri.vertex_indices() {
            self.vertices[v].color = color;
        }
        self.dirty = true;
    }

    /// Recolors the three vertices of `tri`. Stale handles are ignored.
    pub fn set_triangle_color(&mut self, tri: TriangleId, color: Color) {
        match self.live_triangle(tri) {
            Some(t) => self.recolor(t, color),
            None => log::warn!("set_triangle_color: stale or unknown {:?}", tri),
        }
    }

    /// Recolors all six vertices of `quad`. Stale handles are ignored.
    pub fn set_quad_color(&mut self, quad: QuadId, color: Color) {
        let Some(q) = self.live_quad(quad) else {
            log::warn!("set_quad_color: stale or unknown {:?}", quad);
            return;
        };
        for t in q.triangle_indices() {
            let tri = self.triangles[t];
            self.recolor(tri, color);
        }
    }

    pub fn set_vertex_uv(&mut self, vertex: VertexId, uv: Vec2) {
        if vertex.epoch() != self.epoch {
            log::warn!("set_vertex_uv: stale {:?}", vertex);
            return;
        }
        if let Some(v) = self.vertices.get_mut(vertex.index()) {
            v.uv = uv;
            self.dirty = true;
        } else {
            log::warn!("set_vertex_uv: no vertex {:?}", vertex);
        }
    }

    /// Handle for the vertex in arena slot `index`, which is also its
    /// position in the flattened buffer.
    pub fn vertex_id(&self, index: usize) -> Option<VertexId> {
        (index < self.vertices.len()).then(|| VertexId::new(index as u32, self.epoch))
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        if id.epoch() != self.epoch {
            return None;
        }
        self.vertices.get(id.index())
    }

    pub fn triangle_vertices(&self, id: TriangleId) -> Option<[&Vertex; 3]> {
        let [a, b, c] = self.live_triangle(id)?.vertex_indices();
        Some([&self.vertices[a], &self.vertices[b], &self.vertices[c]])
    }

    pub fn quad_triangles(&self, id: QuadId) -> Option<[TriangleId; 2]> {
        let [abc, def] = self.live_quad(id)?.triangle_indices();
        Some([
            TriangleId::new(abc as u32, self.epoch),
            TriangleId::new(def as u32, self.epoch),
        ])
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Number of quads ever added; the label the next quad will carry.
    #[inline]
    pub fn face_count(&self) -> u32 {
        self.face_count
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// How many times the flattened buffer has been re-derived.
    #[inline]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Drops all primitives but keeps arena capacity for reuse.
    /// The face counter is not rewound, so labels are never handed out twice,
    /// and every handle issued so far goes stale.
    pub fn clear(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.vertices.clear();
        self.triangles.clear();
        self.quads.clear();
        self.dirty = true;
    }

    /// Flattened buffer, re-derived first if anything changed since the last read.
    pub fn buffer(&mut self) -> &GeometryBuffer {
        if self.dirty {
            self.cache = GeometryBuffer::from_vertices(&self.vertices);
            self.dirty = false;
            self.rebuilds += 1;
            log::trace!(
                "geometry rebuilt: {} vertices, {} quads",
                self.cache.count,
                self.quads.len()
            );
        }
        &self.cache
    }

    /// Consumes the builder and returns its up-to-date buffer.
    pub fn into_buffer(mut self) -> GeometryBuffer {
        self.buffer();
        self.cache
    }

    pub fn count(&mut self) -> usize {
        self.buffer().count
    }

    pub fn positions(&mut self) -> &[f32] {
        &self.buffer().positions
    }

    pub fn normals(&mut self) -> &[f32] {
        &self.buffer().normals
    }

    pub fn indices(&mut self) -> &[u32] {
        &self.buffer().indices
    }

    pub fn face_indices(&mut self) -> &[u32] {
        &self.buffer().face_indices
    }

    pub fn uvs(&mut self) -> &[f32] {
        &self.buffer().uvs
    }

    pub fn colors(&mut self) -> &[f32] {
        &self.buffer().colors
    }
}
