use warren_geom::{Color, Vec2, Vec3};

macro_rules! arena_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub struct $name {
            index: u32,
            epoch: u32,
        }

        impl $name {
            #[inline]
            pub(crate) fn new(index: u32, epoch: u32) -> Self {
                Self { index, epoch }
            }

            #[inline]
            pub fn index(self) -> usize {
                self.index as usize
            }

            /// Builder epoch the handle was issued in; `clear` starts a new one.
            #[inline]
            pub fn epoch(self) -> u32 {
                self.epoch
            }
        }
    };
}

arena_handle!(
    /// Vertex in a builder's vertex arena.
    VertexId
);
arena_handle!(
    /// Triangle in a builder's triangle arena.
    TriangleId
);
arena_handle!(
    /// Quad in a builder's quad arena.
    QuadId
);

/// One emitted vertex. Position and normal are fixed once pushed; color and
/// UV may be edited through the builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
    pub color: Color,
    pub face_index: u32,
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            uv: Vec2::ZERO,
            color: Color::WHITE,
            face_index: 0,
        }
    }

    #[inline]
    pub(crate) fn with_face(position: Vec3, normal: Vec3, uv: Vec2, face_index: u32) -> Self {
        Self {
            uv,
            face_index,
            ..Self::new(position, normal)
        }
    }
}

/// Three consecutive vertices in the arena, starting at `first_vertex`.
/// A triangle owns its vertices outright; no other triangle references them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Triangle {
    pub(crate) first_vertex: u32,
}

impl Triangle {
    /// Arena slots of the vertices, in winding order.
    #[inline]
    pub fn vertex_indices(self) -> [usize; 3] {
        let f = self.first_vertex as usize;
        [f, f + 1, f + 2]
    }
}

/// Two consecutive triangles: `abc` then `def`, split along the a–c diagonal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quad {
    pub(crate) first_triangle: u32,
}

impl Quad {
    /// Arena slots of the `abc` and `def` triangles.
    #[inline]
    pub fn triangle_indices(self) -> [usize; 2] {
        let f = self.first_triangle as usize;
        [f, f + 1]
    }
}
