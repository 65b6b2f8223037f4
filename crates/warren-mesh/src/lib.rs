//! Geometry accumulator: builds unindexed triangle soup from quads and
//! flattens it into render-ready buffers on demand.
#![forbid(unsafe_code)]

pub mod arena;
pub mod buffer;
pub mod builder;

pub use arena::{Quad, QuadId, Triangle, TriangleId, Vertex, VertexId};
pub use buffer::GeometryBuffer;
pub use builder::{GeometryBuilder, face_normal};
