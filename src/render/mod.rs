//! Rendering sink
//!
//! Backend-agnostic: builds a snapshot and a list of colored triangles. The
//! host owns the window and the GPU.

pub mod frame;
pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use frame::build_frame;
pub use snapshot::{Dot, GhostSprite, RenderSnapshot};
pub use vertex::Vertex;
