//! Rendering module
//!
//! The render pass paints through the [`Surface`] trait: a browser canvas on
//! wasm (see `platform::canvas`) or a tessellated mesh elsewhere.

pub mod atlas;
pub mod mesh;
pub mod particles;
pub mod pass;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use atlas::SpriteAtlas;
pub use mesh::MeshSurface;
pub use particles::MatchBurst;
pub use pass::render;
pub use surface::{Paint, Rect, Surface};
pub use vertex::Vertex;
