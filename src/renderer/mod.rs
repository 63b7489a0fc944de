//! wgpu rendering module
//!
//! A frame goes snapshot -> [`scene::compose`] (draw commands) ->
//! [`shapes::tessellate`] (triangles) -> [`RenderState`] (GPU).

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use font::TextSize;
pub use pipeline::RenderState;
pub use scene::{DrawCommand, compose};
pub use vertex::Vertex;
