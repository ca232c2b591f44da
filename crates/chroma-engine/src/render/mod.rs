//! GPU rendering subsystem.
//!
//! The quad renderer owns its GPU resources (pipeline, buffers) and issues
//! wgpu commands against a frame's encoder.
//!
//! Convention:
//! - quad geometry is already in clip space; no viewport transform is applied.
//! - the fill color arrives as a per-frame uniform.

mod ctx;
mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::QuadRenderer;
