//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and the
//! application: a per-frame callback and its context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
