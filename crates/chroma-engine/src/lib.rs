//! Chroma engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo binary.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod anim;
pub mod logging;
pub mod paint;
pub mod render;
