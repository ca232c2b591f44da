//! Per-frame scalar animation.
//!
//! Provides the bounce channel driving the demo's uniform color, kept in the
//! engine so it can be unit-tested without a window or GPU.

mod bounce;

pub use bounce::BounceChannel;
