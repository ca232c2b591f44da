//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to the runtime:
//! one `FrameClock` per render loop, ticked once per presented frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
