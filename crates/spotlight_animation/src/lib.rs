//! Spotlight Animation System
//!
//! Host-agnostic animation primitives for the marquee.
//!
//! # Features
//!
//! - **AnimationState**: integer offset that bounces between two bounds
//! - **IntervalTimer**: fixed-interval ticks driven by elapsed time, with a
//!   synchronous stop
//! - **FrameScheduler**: real-time frame pacing for hosts that own a loop

pub mod scheduler;
pub mod state;
pub mod timer;

pub use scheduler::FrameScheduler;
pub use state::AnimationState;
pub use timer::{IntervalTimer, TimerState};
