//! Clock faces
//!
//! Faces whose main job is showing the time of day.

pub mod simple_clock_no_secs;

pub use simple_clock_no_secs::{plan_redraw, ClockState, Redraw, SimpleClockNoSecsFace};
