//! Board-agnostic core logic for movement watch faces
//!
//! This crate contains everything a watch face needs that does not depend
//! on a specific board:
//!
//! - Structured date-time with change-granularity comparison
//! - Events delivered by the movement event loop
//! - Global settings snapshot (and its persisted form)
//! - Capability traits for the clock, segment display and host movement
//! - The watch face lifecycle trait

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod events;
pub mod face;
pub mod time;
pub mod traits;

pub use config::Settings;
pub use events::{Event, EventInfo};
pub use face::WatchFace;
pub use time::{DateTime, Granularity, Weekday};
pub use traits::{Clock, Host, Indicator, SegmentDisplay, Watch};
