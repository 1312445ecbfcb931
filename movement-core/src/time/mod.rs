//! Calendar time as seen by watch faces
//!
//! The RTC hands faces a structured [`DateTime`]. Faces compare it against
//! the previously rendered value with [`DateTime::changed_since`] to decide
//! how much of the display needs redrawing.

pub mod datetime;
pub mod weekday;

pub use datetime::{DateTime, Granularity};
pub use weekday::Weekday;
