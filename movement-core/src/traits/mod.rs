//! Capability traits
//!
//! These traits define the interface between watch faces and the host
//! movement that owns the hardware.

pub mod clock;
pub mod display;
pub mod host;

pub use clock::Clock;
pub use display::{Indicator, SegmentDisplay, DISPLAY_POSITIONS, TICK_ANIMATION_PERIOD_MS};
pub use host::Host;

/// Everything a face may ask of the watch
///
/// Implemented automatically for any type providing all capabilities.
pub trait Watch: Clock + SegmentDisplay + Host {}

// Blanket implementation for all full-capability hosts
impl<T: Clock + SegmentDisplay + Host> Watch for T {}
