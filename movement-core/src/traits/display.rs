//! Segment LCD capability
//!
//! The display is a row of ten character positions:
//!
//! ```text
//! ┌────┬────┬────┬────┬────┐
//! │ WW │ DD │ hh │ mm │ ss │
//! │ 01 │ 23 │ 45 │ 67 │ 89 │
//! └────┴────┴────┴────┴────┘
//! ```
//!
//! plus a set of fixed icon segments and the colon between hours and
//! minutes.

/// Number of character positions on the display
pub const DISPLAY_POSITIONS: usize = 10;

/// Default blink period for the low energy tick animation
pub const TICK_ANIMATION_PERIOD_MS: u32 = 500;

/// Icon segments independent of the character positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// Signal icon, shown while the watch sleeps
    Signal,
    /// Bell icon, shown while the alarm is armed
    Bell,
    /// Afternoon marker on a 12-hour dial
    Pm,
    /// 24-hour dial marker
    H24,
    /// Lap marker
    Lap,
}

impl Indicator {
    /// All indicators, in segment order
    pub const ALL: [Indicator; 5] = [
        Indicator::Signal,
        Indicator::Bell,
        Indicator::Pm,
        Indicator::H24,
        Indicator::Lap,
    ];

    /// Bit of this indicator in an indicator mask
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Trait for the segment display
///
/// Writes are assumed to succeed; the host guarantees a working display.
pub trait SegmentDisplay {
    /// Draw `text` starting at `position`, one character per position
    ///
    /// Characters past the last position are dropped.
    fn display_string(&mut self, text: &str, position: u8);

    /// Draw a single character at `position`
    ///
    /// Hosts may route this through a cheaper path when only the seconds
    /// digits change.
    fn display_char(&mut self, c: char, position: u8);

    /// Turn an indicator on
    fn set_indicator(&mut self, indicator: Indicator);

    /// Turn an indicator off
    fn clear_indicator(&mut self, indicator: Indicator);

    /// Show the colon between hours and minutes
    fn set_colon(&mut self);

    /// Hide the colon
    fn clear_colon(&mut self);

    /// Start the blinking tick animation
    fn start_tick_animation(&mut self, period_ms: u32);

    /// Stop the tick animation
    fn stop_tick_animation(&mut self);

    /// Check if the tick animation is running
    fn is_tick_animation_running(&self) -> bool;

    /// Set or clear an indicator
    fn set_indicator_state(&mut self, indicator: Indicator, on: bool) {
        if on {
            self.set_indicator(indicator);
        } else {
            self.clear_indicator(indicator);
        }
    }
}
