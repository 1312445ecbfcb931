//! Segment buffer
//!
//! Holds the character positions, icon segments, colon and tick animation
//! state of a ten-position segment LCD.

use movement_core::traits::{Indicator, SegmentDisplay, DISPLAY_POSITIONS};

/// Mask covering `len` positions starting at `start`
pub const fn positions_mask(start: u8, len: u8) -> u16 {
    let all = (1u16 << DISPLAY_POSITIONS) - 1;
    if start as usize >= DISPLAY_POSITIONS || len == 0 {
        return 0;
    }
    let end = start as u32 + len as u32;
    let upper = if end >= 16 { u16::MAX } else { (1u16 << end) - 1 };
    upper & !((1u16 << start) - 1) & all
}

/// Memory-backed segment display
///
/// Every character write is recorded in a write mask so callers can see
/// which positions were touched since the last [`take_writes`].
///
/// [`take_writes`]: SegmentBuffer::take_writes
#[derive(Clone, Debug)]
pub struct SegmentBuffer {
    /// Character positions (ASCII)
    chars: [u8; DISPLAY_POSITIONS],
    /// Indicator mask, see [`Indicator::mask`]
    indicators: u8,
    /// Colon segment
    colon: bool,
    /// Tick animation period while running
    tick_animation_ms: Option<u32>,
    /// Positions written since the last `take_writes`
    writes: u16,
    /// Whether anything changed since the last `mark_clean`
    dirty: bool,
}

impl Default for SegmentBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentBuffer {
    /// Create a blank display
    pub const fn new() -> Self {
        Self {
            chars: [b' '; DISPLAY_POSITIONS],
            indicators: 0,
            colon: false,
            tick_animation_ms: None,
            writes: 0,
            dirty: true,
        }
    }

    /// Blank every position and segment
    pub fn clear(&mut self) {
        self.chars = [b' '; DISPLAY_POSITIONS];
        self.indicators = 0;
        self.colon = false;
        self.tick_animation_ms = None;
        self.dirty = true;
    }

    /// Full display text, one character per position
    pub fn text(&self) -> &str {
        // Only ASCII is ever stored
        core::str::from_utf8(&self.chars).unwrap_or("")
    }

    /// Character at a position
    pub fn char_at(&self, position: u8) -> Option<char> {
        self.chars.get(position as usize).map(|&b| b as char)
    }

    /// Text of `len` positions starting at `start`
    pub fn slice(&self, start: u8, len: u8) -> &str {
        let start = (start as usize).min(DISPLAY_POSITIONS);
        let end = (start + len as usize).min(DISPLAY_POSITIONS);
        core::str::from_utf8(&self.chars[start..end]).unwrap_or("")
    }

    /// Check whether an indicator is lit
    pub fn indicator(&self, indicator: Indicator) -> bool {
        self.indicators & indicator.mask() != 0
    }

    /// Raw indicator mask
    pub fn indicators(&self) -> u8 {
        self.indicators
    }

    /// Check whether the colon is lit
    pub fn colon(&self) -> bool {
        self.colon
    }

    /// Tick animation period, if running
    pub fn tick_animation_period(&self) -> Option<u32> {
        self.tick_animation_ms
    }

    /// Positions written since the last call, as a bit mask
    pub fn take_writes(&mut self) -> u16 {
        core::mem::take(&mut self.writes)
    }

    /// Positions written since the last `take_writes`, without clearing
    pub fn writes(&self) -> u16 {
        self.writes
    }

    /// Check if the display needs to be pushed to hardware
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the display as clean (after pushing to hardware)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn put(&mut self, c: char, position: usize) {
        if position >= DISPLAY_POSITIONS {
            return;
        }
        // The LCD has no glyphs outside ASCII
        let byte = if c.is_ascii() { c as u8 } else { b' ' };
        self.chars[position] = byte;
        self.writes |= 1 << position;
        self.dirty = true;
    }
}

impl SegmentDisplay for SegmentBuffer {
    fn display_string(&mut self, text: &str, position: u8) {
        for (offset, c) in text.chars().enumerate() {
            let index = position as usize + offset;
            if index >= DISPLAY_POSITIONS {
                break;
            }
            self.put(c, index);
        }
    }

    fn display_char(&mut self, c: char, position: u8) {
        self.put(c, position as usize);
    }

    fn set_indicator(&mut self, indicator: Indicator) {
        self.indicators |= indicator.mask();
        self.dirty = true;
    }

    fn clear_indicator(&mut self, indicator: Indicator) {
        self.indicators &= !indicator.mask();
        self.dirty = true;
    }

    fn set_colon(&mut self) {
        self.colon = true;
        self.dirty = true;
    }

    fn clear_colon(&mut self) {
        self.colon = false;
        self.dirty = true;
    }

    fn start_tick_animation(&mut self, period_ms: u32) {
        self.tick_animation_ms = Some(period_ms);
        self.dirty = true;
    }

    fn stop_tick_animation(&mut self) {
        self.tick_animation_ms = None;
        self.dirty = true;
    }

    fn is_tick_animation_running(&self) -> bool {
        self.tick_animation_ms.is_some()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SegmentBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Segments[{}, indicators={=u8:b}, colon={}]",
            self.text(),
            self.indicators,
            self.colon
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let display = SegmentBuffer::new();
        assert_eq!(display.text(), "          ");
        assert_eq!(display.indicators(), 0);
        assert!(!display.colon());
        assert!(!display.is_tick_animation_running());
        assert!(display.is_dirty());
    }

    #[test]
    fn test_display_string_records_writes() {
        let mut display = SegmentBuffer::new();
        display.display_string("1234", 6);

        assert_eq!(display.slice(6, 4), "1234");
        assert_eq!(display.take_writes(), positions_mask(6, 4));
        assert_eq!(display.take_writes(), 0);
    }

    #[test]
    fn test_display_string_clips_at_end() {
        let mut display = SegmentBuffer::new();
        display.display_string("ABCDEF", 7);

        assert_eq!(display.text(), "       ABC");
        assert_eq!(display.take_writes(), positions_mask(7, 3));
    }

    #[test]
    fn test_display_char() {
        let mut display = SegmentBuffer::new();
        display.display_char('5', 9);
        display.display_char('9', 10);

        assert_eq!(display.char_at(9), Some('5'));
        assert_eq!(display.char_at(10), None);
        assert_eq!(display.take_writes(), 1 << 9);
    }

    #[test]
    fn test_non_ascii_is_blank() {
        let mut display = SegmentBuffer::new();
        display.display_string("a°b", 0);
        assert_eq!(display.slice(0, 3), "a b");
    }

    #[test]
    fn test_indicators() {
        let mut display = SegmentBuffer::new();
        display.set_indicator(Indicator::Bell);
        display.set_indicator(Indicator::Pm);
        assert!(display.indicator(Indicator::Bell));
        assert!(display.indicator(Indicator::Pm));
        assert!(!display.indicator(Indicator::Signal));

        display.clear_indicator(Indicator::Bell);
        assert!(!display.indicator(Indicator::Bell));

        display.set_indicator_state(Indicator::Signal, true);
        assert!(display.indicator(Indicator::Signal));
        display.set_indicator_state(Indicator::Signal, false);
        assert!(!display.indicator(Indicator::Signal));
    }

    #[test]
    fn test_indicator_changes_are_not_writes() {
        let mut display = SegmentBuffer::new();
        display.set_indicator(Indicator::H24);
        display.set_colon();
        assert_eq!(display.take_writes(), 0);
    }

    #[test]
    fn test_tick_animation() {
        let mut display = SegmentBuffer::new();
        display.start_tick_animation(500);
        assert!(display.is_tick_animation_running());
        assert_eq!(display.tick_animation_period(), Some(500));

        display.stop_tick_animation();
        assert!(!display.is_tick_animation_running());
    }

    #[test]
    fn test_dirty_tracking() {
        let mut display = SegmentBuffer::new();
        display.mark_clean();
        assert!(!display.is_dirty());

        display.set_colon();
        assert!(display.is_dirty());
        display.mark_clean();

        display.display_char('1', 0);
        assert!(display.is_dirty());
    }

    #[test]
    fn test_clear() {
        let mut display = SegmentBuffer::new();
        display.display_string("SA 1 12000", 0);
        display.set_indicator(Indicator::Pm);
        display.set_colon();
        display.start_tick_animation(500);

        display.clear();
        assert_eq!(display.text(), "          ");
        assert_eq!(display.indicators(), 0);
        assert!(!display.colon());
        assert!(!display.is_tick_animation_running());
    }

    #[test]
    fn test_positions_mask() {
        assert_eq!(positions_mask(0, 10), 0b11_1111_1111);
        assert_eq!(positions_mask(8, 2), 0b11_0000_0000);
        assert_eq!(positions_mask(6, 4), 0b11_1100_0000);
        assert_eq!(positions_mask(8, 5), 0b11_0000_0000);
        assert_eq!(positions_mask(10, 1), 0);
        assert_eq!(positions_mask(3, 0), 0);
    }
}
