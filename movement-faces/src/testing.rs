//! Test watch: a segment buffer, a settable clock and a recording host

use movement_core::traits::{Clock, Host, Indicator, SegmentDisplay};
use movement_core::{DateTime, EventInfo, Settings};
use movement_display::SegmentBuffer;

pub struct TestWatch {
    pub display: SegmentBuffer,
    pub now: DateTime,
    pub sleep_requests: u32,
    pub default_calls: u32,
    pub last_default: Option<EventInfo>,
    /// What the default loop handler reports
    pub default_result: bool,
}

impl TestWatch {
    pub fn new(now: DateTime) -> Self {
        Self {
            display: SegmentBuffer::new(),
            now,
            sleep_requests: 0,
            default_calls: 0,
            last_default: None,
            default_result: true,
        }
    }

    pub fn set_time(&mut self, hour: u8, minute: u8, second: u8) {
        self.now = DateTime::new(
            self.now.year(),
            self.now.month(),
            self.now.day(),
            hour,
            minute,
            second,
        )
        .unwrap();
    }
}

pub fn dt(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> DateTime {
    DateTime::new(year, month, day, hour, minute, second).unwrap()
}

impl Clock for TestWatch {
    fn now(&self) -> DateTime {
        self.now
    }
}

impl Host for TestWatch {
    fn force_sleep(&mut self) {
        self.sleep_requests += 1;
    }

    fn default_loop_handler(&mut self, event: EventInfo, _settings: &Settings) -> bool {
        self.default_calls += 1;
        self.last_default = Some(event);
        self.default_result
    }
}

impl SegmentDisplay for TestWatch {
    fn display_string(&mut self, text: &str, position: u8) {
        self.display.display_string(text, position);
    }

    fn display_char(&mut self, c: char, position: u8) {
        self.display.display_char(c, position);
    }

    fn set_indicator(&mut self, indicator: Indicator) {
        self.display.set_indicator(indicator);
    }

    fn clear_indicator(&mut self, indicator: Indicator) {
        self.display.clear_indicator(indicator);
    }

    fn set_colon(&mut self) {
        self.display.set_colon();
    }

    fn clear_colon(&mut self) {
        self.display.clear_colon();
    }

    fn start_tick_animation(&mut self, period_ms: u32) {
        self.display.start_tick_animation(period_ms);
    }

    fn stop_tick_animation(&mut self) {
        self.display.stop_tick_animation();
    }

    fn is_tick_animation_running(&self) -> bool {
        self.display.is_tick_animation_running()
    }
}
