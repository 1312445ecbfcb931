//! Simple clock face without hourly chime
//!
//! Shows weekday, day, hours, minutes and (optionally) seconds, matching
//! the stock behaviour of the watch.
//!
//! - ALARM press: toggle seconds display (and the low energy tick blink)
//! - ALARM long press: put the watch to sleep
//!
//! Redrawing the whole LCD every second is wasteful, so each tick only
//! rewrites the digits that can have changed since the previous render.

use core::fmt::Write;

use heapless::String;
use movement_core::traits::{Indicator, Watch, TICK_ANIMATION_PERIOD_MS};
use movement_core::{DateTime, Event, EventInfo, Granularity, Settings, WatchFace};

/// First position of the minute digits
const MINUTE_POS: u8 = 6;

/// First position of the seconds digits
const SECONDS_POS: u8 = 8;

/// Longest text this face writes (the full ten positions)
const LINE_LEN: usize = 10;

/// What the next render has to rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    /// The two seconds digits only
    Seconds,
    /// Minutes and seconds digits
    MinutesSeconds,
    /// Minutes digits, seconds blanked
    Minutes,
    /// Everything: weekday, day, hour, minute, seconds
    Full,
}

/// Pick the cheapest redraw that covers what changed
///
/// Checks run from cheapest to most expensive and the first match wins.
/// Seconds are only drawn when the user wants them and the watch is not
/// in low energy mode.
pub fn plan_redraw(granularity: Granularity, low_energy: bool, show_seconds: bool) -> Redraw {
    let seconds_live = show_seconds && !low_energy;

    if granularity == Granularity::Second && seconds_live {
        Redraw::Seconds
    } else if granularity <= Granularity::Minute && seconds_live {
        Redraw::MinutesSeconds
    } else if granularity <= Granularity::Minute {
        Redraw::Minutes
    } else {
        Redraw::Full
    }
}

/// Face state, kept for the life of the watch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    /// Last rendered time; `None` forces a full redraw
    previous: Option<DateTime>,
    /// User wants seconds shown
    show_seconds: bool,
    /// Alarm setting as last drawn on the bell indicator
    alarm_enabled: bool,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            previous: None,
            show_seconds: true,
            alarm_enabled: false,
        }
    }
}

impl ClockState {
    /// Last rendered time
    pub fn previous(&self) -> Option<DateTime> {
        self.previous
    }

    /// Whether seconds are shown
    pub fn show_seconds(&self) -> bool {
        self.show_seconds
    }

    /// Alarm setting as last drawn
    pub fn alarm_enabled(&self) -> bool {
        self.alarm_enabled
    }
}

/// Simple clock face without hourly chime
#[derive(Debug, Clone, Default)]
pub struct SimpleClockNoSecsFace {
    state: ClockState,
}

impl SimpleClockNoSecsFace {
    /// Create the face with seconds shown
    pub fn new() -> Self {
        Self::default()
    }

    /// Current face state
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    fn update_alarm_indicator<W: Watch>(&mut self, alarm_enabled: bool, watch: &mut W) {
        self.state.alarm_enabled = alarm_enabled;
        watch.set_indicator_state(Indicator::Bell, alarm_enabled);
    }

    /// Redraw after an activate, tick or low energy update
    fn render<W: Watch>(&mut self, low_energy: bool, settings: &Settings, watch: &mut W) {
        let now = watch.now();
        let granularity = now.changed_since(self.state.previous);
        self.state.previous = Some(now);

        let redraw = plan_redraw(granularity, low_energy, self.state.show_seconds);
        let mut buf: String<LINE_LEN> = String::new();

        let position = match redraw {
            Redraw::Seconds => {
                // Nothing above the seconds changed; leave every other segment alone
                watch.display_char(digit(now.second() / 10), SECONDS_POS);
                watch.display_char(digit(now.second() % 10), SECONDS_POS + 1);
                return;
            }
            Redraw::MinutesSeconds => {
                let _ = write!(buf, "{:02}{:02}", now.minute(), now.second());
                MINUTE_POS
            }
            Redraw::Minutes => {
                let _ = write!(buf, "{:02}  ", now.minute());
                MINUTE_POS
            }
            Redraw::Full => {
                let mut hour = now.hour();
                if !settings.clock_mode_24h {
                    let (hour_12, is_pm) = now.to_12_hour();
                    watch.set_indicator_state(Indicator::Pm, is_pm);
                    hour = hour_12;
                }

                let _ = write!(
                    buf,
                    "{}{:2}{:2}{:02}",
                    now.weekday().abbreviation(),
                    now.day(),
                    hour,
                    now.minute()
                );
                if low_energy || !self.state.show_seconds {
                    let _ = buf.push_str("  ");
                } else {
                    let _ = write!(buf, "{:02}", now.second());
                }

                #[cfg(feature = "defmt")]
                defmt::debug!("Clock full redraw: {}", buf.as_str());
                0
            }
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("Clock redraw {:?} at {}", redraw, position);

        // Only blink the tick while asleep with seconds wanted
        if low_energy && self.state.show_seconds {
            if !watch.is_tick_animation_running() {
                watch.start_tick_animation(TICK_ANIMATION_PERIOD_MS);
            }
        } else if watch.is_tick_animation_running() {
            watch.stop_tick_animation();
        }

        watch.display_string(&buf, position);

        if self.state.alarm_enabled != settings.alarm_enabled {
            self.update_alarm_indicator(settings.alarm_enabled, watch);
        }

        // Signal icon shows the watch is asleep
        watch.set_indicator_state(Indicator::Signal, low_energy);
    }

    fn toggle_seconds<W: Watch>(&mut self, watch: &mut W) {
        self.state.show_seconds = !self.state.show_seconds;

        #[cfg(feature = "defmt")]
        defmt::debug!("Clock seconds display: {}", self.state.show_seconds);

        let now = watch.now();
        let mut buf: String<2> = String::new();
        if self.state.show_seconds {
            let _ = write!(buf, "{:02}", now.second());
        } else {
            let _ = buf.push_str("  ");
        }
        watch.display_string(&buf, SECONDS_POS);
    }
}

impl<W: Watch> WatchFace<W> for SimpleClockNoSecsFace {
    fn activate(&mut self, settings: &Settings, watch: &mut W) {
        if watch.is_tick_animation_running() {
            watch.stop_tick_animation();
        }
        if settings.clock_mode_24h {
            watch.set_indicator(Indicator::H24);
        }

        // Show the bell if there is an armed alarm
        self.update_alarm_indicator(settings.alarm_enabled, watch);
        watch.set_colon();

        // No previous render, so the first tick redraws every field
        self.state.previous = None;
    }

    fn handle_event(&mut self, event: EventInfo, settings: &Settings, watch: &mut W) -> bool {
        match event.event {
            e if e.is_render() => {
                self.render(event.event.is_low_energy(), settings, watch);
                true
            }
            Event::AlarmButtonUp => {
                self.toggle_seconds(watch);
                true
            }
            Event::AlarmLongUp => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Clock requesting sleep");
                watch.force_sleep();
                true
            }
            _ => watch.default_loop_handler(event, settings),
        }
    }
}

/// ASCII digit for a value 0-9
fn digit(value: u8) -> char {
    char::from(b'0' + value % 10)
}
