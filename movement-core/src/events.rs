//! Events delivered to watch faces by the movement event loop

/// Event types, numbered as the movement event loop numbers them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// No event to report
    None,
    /// The face is entering the foreground
    Activate,
    /// Regular tick from the foreground timer
    Tick,
    /// Once-a-minute update while the watch is in low energy mode
    LowEnergyUpdate,
    /// Scheduled background work; the face may not be in the foreground
    BackgroundTask,
    /// The face has been inactive for a while
    Timeout,
    /// Light button pressed, not yet released
    LightButtonDown,
    /// Light button pressed for less than half a second and released
    LightButtonUp,
    /// Light button held for over half a second, not yet released
    LightLongPress,
    /// Light button held for over half a second and released
    LightLongUp,
    /// Mode button pressed, not yet released
    ModeButtonDown,
    /// Mode button pressed for less than half a second and released
    ModeButtonUp,
    /// Mode button held for over half a second, not yet released
    ModeLongPress,
    /// Mode button held for over half a second and released
    ModeLongUp,
    /// Alarm button pressed, not yet released
    AlarmButtonDown,
    /// Alarm button pressed for less than half a second and released
    AlarmButtonUp,
    /// Alarm button held for over half a second, not yet released
    AlarmLongPress,
    /// Alarm button held for over half a second and released
    AlarmLongUp,
}

// Wire format values
const EVENT_NONE: u8 = 0;
const EVENT_ACTIVATE: u8 = 1;
const EVENT_TICK: u8 = 2;
const EVENT_LOW_ENERGY_UPDATE: u8 = 3;
const EVENT_BACKGROUND_TASK: u8 = 4;
const EVENT_TIMEOUT: u8 = 5;
const EVENT_LIGHT_BUTTON_DOWN: u8 = 6;
const EVENT_LIGHT_BUTTON_UP: u8 = 7;
const EVENT_LIGHT_LONG_PRESS: u8 = 8;
const EVENT_LIGHT_LONG_UP: u8 = 9;
const EVENT_MODE_BUTTON_DOWN: u8 = 10;
const EVENT_MODE_BUTTON_UP: u8 = 11;
const EVENT_MODE_LONG_PRESS: u8 = 12;
const EVENT_MODE_LONG_UP: u8 = 13;
const EVENT_ALARM_BUTTON_DOWN: u8 = 14;
const EVENT_ALARM_BUTTON_UP: u8 = 15;
const EVENT_ALARM_LONG_PRESS: u8 = 16;
const EVENT_ALARM_LONG_UP: u8 = 17;

impl Event {
    /// Parse an event from its numeric value
    pub fn from_byte(byte: u8) -> Option<Self> {
        let event = match byte {
            EVENT_NONE => Event::None,
            EVENT_ACTIVATE => Event::Activate,
            EVENT_TICK => Event::Tick,
            EVENT_LOW_ENERGY_UPDATE => Event::LowEnergyUpdate,
            EVENT_BACKGROUND_TASK => Event::BackgroundTask,
            EVENT_TIMEOUT => Event::Timeout,
            EVENT_LIGHT_BUTTON_DOWN => Event::LightButtonDown,
            EVENT_LIGHT_BUTTON_UP => Event::LightButtonUp,
            EVENT_LIGHT_LONG_PRESS => Event::LightLongPress,
            EVENT_LIGHT_LONG_UP => Event::LightLongUp,
            EVENT_MODE_BUTTON_DOWN => Event::ModeButtonDown,
            EVENT_MODE_BUTTON_UP => Event::ModeButtonUp,
            EVENT_MODE_LONG_PRESS => Event::ModeLongPress,
            EVENT_MODE_LONG_UP => Event::ModeLongUp,
            EVENT_ALARM_BUTTON_DOWN => Event::AlarmButtonDown,
            EVENT_ALARM_BUTTON_UP => Event::AlarmButtonUp,
            EVENT_ALARM_LONG_PRESS => Event::AlarmLongPress,
            EVENT_ALARM_LONG_UP => Event::AlarmLongUp,
            _ => return None,
        };
        Some(event)
    }

    /// Convert to numeric value
    pub fn to_byte(self) -> u8 {
        match self {
            Event::None => EVENT_NONE,
            Event::Activate => EVENT_ACTIVATE,
            Event::Tick => EVENT_TICK,
            Event::LowEnergyUpdate => EVENT_LOW_ENERGY_UPDATE,
            Event::BackgroundTask => EVENT_BACKGROUND_TASK,
            Event::Timeout => EVENT_TIMEOUT,
            Event::LightButtonDown => EVENT_LIGHT_BUTTON_DOWN,
            Event::LightButtonUp => EVENT_LIGHT_BUTTON_UP,
            Event::LightLongPress => EVENT_LIGHT_LONG_PRESS,
            Event::LightLongUp => EVENT_LIGHT_LONG_UP,
            Event::ModeButtonDown => EVENT_MODE_BUTTON_DOWN,
            Event::ModeButtonUp => EVENT_MODE_BUTTON_UP,
            Event::ModeLongPress => EVENT_MODE_LONG_PRESS,
            Event::ModeLongUp => EVENT_MODE_LONG_UP,
            Event::AlarmButtonDown => EVENT_ALARM_BUTTON_DOWN,
            Event::AlarmButtonUp => EVENT_ALARM_BUTTON_UP,
            Event::AlarmLongPress => EVENT_ALARM_LONG_PRESS,
            Event::AlarmLongUp => EVENT_ALARM_LONG_UP,
        }
    }

    /// Returns true for any button event
    pub fn is_button(&self) -> bool {
        self.to_byte() >= EVENT_LIGHT_BUTTON_DOWN
    }

    /// Returns true for events after which a foreground face redraws the time
    pub fn is_render(&self) -> bool {
        matches!(
            self,
            Event::Activate | Event::Tick | Event::LowEnergyUpdate
        )
    }

    /// Returns true for the low energy mode update
    pub fn is_low_energy(&self) -> bool {
        matches!(self, Event::LowEnergyUpdate)
    }
}

/// An event together with the tick subsecond it was raised on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventInfo {
    /// What happened
    pub event: Event,
    /// Subsecond of the tick counter when the event fired
    pub subsecond: u8,
}

impl EventInfo {
    /// Wrap an event raised on the whole second
    pub const fn new(event: Event) -> Self {
        Self {
            event,
            subsecond: 0,
        }
    }

    /// Wrap an event raised on a given subsecond
    pub const fn at(event: Event, subsecond: u8) -> Self {
        Self { event, subsecond }
    }
}

impl From<Event> for EventInfo {
    fn from(event: Event) -> Self {
        Self::new(event)
    }
}
