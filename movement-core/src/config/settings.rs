//! Global movement settings
//!
//! These mirror the settings word the movement keeps in a backup register.
//! Faces only ever read them; changes go through the host.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current settings record version
pub const SETTINGS_VERSION: u8 = 1;

/// Upper bound on the size of a serialized settings record
pub const MAX_SETTINGS_SIZE: usize = 32;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Record version mismatch
    VersionMismatch,
}

/// Snapshot of the global settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Beep on button presses
    pub button_should_sound: bool,
    /// Inactivity timeout before returning to the first face (0-3)
    pub timeout_interval: u8,
    /// Apply the inactivity timeout on every face
    pub timeout_always: bool,
    /// Inactivity before entering low energy mode (0-7, 0 = never)
    pub low_energy_interval: u8,
    /// Backlight duration (0-3)
    pub led_duration: u8,
    /// Backlight red level (0-15)
    pub led_red: u8,
    /// Backlight green level (0-15)
    pub led_green: u8,
    /// Index into the host's time zone table
    pub time_zone: u8,
    /// Show time on a 24-hour dial
    pub clock_mode_24h: bool,
    /// Show imperial units where a face has a choice
    pub use_imperial_units: bool,
    /// The daily alarm is armed
    pub alarm_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            button_should_sound: true,
            timeout_interval: 1,
            timeout_always: false,
            low_energy_interval: 1,
            led_duration: 1,
            led_red: 0,
            led_green: 15,
            time_zone: 0,
            clock_mode_24h: false,
            use_imperial_units: false,
            alarm_enabled: false,
        }
    }
}

impl Settings {
    /// Same settings with the 24-hour flag replaced
    pub const fn with_24h(mut self, enabled: bool) -> Self {
        self.clock_mode_24h = enabled;
        self
    }

    /// Same settings with the alarm flag replaced
    pub const fn with_alarm(mut self, enabled: bool) -> Self {
        self.alarm_enabled = enabled;
        self
    }
}

/// Settings as written to storage, tagged with the layout version
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub version: u8,
    pub settings: Settings,
}

impl Settings {
    /// Check every field fits the width it has in the settings word
    pub fn is_valid(&self) -> bool {
        self.timeout_interval <= 3
            && self.low_energy_interval <= 7
            && self.led_duration <= 3
            && self.led_red <= 15
            && self.led_green <= 15
    }
}

#[cfg(feature = "serde")]
impl Settings {
    /// Serialize into `buf` as a versioned postcard record
    ///
    /// Returns the used part of the buffer.
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], SettingsError> {
        let record = SettingsRecord {
            version: SETTINGS_VERSION,
            settings: *self,
        };
        postcard::to_slice(&record, buf).map_err(|_| SettingsError::Serialize)
    }

    /// Deserialize a versioned postcard record
    ///
    /// The version byte is checked before the body is decoded, so records
    /// written by a different layout are rejected cleanly. Fields wider
    /// than the settings word allows are rejected as corrupt.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SettingsError> {
        let (version, _) =
            postcard::take_from_bytes::<u8>(bytes).map_err(|_| SettingsError::Deserialize)?;

        if version != SETTINGS_VERSION {
            return Err(SettingsError::VersionMismatch);
        }

        let record: SettingsRecord =
            postcard::from_bytes(bytes).map_err(|_| SettingsError::Deserialize)?;
        if !record.settings.is_valid() {
            return Err(SettingsError::Deserialize);
        }

        Ok(record.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.clock_mode_24h);
        assert!(!settings.alarm_enabled);
        assert!(settings.button_should_sound);
        assert_eq!(settings.led_green, 15);
    }

    #[test]
    fn test_builders() {
        let settings = Settings::default().with_24h(true).with_alarm(true);
        assert!(settings.clock_mode_24h);
        assert!(settings.alarm_enabled);
        assert_eq!(settings.with_24h(false).led_green, 15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_survives_storage() {
        let settings = Settings::default().with_24h(true).with_alarm(true);
        let mut buf = [0u8; MAX_SETTINGS_SIZE];
        let used = settings.to_slice(&mut buf).unwrap().len();

        assert_eq!(buf[0], SETTINGS_VERSION);
        assert_eq!(Settings::from_bytes(&buf[..used]).unwrap(), settings);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rejects_other_version() {
        let mut buf = [0u8; MAX_SETTINGS_SIZE];
        let used = Settings::default().to_slice(&mut buf).unwrap().len();
        buf[0] = SETTINGS_VERSION + 1;

        assert_eq!(
            Settings::from_bytes(&buf[..used]),
            Err(SettingsError::VersionMismatch)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rejects_truncated_record() {
        let mut buf = [0u8; MAX_SETTINGS_SIZE];
        let used = Settings::default().to_slice(&mut buf).unwrap().len();

        assert_eq!(
            Settings::from_bytes(&buf[..used - 1]),
            Err(SettingsError::Deserialize)
        );
        assert_eq!(Settings::from_bytes(&[]), Err(SettingsError::Deserialize));
    }

    #[test]
    fn test_field_widths() {
        assert!(Settings::default().is_valid());

        let mut settings = Settings::default();
        settings.low_energy_interval = 7;
        settings.led_red = 15;
        assert!(settings.is_valid());

        settings.low_energy_interval = 8;
        assert!(!settings.is_valid());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rejects_out_of_range_fields() {
        let mut buf = [0u8; MAX_SETTINGS_SIZE];

        let mut settings = Settings::default();
        settings.timeout_interval = 4;
        let used = settings.to_slice(&mut buf).unwrap().len();
        assert_eq!(
            Settings::from_bytes(&buf[..used]),
            Err(SettingsError::Deserialize)
        );

        let mut settings = Settings::default();
        settings.led_green = 16;
        let used = settings.to_slice(&mut buf).unwrap().len();
        assert_eq!(
            Settings::from_bytes(&buf[..used]),
            Err(SettingsError::Deserialize)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_layout() {
        let record = SettingsRecord {
            version: SETTINGS_VERSION,
            settings: Settings::default().with_alarm(true),
        };
        let mut direct = [0u8; MAX_SETTINGS_SIZE];
        let mut via_settings = [0u8; MAX_SETTINGS_SIZE];

        let a = postcard::to_slice(&record, &mut direct).unwrap().len();
        let b = record.settings.to_slice(&mut via_settings).unwrap().len();
        assert_eq!(direct[..a], via_settings[..b]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_small_buffer() {
        let mut buf = [0u8; 2];
        assert_eq!(
            Settings::default().to_slice(&mut buf),
            Err(SettingsError::Serialize)
        );
    }
}
