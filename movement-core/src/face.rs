//! Watch face lifecycle
//!
//! The movement keeps a table of faces and drives the one in the
//! foreground through this trait. Every call runs to completion on the
//! movement's dispatch loop; faces never block.

use crate::config::Settings;
use crate::events::EventInfo;
use crate::traits::Watch;

/// A pluggable display mode
///
/// Face state lives in the implementing type. It is created once when the
/// movement builds its face table and survives until power is lost.
pub trait WatchFace<W: Watch> {
    /// Called at boot and again every time the watch wakes from deep sleep
    ///
    /// `index` is the face's position in the movement's face table.
    fn setup(&mut self, _settings: &Settings, _index: u8) {}

    /// Called when the face comes to the foreground
    fn activate(&mut self, settings: &Settings, watch: &mut W);

    /// Handle one event from the movement event loop
    ///
    /// Returns whether the event was consumed.
    fn handle_event(&mut self, event: EventInfo, settings: &Settings, watch: &mut W) -> bool;

    /// Called when the face leaves the foreground
    fn resign(&mut self, _settings: &Settings, _watch: &mut W) {}

    /// Ask for a [`BackgroundTask`](crate::Event::BackgroundTask) event
    /// on the next top of the minute
    fn wants_background_task(&mut self, _settings: &Settings) -> bool {
        false
    }
}
