//! Host movement services

use crate::config::Settings;
use crate::events::EventInfo;

/// Services provided by the movement that hosts the faces
pub trait Host {
    /// Put the watch into its lowest power sleep mode right away
    fn force_sleep(&mut self);

    /// Run the movement's default handling for an event the face ignores
    ///
    /// Returns whether the event was consumed.
    fn default_loop_handler(&mut self, event: EventInfo, settings: &Settings) -> bool;
}
