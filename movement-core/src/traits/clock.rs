//! Real-time clock capability

use crate::time::DateTime;

/// Source of the current wall-clock time
pub trait Clock {
    /// Read the current date and time
    fn now(&self) -> DateTime;
}
