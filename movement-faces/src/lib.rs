//! Watch face implementations
//!
//! This crate provides concrete implementations of the
//! [`WatchFace`](movement_core::WatchFace) trait defined in movement-core:
//!
//! - Clock faces (simple clock without hourly chime)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod clock;

#[cfg(test)]
pub(crate) mod testing;

pub use clock::SimpleClockNoSecsFace;
