//! Segment display model for movement watch faces
//!
//! This crate provides [`SegmentBuffer`], a memory-backed implementation of
//! [`SegmentDisplay`](movement_core::SegmentDisplay). Hosts render it to
//! whatever LCD or simulator window they drive; tests use its write
//! tracking to check exactly which positions a face redrew.

#![no_std]
#![deny(unsafe_code)]

pub mod segment;

// Re-export key types
pub use segment::{positions_mask, SegmentBuffer};
