//! Configuration types
//!
//! Global movement settings, handed to faces as a read-only snapshot.
//! Persistence is the host's job; the `serde` feature provides the
//! postcard record format it stores.

pub mod settings;

pub use settings::*;
