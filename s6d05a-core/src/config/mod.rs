//! Configuration types
//!
//! Board-agnostic panel configuration, stored as postcard binary data by
//! the firmware.

pub mod hardware;

pub use hardware::*;
