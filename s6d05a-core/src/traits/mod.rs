//! Traits exposed to the display stack

pub mod backlight;

pub use backlight::{Backlight, BacklightProps, BlankMode, DEFAULT_BRIGHTNESS, MAX_BRIGHTNESS};
