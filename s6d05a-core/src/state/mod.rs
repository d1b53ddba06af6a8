//! Panel power state
//!
//! The power state machine and the events that feed it.

pub mod events;
pub mod machine;

pub use events::PanelEvent;
pub use machine::{PowerState, Transition};
