//! S6D05A panel driver
//!
//! Implements the panel on top of the traits in `s6d05a-hal` and the types
//! in `s6d05a-core`:
//!
//! - Bit-banged 9-bit serial interface ([`signal`])
//! - Command transmitter and sequence player ([`SerialInterface::send`],
//!   [`SerialInterface::play`])
//! - Power sequencer ([`power`])
//! - Brightness controller ([`Panel::update`])
//! - Attach/detach/suspend/resume ([`Panel::attach`], [`Panel::detach`])
//! - Event dispatch and a lock-holding wrapper ([`events`], [`shared`])
//! - Regulators: power-domain gating and GPIO load switches
//!
//! # Example
//!
//! ```ignore
//! let mut panel = Panel::attach(&config, &mut lines, &mut supplies, delay)?;
//! panel.update(128, false, false)?;
//! panel.suspend()?;
//! panel.resume()?;
//! panel.detach(&mut lines, &mut supplies)?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod brightness;
pub mod error;
pub mod events;
pub mod gpio_regulator;
mod lifecycle;
pub mod panel;
pub mod power;
pub mod power_domain;
pub mod rail;
pub mod shared;
pub mod signal;
mod transmitter;

#[cfg(test)]
mod mock;

pub use error::{AttachError, LineRole, PanelError};
pub use events::PanelEventChannel;
pub use gpio_regulator::GpioRegulator;
pub use panel::Panel;
pub use power_domain::{DomainConfig, PowerDomain};
pub use rail::{Rail, RailKind};
pub use shared::SharedPanel;
pub use signal::SerialInterface;
