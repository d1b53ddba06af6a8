//! S6D05A Hardware Abstraction Layer
//!
//! This crate defines the collaborator traits the panel driver consumes.
//! Board support code implements them; the driver never reaches past them
//! into chip registers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  s6d05a-driver (sequencing, protocol)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  s6d05a-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  board GPIOs  │       │ PMIC / power  │
//! │  (embedded-   │       │   domains     │
//! │     hal)      │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::LineController`] - Exclusive ownership of output lines
//! - [`regulator::RegulatorProvider`], [`regulator::Regulator`] - Power rails
//! - [`power_domain::PowerDomainRegs`] - SoC power-domain gating registers
//!
//! [`pool::LinePool`] and [`pool::SupplyTable`] implement the ownership
//! traits for boards with a fixed set of pins and rails.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pool;
pub mod power_domain;
pub mod regulator;

// Re-export key traits at crate root for convenience
pub use gpio::{LineController, LineError, LineId};
pub use pool::{LinePool, PooledLine, SupplyTable, TableSupply};
pub use power_domain::PowerDomainRegs;
pub use regulator::{Regulator, RegulatorError, RegulatorProvider};
