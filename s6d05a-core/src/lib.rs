//! Board-agnostic core types for the S6D05A panel driver
//!
//! This crate contains everything that does not touch hardware:
//!
//! - 9-bit word and command framing
//! - Opcodes and the built-in power sequences
//! - Panel configuration
//! - Power state machine and panel events
//! - Backlight properties and trait

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod opcode;
pub mod sequence;
pub mod state;
pub mod traits;

pub use command::{Command, CommandError, Word, MAX_PARAMETERS};
pub use sequence::{CommandSequence, SequenceBuf, POWER_OFF_SEQUENCE, POWER_ON_SEQUENCE};
