//! Power-on and power-off command sequences
//!
//! Sequences are played strictly in order with no retry. The built-in tables
//! bring up the reference panel; boards may replace either one through
//! [`PanelConfig`](crate::config::PanelConfig).

use heapless::Vec;

use crate::command::Command;
use crate::opcode::*;

/// Maximum number of commands in a configured sequence
pub const MAX_SEQUENCE_LEN: usize = 32;

/// Storage for a configured sequence
pub type SequenceBuf = Vec<Command, MAX_SEQUENCE_LEN>;

/// Built-in power-on sequence
///
/// Wakes the controller, ramps the internal supplies in steps, loads gamma
/// tables and enables the display.
pub static POWER_ON_SEQUENCE: [Command; 27] = [
    Command::new(PWRCTL, &[0x00, 0x00, 0x2A, 0x00, 0x00, 0x33, 0x29, 0x29, 0x00], 0),
    Command::new(SLPOUT, &[], 15),
    Command::new(
        DISCTL,
        &[0x16, 0x16, 0x0F, 0x0A, 0x05, 0x0A, 0x05, 0x10, 0x00, 0x16, 0x16],
        0,
    ),
    Command::new(PWRCTL, &[0x00, 0x01, 0x2A, 0x00, 0x00, 0x33, 0x29, 0x29, 0x00], 0),
    Command::new(VCMCTL, &[0x1A, 0x1A, 0x18, 0x18, 0x00], 0),
    Command::new(SRCCTL, &[0x00, 0x00, 0x0A, 0x01, 0x01, 0x1D], 0),
    Command::new(GATECTL, &[0x44, 0x3B, 0x00], 15),
    // Supply ramp
    Command::new(PWRCTL, &[0x00, 0x03, 0x2A, 0x00, 0x00, 0x33, 0x29, 0x29, 0x00], 15),
    Command::new(PWRCTL, &[0x00, 0x07, 0x2A, 0x00, 0x00, 0x33, 0x29, 0x29, 0x00], 15),
    Command::new(PWRCTL, &[0x00, 0x0F, 0x2A, 0x00, 0x02, 0x33, 0x29, 0x29, 0x00], 15),
    Command::new(PWRCTL, &[0x00, 0x1F, 0x2A, 0x00, 0x02, 0x33, 0x29, 0x29, 0x00], 15),
    Command::new(PWRCTL, &[0x00, 0x3F, 0x2A, 0x00, 0x08, 0x33, 0x29, 0x29, 0x00], 25),
    Command::new(PWRCTL, &[0x00, 0x7F, 0x2A, 0x00, 0x08, 0x33, 0x29, 0x29, 0x00], 35),
    Command::new(MADCTL, &[0x98], 0),
    Command::new(COLMOD, &[0x66], 0),
    Command::new(
        GAMCTL1,
        &[0x00, 0x00, 0x00, 0x14, 0x27, 0x2D, 0x2C, 0x2D, 0x10, 0x11, 0x10, 0x16, 0x04, 0x22, 0x22],
        0,
    ),
    Command::new(
        GAMCTL2,
        &[0x00, 0x00, 0x00, 0x14, 0x27, 0x2D, 0x2C, 0x2D, 0x10, 0x11, 0x10, 0x16, 0x04, 0x22, 0x22],
        0,
    ),
    Command::new(
        GAMCTL3,
        &[0x96, 0x00, 0x00, 0x00, 0x00, 0x15, 0x1E, 0x23, 0x16, 0x0D, 0x07, 0x10, 0x00, 0x81, 0x42],
        0,
    ),
    Command::new(
        GAMCTL4,
        &[0x80, 0x16, 0x00, 0x00, 0x00, 0x15, 0x1E, 0x23, 0x16, 0x0D, 0x07, 0x10, 0x00, 0x81, 0x42],
        0,
    ),
    Command::new(
        GAMCTL5,
        &[0x00, 0x00, 0x34, 0x30, 0x2F, 0x2F, 0x2E, 0x2F, 0x0E, 0x0D, 0x09, 0x0E, 0x00, 0x22, 0x12],
        0,
    ),
    Command::new(
        GAMCTL6,
        &[0x00, 0x00, 0x34, 0x30, 0x2F, 0x2F, 0x2E, 0x2F, 0x0E, 0x0D, 0x09, 0x0E, 0x00, 0x22, 0x12],
        0,
    ),
    Command::new(BCMODE, &[0x01], 0),
    Command::new(MIECTL3, &[0x7C, 0x01], 0),
    // Start dark; the brightness controller sets the real level afterwards
    Command::new(WRDISBV, &[0x00], 0),
    Command::new(DCON, &[0x06], 40),
    Command::new(DCON, &[0x07], 0),
    Command::new(WRCTRLD, &[0x2C], 0),
];

/// Built-in power-off sequence
pub static POWER_OFF_SEQUENCE: [Command; 4] = [
    Command::new(DCON, &[0x06], 40),
    Command::new(DCON, &[0x00], 25),
    Command::new(PWRCTL, &[0x00, 0x00, 0x2A, 0x00, 0x00, 0x33, 0x29, 0x29, 0x00], 0),
    Command::new(SLPIN, &[], 200),
];

/// A power sequence, either a built-in table or one loaded from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSequence {
    /// Static table compiled into the driver
    Builtin(&'static [Command]),
    /// Sequence supplied by board configuration
    Custom(SequenceBuf),
}

impl CommandSequence {
    /// Built-in power-on sequence
    pub const fn power_on() -> Self {
        CommandSequence::Builtin(&POWER_ON_SEQUENCE)
    }

    /// Built-in power-off sequence
    pub const fn power_off() -> Self {
        CommandSequence::Builtin(&POWER_OFF_SEQUENCE)
    }

    /// Commands in playback order
    pub fn as_slice(&self) -> &[Command] {
        match self {
            CommandSequence::Builtin(table) => table,
            CommandSequence::Custom(buf) => buf.as_slice(),
        }
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check if the sequence has no commands
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Sum of all post-command delays in milliseconds
    pub fn total_delay_ms(&self) -> u32 {
        self.as_slice().iter().map(Command::delay_ms).sum()
    }
}
