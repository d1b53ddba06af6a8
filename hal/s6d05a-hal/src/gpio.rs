//! GPIO line ownership
//!
//! The panel driver only drives lines it has claimed. A [`LineController`]
//! hands out exclusive output handles by board line number and takes them
//! back on release. Line handles themselves are plain
//! [`embedded_hal::digital::OutputPin`]s.

use embedded_hal::digital::{OutputPin, PinState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board GPIO line number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct LineId(pub u16);

impl LineId {
    /// Create a line id from its board number
    pub const fn new(number: u16) -> Self {
        Self(number)
    }

    /// Get the board number
    pub const fn number(self) -> u16 {
        self.0
    }
}

/// Errors reported by the line collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line does not exist or is already owned by someone else
    Unavailable,
    /// Line could not be switched to output mode
    Direction,
}

/// Source of exclusively-owned output lines
///
/// Implementations must make a claimed line unavailable to any other
/// claimant until it is released.
pub trait LineController {
    /// Handle for one claimed line
    type Line: OutputPin;

    /// Claim ownership of a line
    ///
    /// `label` identifies the owner for diagnostics.
    fn claim(&mut self, id: LineId, label: &'static str) -> Result<Self::Line, LineError>;

    /// Configure a claimed line as an output driving `initial`
    fn set_direction_output(
        &mut self,
        line: &mut Self::Line,
        initial: PinState,
    ) -> Result<(), LineError>;

    /// Give a claimed line back
    fn release(&mut self, line: Self::Line);

    /// Claim a line and configure it as an output in one step
    ///
    /// If the direction cannot be set the line is released again before
    /// the error is returned.
    fn claim_output(
        &mut self,
        id: LineId,
        label: &'static str,
        initial: PinState,
    ) -> Result<Self::Line, LineError> {
        let mut line = self.claim(id, label)?;
        if let Err(e) = self.set_direction_output(&mut line, initial) {
            self.release(line);
            return Err(e);
        }
        Ok(line)
    }
}
