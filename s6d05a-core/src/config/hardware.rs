//! Panel hardware configuration
//!
//! Line numbers for the four control signals, optional regulator supply
//! names and optional replacement power sequences.

use core::fmt;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use s6d05a_hal::LineId;

use crate::command::Command;
use crate::sequence::{CommandSequence, SequenceBuf, MAX_SEQUENCE_LEN};

/// Maximum length of a regulator supply name
pub const MAX_SUPPLY_NAME_LEN: usize = 16;

/// Supply name of the panel analog rail on the reference board
pub const DEFAULT_VCI_SUPPLY: &str = "lcd_vci";

/// Supply name of the panel I/O rail on the reference board
pub const DEFAULT_VDD3_SUPPLY: &str = "lcd_vdd3";

/// Regulator supply name
pub type SupplyName = String<MAX_SUPPLY_NAME_LEN>;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The same line is assigned to more than one signal
    DuplicateLine(LineId),
    /// Supply name does not fit in [`MAX_SUPPLY_NAME_LEN`] bytes
    NameTooLong,
    /// Sequence does not fit in [`MAX_SEQUENCE_LEN`] commands
    SequenceTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DuplicateLine(id) => {
                write!(f, "line {} is assigned to more than one signal", id.number())
            }
            ConfigError::NameTooLong => {
                write!(f, "supply name longer than {} bytes", MAX_SUPPLY_NAME_LEN)
            }
            ConfigError::SequenceTooLong => {
                write!(f, "sequence longer than {} commands", MAX_SEQUENCE_LEN)
            }
        }
    }
}

/// Lines driving the panel's serial interface and reset input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelLines {
    /// Reset (active-low)
    pub reset: LineId,
    /// Chip select (active-low)
    pub cs: LineId,
    /// Serial clock
    pub sck: LineId,
    /// Serial data
    pub sda: LineId,
}

impl PanelLines {
    /// Check that every signal has its own line
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ids = [self.reset, self.cs, self.sck, self.sda];
        for (i, id) in ids.iter().enumerate() {
            if ids[i + 1..].contains(id) {
                return Err(ConfigError::DuplicateLine(*id));
            }
        }
        Ok(())
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Control lines
    pub lines: PanelLines,
    /// VCI (analog) supply name, `None` if the board has no switchable rail
    #[cfg_attr(feature = "serde", serde(default))]
    pub vci_supply: Option<SupplyName>,
    /// VDD3 (I/O) supply name, `None` if the board has no switchable rail
    #[cfg_attr(feature = "serde", serde(default))]
    pub vdd3_supply: Option<SupplyName>,
    /// Replacement power-on sequence
    #[cfg_attr(feature = "serde", serde(default))]
    pub power_on: Option<SequenceBuf>,
    /// Replacement power-off sequence
    #[cfg_attr(feature = "serde", serde(default))]
    pub power_off: Option<SequenceBuf>,
}

impl PanelConfig {
    /// Create a config with the reference board supply names and built-in sequences
    pub fn new(lines: PanelLines) -> Self {
        Self {
            lines,
            vci_supply: supply_name(DEFAULT_VCI_SUPPLY).ok(),
            vdd3_supply: supply_name(DEFAULT_VDD3_SUPPLY).ok(),
            power_on: None,
            power_off: None,
        }
    }

    /// Set or clear the VCI supply name
    pub fn with_vci_supply(mut self, name: Option<&str>) -> Result<Self, ConfigError> {
        self.vci_supply = name.map(supply_name).transpose()?;
        Ok(self)
    }

    /// Set or clear the VDD3 supply name
    pub fn with_vdd3_supply(mut self, name: Option<&str>) -> Result<Self, ConfigError> {
        self.vdd3_supply = name.map(supply_name).transpose()?;
        Ok(self)
    }

    /// Replace the power-on sequence
    pub fn with_power_on_sequence(mut self, commands: &[Command]) -> Result<Self, ConfigError> {
        self.power_on = Some(sequence_buf(commands)?);
        Ok(self)
    }

    /// Replace the power-off sequence
    pub fn with_power_off_sequence(mut self, commands: &[Command]) -> Result<Self, ConfigError> {
        self.power_off = Some(sequence_buf(commands)?);
        Ok(self)
    }

    /// Power-on sequence to play, falling back to the built-in table
    pub fn power_on_sequence(&self) -> CommandSequence {
        match &self.power_on {
            Some(buf) => CommandSequence::Custom(buf.clone()),
            None => CommandSequence::power_on(),
        }
    }

    /// Power-off sequence to play, falling back to the built-in table
    pub fn power_off_sequence(&self) -> CommandSequence {
        match &self.power_off {
            Some(buf) => CommandSequence::Custom(buf.clone()),
            None => CommandSequence::power_off(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lines.validate()
    }
}

fn supply_name(name: &str) -> Result<SupplyName, ConfigError> {
    let mut s = SupplyName::new();
    s.push_str(name).map_err(|_| ConfigError::NameTooLong)?;
    Ok(s)
}

fn sequence_buf(commands: &[Command]) -> Result<SequenceBuf, ConfigError> {
    SequenceBuf::from_slice(commands).map_err(|_| ConfigError::SequenceTooLong)
}
