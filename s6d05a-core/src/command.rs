//! Command framing for the S6D05A 3-wire serial interface
//!
//! The controller is configured over a write-only serial link that moves
//! one 9-bit word per chip-select frame:
//!
//! ```text
//!  bit:   8     7 6 5 4 3 2 1 0
//!       ┌───┬─────────────────┐
//!       │D/C│      byte       │
//!       └───┴─────────────────┘
//! ```
//!
//! - D/C = 0: the byte is a command opcode
//! - D/C = 1: the byte is a parameter for the preceding opcode
//!
//! A [`Command`] is an opcode, up to [`MAX_PARAMETERS`] parameter bytes and
//! a delay the host must wait after the last parameter has been clocked out.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::opcode;

/// Maximum number of parameter bytes per command
pub const MAX_PARAMETERS: usize = 15;

/// D/C flag marking a parameter word
const DATA_FLAG: u16 = 1 << 8;

/// One 9-bit transfer unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Word(u16);

impl Word {
    /// Number of bits clocked out per word
    pub const BITS: u32 = 9;

    /// Build a command (opcode) word
    pub const fn command(opcode: u8) -> Self {
        Self(opcode as u16)
    }

    /// Build a parameter (data) word
    pub const fn parameter(value: u8) -> Self {
        Self(value as u16 | DATA_FLAG)
    }

    /// Rebuild a word from its raw 9-bit value
    ///
    /// Returns `None` if any bit above bit 8 is set.
    pub const fn from_raw(raw: u16) -> Option<Self> {
        if raw >> Self::BITS != 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Raw 9-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check if this word carries a parameter byte
    pub const fn is_parameter(self) -> bool {
        self.0 & DATA_FLAG != 0
    }

    /// The 8-bit payload (opcode or parameter)
    pub const fn payload(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Bits in transmission order (most significant first)
    pub fn bits(self) -> impl Iterator<Item = bool> {
        (0..Self::BITS).rev().map(move |bit| self.0 & (1 << bit) != 0)
    }
}

/// Errors building a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// More than [`MAX_PARAMETERS`] parameter bytes were given
    TooManyParameters,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::TooManyParameters => {
                write!(f, "command has more than {} parameters", MAX_PARAMETERS)
            }
        }
    }
}

/// A controller command with its parameters and post-delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "CommandRepr", into = "CommandRepr")
)]
pub struct Command {
    opcode: u8,
    param_count: u8,
    params: [u8; MAX_PARAMETERS],
    delay_ms: u32,
}

impl Command {
    /// Create a command from a parameter slice
    ///
    /// Usable in `const`/`static` tables, where an oversized parameter list
    /// fails compilation.
    ///
    /// # Panics
    ///
    /// Panics if `params` holds more than [`MAX_PARAMETERS`] bytes. Use
    /// [`Command::try_new`] for data that is not known at build time.
    pub const fn new(opcode: u8, params: &[u8], delay_ms: u32) -> Self {
        assert!(
            params.len() <= MAX_PARAMETERS,
            "S6D05A commands take at most 15 parameters"
        );

        let mut buf = [0u8; MAX_PARAMETERS];
        let mut i = 0;
        while i < params.len() {
            buf[i] = params[i];
            i += 1;
        }

        Self {
            opcode,
            param_count: params.len() as u8,
            params: buf,
            delay_ms,
        }
    }

    /// Create a command, rejecting oversized parameter lists
    pub fn try_new(opcode: u8, params: &[u8], delay_ms: u32) -> Result<Self, CommandError> {
        if params.len() > MAX_PARAMETERS {
            return Err(CommandError::TooManyParameters);
        }
        Ok(Self::new(opcode, params, delay_ms))
    }

    /// "Write display brightness" with the given level
    pub const fn set_brightness(level: u8) -> Self {
        Self::new(opcode::WRDISBV, &[level], 0)
    }

    /// Command opcode
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Parameter bytes in transmission order
    pub fn params(&self) -> &[u8] {
        &self.params[..self.param_count as usize]
    }

    /// Number of parameter bytes
    pub const fn param_count(&self) -> usize {
        self.param_count as usize
    }

    /// Milliseconds to wait after the command has been sent
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Number of 9-bit words this command occupies on the wire
    pub const fn word_count(&self) -> usize {
        1 + self.param_count as usize
    }

    /// Words in transmission order: opcode first, then each parameter
    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        core::iter::once(Word::command(self.opcode))
            .chain(self.params().iter().map(|&p| Word::parameter(p)))
    }
}

/// Serialized form of a [`Command`]
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct CommandRepr {
    opcode: u8,
    #[serde(default)]
    params: heapless::Vec<u8, MAX_PARAMETERS>,
    #[serde(default)]
    delay_ms: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<CommandRepr> for Command {
    type Error = CommandError;

    fn try_from(repr: CommandRepr) -> Result<Self, Self::Error> {
        Command::try_new(repr.opcode, &repr.params, repr.delay_ms)
    }
}

#[cfg(feature = "serde")]
impl From<Command> for CommandRepr {
    fn from(cmd: Command) -> Self {
        let mut params = heapless::Vec::new();
        // Cannot overflow: both sides hold MAX_PARAMETERS bytes
        let _ = params.extend_from_slice(cmd.params());
        Self {
            opcode: cmd.opcode,
            params,
            delay_ms: cmd.delay_ms,
        }
    }
}
