//! Driver error types

use core::fmt;

use s6d05a_hal::RegulatorError;

use crate::rail::RailKind;

/// The four lines the driver claims, in claim order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineRole {
    Reset,
    ChipSelect,
    Clock,
    Data,
}

impl LineRole {
    /// Owner label passed to the line controller
    pub const fn label(self) -> &'static str {
        match self {
            LineRole::Reset => "s6d05a reset",
            LineRole::ChipSelect => "s6d05a cs",
            LineRole::Clock => "s6d05a sck",
            LineRole::Data => "s6d05a sda",
        }
    }
}

/// A power or brightness change was aborted
///
/// `E` is the error type of the output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<E> {
    /// Writing a control line failed
    Line(E),
    /// A rail refused to switch on
    Regulator(RailKind, RegulatorError),
}

impl<E: fmt::Debug> fmt::Display for PanelError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::Line(e) => write!(f, "control line write failed: {:?}", e),
            PanelError::Regulator(kind, e) => write!(f, "{:?} rail failed: {:?}", kind, e),
        }
    }
}

/// Attaching the driver failed; nothing is left claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttachError<E> {
    /// A control line could not be claimed or configured
    ResourceUnavailable(LineRole),
    /// The initial power-on failed
    PowerOn(PanelError<E>),
}

impl<E: fmt::Debug> fmt::Display for AttachError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachError::ResourceUnavailable(role) => {
                write!(f, "line {} unavailable", role.label())
            }
            AttachError::PowerOn(e) => write!(f, "initial power-on failed: {}", e),
        }
    }
}
