//! Optional panel supply rails
//!
//! A board may fit a switchable regulator for either panel supply or tie
//! the supply to an always-on rail. [`Rail::Absent`] makes the second case
//! explicit: switching an absent rail is a successful no-op.

use s6d05a_hal::{Regulator, RegulatorError, RegulatorProvider};

/// Which panel supply a rail feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RailKind {
    /// Analog supply
    Vci,
    /// I/O supply
    Vdd3,
}

/// A panel supply that may or may not be switchable
pub enum Rail<R> {
    /// No switchable regulator on this board
    Absent,
    /// Switchable regulator
    Present(R),
}

impl<R: Regulator> Rail<R> {
    /// Look up a supply, recording any failure as an absent rail
    #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
    pub fn lookup<S>(supplies: &mut S, name: Option<&str>, kind: RailKind) -> Self
    where
        S: RegulatorProvider<Regulator = R>,
    {
        let Some(name) = name else {
            return Rail::Absent;
        };

        match supplies.lookup(name) {
            Ok(regulator) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("{} supply '{}' found", kind, name);
                Rail::Present(regulator)
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{} supply '{}' not available: {}", kind, name, e);
                Rail::Absent
            }
        }
    }

    /// Check if a regulator is fitted
    pub fn is_present(&self) -> bool {
        matches!(self, Rail::Present(_))
    }

    /// Check if the rail is fitted and on
    pub fn is_enabled(&self) -> bool {
        match self {
            Rail::Present(regulator) => regulator.is_enabled(),
            Rail::Absent => false,
        }
    }

    /// Switch the rail on
    pub fn enable(&mut self) -> Result<(), RegulatorError> {
        match self {
            Rail::Present(regulator) => regulator.enable(),
            Rail::Absent => Ok(()),
        }
    }

    /// Switch the rail off
    pub fn disable(&mut self) -> Result<(), RegulatorError> {
        match self {
            Rail::Present(regulator) => regulator.disable(),
            Rail::Absent => Ok(()),
        }
    }

    /// Switch the rail off if it was left on, then hand the regulator back
    pub fn release<S>(self, supplies: &mut S)
    where
        S: RegulatorProvider<Regulator = R>,
    {
        if let Rail::Present(mut regulator) = self {
            if regulator.is_enabled() {
                if let Err(_e) = regulator.disable() {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("s6d05a: rail still on at release: {}", _e);
                }
            }
            supplies.release(regulator);
        }
    }
}
