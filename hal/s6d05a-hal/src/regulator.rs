//! Regulator (power rail) abstractions
//!
//! A regulator is looked up by supply name. A supply that does not exist
//! on a board is reported as [`RegulatorError::NotFound`], which consumers
//! treat as "rail not fitted" rather than as a failure.

/// Regulator errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegulatorError {
    /// No supply with the requested name exists
    NotFound,
    /// The rail refused to change state
    Failure,
    /// The rail did not report the requested state in time
    Timeout,
}

/// A switchable power rail
pub trait Regulator {
    /// Switch the rail on
    fn enable(&mut self) -> Result<(), RegulatorError>;

    /// Switch the rail off
    fn disable(&mut self) -> Result<(), RegulatorError>;

    /// Check whether the rail is currently on
    fn is_enabled(&self) -> bool;

    /// Output voltage in microvolts, if known
    fn microvolts(&self) -> Option<u32> {
        None
    }
}

/// Source of regulator handles
pub trait RegulatorProvider {
    /// Handle for one looked-up supply
    type Regulator: Regulator;

    /// Look up a supply by name
    fn lookup(&mut self, supply: &str) -> Result<Self::Regulator, RegulatorError>;

    /// Give a supply handle back
    fn release(&mut self, regulator: Self::Regulator);
}
