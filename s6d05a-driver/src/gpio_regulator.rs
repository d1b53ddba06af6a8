//! GPIO-switched regulator
//!
//! A fixed-voltage rail behind a load switch driven by one output pin. The
//! switch can be active-high (default) or active-low.

use embedded_hal::digital::OutputPin;

use s6d05a_hal::{Regulator, RegulatorError};

/// Load-switched fixed rail
pub struct GpioRegulator<P> {
    pin: P,
    /// If true, rail ON = pin LOW
    inverted: bool,
    microvolts: u32,
    /// Current logical state (true = rail on)
    on: bool,
}

impl<P: OutputPin> GpioRegulator<P> {
    /// Create a switched rail, driving it off
    ///
    /// # Arguments
    /// - `pin`: Load switch enable pin
    /// - `inverted`: If true, the rail is ON when the pin is LOW
    /// - `microvolts`: Nominal output voltage
    pub fn new(pin: P, inverted: bool, microvolts: u32) -> Result<Self, RegulatorError> {
        let mut rail = Self {
            pin,
            inverted,
            microvolts,
            on: true,
        };
        rail.set_on(false)?;
        Ok(rail)
    }

    /// Create a rail with an active-high enable
    pub fn new_active_high(pin: P, microvolts: u32) -> Result<Self, RegulatorError> {
        Self::new(pin, false, microvolts)
    }

    /// Create a rail with an active-low enable
    pub fn new_active_low(pin: P, microvolts: u32) -> Result<Self, RegulatorError> {
        Self::new(pin, true, microvolts)
    }

    fn set_on(&mut self, on: bool) -> Result<(), RegulatorError> {
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| RegulatorError::Failure)?;
        self.on = on;
        Ok(())
    }
}

impl<P: OutputPin> Regulator for GpioRegulator<P> {
    fn enable(&mut self) -> Result<(), RegulatorError> {
        self.set_on(true)
    }

    fn disable(&mut self) -> Result<(), RegulatorError> {
        self.set_on(false)
    }

    fn is_enabled(&self) -> bool {
        self.on
    }

    fn microvolts(&self) -> Option<u32> {
        Some(self.microvolts)
    }
}
