//! Fixed-size line pool and supply table
//!
//! Reference implementations of [`LineController`] and [`RegulatorProvider`]
//! for boards whose pins and rails are all known at build time. Each entry
//! can be handed out once; releasing it makes it available again.

use embedded_hal::digital::{ErrorType, OutputPin, PinState};

use crate::gpio::{LineController, LineError, LineId};
use crate::regulator::{Regulator, RegulatorError, RegulatorProvider};

/// A line handed out by a [`LinePool`]
pub struct PooledLine<P> {
    id: LineId,
    label: &'static str,
    pin: P,
}

impl<P> PooledLine<P> {
    /// Board line number
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Owner label given at claim time
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<P: OutputPin> ErrorType for PooledLine<P> {
    type Error = P::Error;
}

impl<P: OutputPin> OutputPin for PooledLine<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }
}

/// Pool of output pins indexed by board line number
pub struct LinePool<P, const N: usize> {
    slots: [(LineId, Option<P>); N],
}

impl<P, const N: usize> LinePool<P, N> {
    /// Create a pool from `(line number, pin)` pairs
    pub fn new(pins: [(LineId, P); N]) -> Self {
        Self {
            slots: pins.map(|(id, pin)| (id, Some(pin))),
        }
    }

    /// Check whether a line exists and is not currently claimed
    pub fn is_available(&self, id: LineId) -> bool {
        self.slots
            .iter()
            .any(|(slot_id, pin)| *slot_id == id && pin.is_some())
    }

    /// Number of lines currently claimed
    pub fn claimed(&self) -> usize {
        self.slots.iter().filter(|(_, pin)| pin.is_none()).count()
    }
}

impl<P: OutputPin, const N: usize> LineController for LinePool<P, N> {
    type Line = PooledLine<P>;

    fn claim(&mut self, id: LineId, label: &'static str) -> Result<Self::Line, LineError> {
        let (_, slot) = self
            .slots
            .iter_mut()
            .find(|(slot_id, _)| *slot_id == id)
            .ok_or(LineError::Unavailable)?;
        let pin = slot.take().ok_or(LineError::Unavailable)?;

        Ok(PooledLine { id, label, pin })
    }

    fn set_direction_output(
        &mut self,
        line: &mut Self::Line,
        initial: PinState,
    ) -> Result<(), LineError> {
        line.pin.set_state(initial).map_err(|_| LineError::Direction)
    }

    fn release(&mut self, line: Self::Line) {
        if let Some((_, slot)) = self.slots.iter_mut().find(|(id, _)| *id == line.id) {
            *slot = Some(line.pin);
        }
    }
}

/// A supply handed out by a [`SupplyTable`]
pub struct TableSupply<R> {
    name: &'static str,
    regulator: R,
}

impl<R> TableSupply<R> {
    /// Supply name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<R: Regulator> Regulator for TableSupply<R> {
    fn enable(&mut self) -> Result<(), RegulatorError> {
        self.regulator.enable()
    }

    fn disable(&mut self) -> Result<(), RegulatorError> {
        self.regulator.disable()
    }

    fn is_enabled(&self) -> bool {
        self.regulator.is_enabled()
    }

    fn microvolts(&self) -> Option<u32> {
        self.regulator.microvolts()
    }
}

/// Named regulators known at build time
pub struct SupplyTable<R, const N: usize> {
    slots: [(&'static str, Option<R>); N],
}

impl<R, const N: usize> SupplyTable<R, N> {
    /// Create a table from `(supply name, regulator)` pairs
    pub fn new(supplies: [(&'static str, R); N]) -> Self {
        Self {
            slots: supplies.map(|(name, regulator)| (name, Some(regulator))),
        }
    }

    /// Check whether a supply exists and is not currently handed out
    pub fn is_available(&self, supply: &str) -> bool {
        self.slots
            .iter()
            .any(|(name, regulator)| *name == supply && regulator.is_some())
    }
}

impl<R: Regulator, const N: usize> RegulatorProvider for SupplyTable<R, N> {
    type Regulator = TableSupply<R>;

    fn lookup(&mut self, supply: &str) -> Result<Self::Regulator, RegulatorError> {
        let (name, slot) = self
            .slots
            .iter_mut()
            .find(|(name, _)| *name == supply)
            .ok_or(RegulatorError::NotFound)?;
        // Supplies are handed out exclusively
        let regulator = slot.take().ok_or(RegulatorError::Failure)?;

        Ok(TableSupply {
            name: *name,
            regulator,
        })
    }

    fn release(&mut self, supply: Self::Regulator) {
        if let Some((_, slot)) = self.slots.iter_mut().find(|(name, _)| *name == supply.name) {
            *slot = Some(supply.regulator);
        }
    }
}
