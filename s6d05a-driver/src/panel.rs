//! Panel handle
//!
//! Owns the control lines, the optional supply rails, the power state and
//! the backlight properties of one attached panel. Power sequencing,
//! brightness control and lifecycle handling are implemented in their own
//! modules on top of this type.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use s6d05a_core::state::PowerState;
use s6d05a_core::traits::BacklightProps;
use s6d05a_core::CommandSequence;
use s6d05a_hal::Regulator;

use crate::rail::Rail;
use crate::signal::SerialInterface;

/// An attached S6D05A panel
///
/// `P` is the output line type, `R` the regulator type and `D` the delay
/// provider.
pub struct Panel<P, R, D> {
    pub(crate) iface: SerialInterface<P, D>,
    pub(crate) reset: P,
    pub(crate) vci: Rail<R>,
    pub(crate) vdd3: Rail<R>,
    pub(crate) state: PowerState,
    pub(crate) brightness: u8,
    pub(crate) props: BacklightProps,
    pub(crate) power_on: CommandSequence,
    pub(crate) power_off: CommandSequence,
}

impl<P, R, D> Panel<P, R, D>
where
    P: OutputPin,
    R: Regulator,
    D: DelayNs,
{
    /// Build a panel from lines and rails the caller has already set up
    ///
    /// The panel starts OFF; nothing is written to hardware. Most callers
    /// want [`Panel::attach`] instead.
    pub fn new(
        iface: SerialInterface<P, D>,
        reset: P,
        vci: Rail<R>,
        vdd3: Rail<R>,
        power_on: CommandSequence,
        power_off: CommandSequence,
    ) -> Self {
        let props = BacklightProps::default();
        Self {
            iface,
            reset,
            vci,
            vdd3,
            state: PowerState::Off,
            brightness: props.brightness,
            props,
            power_on,
            power_off,
        }
    }

    /// Current power state
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Check if the panel is on
    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Last requested brightness, kept while the panel is off
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Check whether the VCI and VDD3 rails are switchable
    pub fn rails_present(&self) -> (bool, bool) {
        (self.vci.is_present(), self.vdd3.is_present())
    }

    /// Active power-on sequence
    pub fn power_on_sequence(&self) -> &CommandSequence {
        &self.power_on
    }

    /// Active power-off sequence
    pub fn power_off_sequence(&self) -> &CommandSequence {
        &self.power_off
    }
}
