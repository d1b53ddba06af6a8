//! Brightness controller
//!
//! Turns a brightness/blank/suspend request into at most one power
//! transition followed by a single brightness command. Brightness is only
//! written while the panel is on; the requested level is remembered across
//! off periods.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use s6d05a_core::state::PowerState;
use s6d05a_core::traits::{Backlight, BacklightProps};
use s6d05a_core::Command;
use s6d05a_hal::Regulator;

use crate::error::PanelError;
use crate::panel::Panel;

impl<P, R, D> Panel<P, R, D>
where
    P: OutputPin,
    R: Regulator,
    D: DelayNs,
{
    /// Apply a brightness request
    ///
    /// All three inputs are recorded in the backlight properties, so a later
    /// [`Backlight::update_status`] or [`Panel::resume`] replays them.
    pub fn update(
        &mut self,
        requested: u8,
        blanked: bool,
        suspended: bool,
    ) -> Result<(), PanelError<P::Error>> {
        let target = PowerState::from_on(!blanked && !suspended);
        self.brightness = requested;
        self.props.brightness = requested;
        self.props.set_blanked(blanked);
        self.props.suspended = suspended;

        if target != self.state {
            self.set_power(target)?;
        }

        if self.state.is_on() {
            #[cfg(feature = "defmt")]
            defmt::debug!("s6d05a: brightness {}", requested);
            self.iface
                .send(&Command::set_brightness(requested))
                .map_err(PanelError::Line)?;
        }

        Ok(())
    }

    /// Brightness currently shown: 0 while off, else the last requested level
    pub fn current_brightness(&self) -> u8 {
        if self.state.is_on() {
            self.brightness
        } else {
            0
        }
    }
}

impl<P, R, D> Backlight for Panel<P, R, D>
where
    P: OutputPin,
    R: Regulator,
    D: DelayNs,
{
    type Error = PanelError<P::Error>;

    fn props(&self) -> &BacklightProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut BacklightProps {
        &mut self.props
    }

    fn update_status(&mut self) -> Result<(), Self::Error> {
        let props = self.props;
        self.update(props.brightness, props.blanked(), props.suspended)
    }

    fn get_brightness(&self) -> u8 {
        self.current_brightness()
    }
}
