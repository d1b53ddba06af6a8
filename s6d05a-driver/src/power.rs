//! Power sequencer
//!
//! Power-on order:
//!
//! 1. Assert reset, hold
//! 2. Enable VCI (if fitted), hold
//! 3. Enable VDD3 (if fitted), hold
//! 4. Release reset, wait for the controller to come out of reset
//! 5. Play the power-on sequence
//!
//! Power-off runs the power-off sequence first, so the controller is asleep
//! before reset is asserted and the rails drop (VDD3 before VCI).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use s6d05a_core::state::{PowerState, Transition};
use s6d05a_hal::Regulator;

use crate::error::PanelError;
use crate::panel::Panel;
use crate::rail::{Rail, RailKind};

/// Hold time after asserting reset and after each rail switch
pub const RAIL_HOLD_US: u32 = 10;

/// Wait after releasing reset before the first command
pub const RESET_SETTLE_MS: u32 = 10;

impl<P, R, D> Panel<P, R, D>
where
    P: OutputPin,
    R: Regulator,
    D: DelayNs,
{
    /// Drive the panel to `target`
    ///
    /// Does nothing if the panel is already in `target`. On error the
    /// recorded state is left unchanged.
    pub fn set_power(&mut self, target: PowerState) -> Result<(), PanelError<P::Error>> {
        let Some(transition) = self.state.transition_to(target) else {
            return Ok(());
        };

        match transition {
            Transition::PowerOn => self.power_on()?,
            Transition::PowerOff => self.power_off()?,
        }

        self.state = transition.target();
        Ok(())
    }

    fn power_on(&mut self) -> Result<(), PanelError<P::Error>> {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "s6d05a: power on ({} ms in sequence delays)",
            self.power_on.total_delay_ms()
        );

        self.reset.set_low().map_err(PanelError::Line)?;
        self.iface.delay().delay_us(RAIL_HOLD_US);

        if let Err(e) = self.bring_up() {
            self.abort_power_on();
            return Err(e);
        }
        Ok(())
    }

    /// Rails, reset release and the power-on sequence
    fn bring_up(&mut self) -> Result<(), PanelError<P::Error>> {
        self.vci.enable().map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::error!("s6d05a: VCI enable failed: {}", e);
            PanelError::Regulator(RailKind::Vci, e)
        })?;
        self.iface.delay().delay_us(RAIL_HOLD_US);

        self.vdd3.enable().map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::error!("s6d05a: VDD3 enable failed: {}", e);
            PanelError::Regulator(RailKind::Vdd3, e)
        })?;
        self.iface.delay().delay_us(RAIL_HOLD_US);

        self.reset.set_high().map_err(PanelError::Line)?;
        self.iface.delay().delay_ms(RESET_SETTLE_MS);

        self.iface
            .play(self.power_on.as_slice())
            .map_err(PanelError::Line)
    }

    /// Put the hardware back where an OFF panel is: reset asserted, rails down
    fn abort_power_on(&mut self) {
        if self.reset.set_low().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("s6d05a: cannot assert reset after failed power on");
        }
        if self.vdd3.is_enabled() {
            switch_off(&mut self.vdd3, RailKind::Vdd3);
        }
        if self.vci.is_enabled() {
            switch_off(&mut self.vci, RailKind::Vci);
        }
    }

    fn power_off(&mut self) -> Result<(), PanelError<P::Error>> {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "s6d05a: power off ({} ms in sequence delays)",
            self.power_off.total_delay_ms()
        );

        self.iface
            .play(self.power_off.as_slice())
            .map_err(PanelError::Line)?;

        self.reset.set_low().map_err(PanelError::Line)?;

        // The controller is asleep and held in reset; a rail that refuses
        // to drop does not keep the panel on
        switch_off(&mut self.vdd3, RailKind::Vdd3);
        switch_off(&mut self.vci, RailKind::Vci);

        Ok(())
    }
}

/// Disable a rail, logging a refusal
#[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
fn switch_off<R: Regulator>(rail: &mut Rail<R>, kind: RailKind) {
    if let Err(_e) = rail.disable() {
        #[cfg(feature = "defmt")]
        defmt::warn!("s6d05a: {} disable failed: {}", kind, _e);
    }
}
