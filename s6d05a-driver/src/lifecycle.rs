//! Attach, detach, suspend and resume
//!
//! Lines are claimed in the order reset, chip select, clock, data, each
//! driven to its idle level on claim (reset and chip select high, clock and
//! data low). If any claim fails the lines already claimed are released
//! again before the error is returned.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};

use s6d05a_core::config::PanelConfig;
use s6d05a_core::state::PowerState;
use s6d05a_core::traits::Backlight;
use s6d05a_hal::{LineController, LineId, Regulator, RegulatorProvider};

use crate::error::{AttachError, LineRole, PanelError};
use crate::panel::Panel;
use crate::rail::{Rail, RailKind};
use crate::signal::SerialInterface;

impl<P, R, D> Panel<P, R, D>
where
    P: OutputPin,
    R: Regulator,
    D: DelayNs,
{
    /// Claim the panel's resources and power it on at full brightness
    pub fn attach<L, S>(
        config: &PanelConfig,
        lines: &mut L,
        supplies: &mut S,
        delay: D,
    ) -> Result<Self, AttachError<P::Error>>
    where
        L: LineController<Line = P>,
        S: RegulatorProvider<Regulator = R>,
    {
        let ids = &config.lines;

        let reset = claim(lines, LineRole::Reset, ids.reset, PinState::High)?;
        let cs = match claim(lines, LineRole::ChipSelect, ids.cs, PinState::High) {
            Ok(line) => line,
            Err(e) => {
                lines.release(reset);
                return Err(e);
            }
        };
        let sck = match claim(lines, LineRole::Clock, ids.sck, PinState::Low) {
            Ok(line) => line,
            Err(e) => {
                lines.release(cs);
                lines.release(reset);
                return Err(e);
            }
        };
        let sda = match claim(lines, LineRole::Data, ids.sda, PinState::Low) {
            Ok(line) => line,
            Err(e) => {
                lines.release(sck);
                lines.release(cs);
                lines.release(reset);
                return Err(e);
            }
        };

        let vci = Rail::lookup(supplies, config.vci_supply.as_deref(), RailKind::Vci);
        let vdd3 = Rail::lookup(supplies, config.vdd3_supply.as_deref(), RailKind::Vdd3);

        let mut panel = Panel::new(
            SerialInterface::new(cs, sck, sda, delay),
            reset,
            vci,
            vdd3,
            config.power_on_sequence(),
            config.power_off_sequence(),
        );

        #[cfg(feature = "defmt")]
        defmt::info!(
            "s6d05a: attached (vci: {}, vdd3: {})",
            panel.vci.is_present(),
            panel.vdd3.is_present()
        );

        if let Err(e) = panel.update_status() {
            #[cfg(feature = "defmt")]
            defmt::error!("s6d05a: initial power-on failed");
            panel.release(lines, supplies);
            return Err(AttachError::PowerOn(e));
        }

        Ok(panel)
    }

    /// Power the panel off if needed and give every resource back
    ///
    /// Resources are released even if the power-off sequence fails; the
    /// error is still reported.
    pub fn detach<L, S>(mut self, lines: &mut L, supplies: &mut S) -> Result<(), PanelError<P::Error>>
    where
        L: LineController<Line = P>,
        S: RegulatorProvider<Regulator = R>,
    {
        let result = self.set_power(PowerState::Off);

        #[cfg(feature = "defmt")]
        defmt::info!("s6d05a: detached");

        self.release(lines, supplies);
        result
    }

    /// Turn the panel off for system sleep, keeping the requested brightness
    pub fn suspend(&mut self) -> Result<(), PanelError<P::Error>> {
        self.props.suspended = true;
        self.update_status()
    }

    /// Restore the pre-suspend state
    ///
    /// Replays the last recorded brightness and blank inputs with the
    /// suspend flag cleared.
    pub fn resume(&mut self) -> Result<(), PanelError<P::Error>> {
        self.props.suspended = false;
        self.update_status()
    }

    fn release<L, S>(self, lines: &mut L, supplies: &mut S)
    where
        L: LineController<Line = P>,
        S: RegulatorProvider<Regulator = R>,
    {
        let Panel {
            iface,
            mut reset,
            vci,
            vdd3,
            ..
        } = self;

        // Leave the controller held in reset
        if reset.set_low().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("s6d05a: cannot assert reset on release");
        }

        vdd3.release(supplies);
        vci.release(supplies);

        let (cs, sck, sda, _delay) = iface.release();
        lines.release(sda);
        lines.release(sck);
        lines.release(cs);
        lines.release(reset);
    }
}

fn claim<L>(
    lines: &mut L,
    role: LineRole,
    id: LineId,
    initial: PinState,
) -> Result<L::Line, AttachError<<L::Line as ErrorType>::Error>>
where
    L: LineController,
{
    lines.claim_output(id, role.label(), initial).map_err(|_e| {
        #[cfg(feature = "defmt")]
        defmt::error!("s6d05a: cannot claim {} (line {}): {}", role.label(), id, _e);
        AttachError::ResourceUnavailable(role)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::*;
    use s6d05a_core::opcode;
    use s6d05a_core::traits::DEFAULT_BRIGHTNESS;
    use s6d05a_hal::SupplyTable;

    #[test]
    fn test_attach_powers_on_at_full_brightness() {
        let trace = Trace::default();
        let (panel, lines, supplies) = attached(&trace);

        assert!(panel.is_on());
        assert_eq!(panel.get_brightness(), DEFAULT_BRIGHTNESS);
        assert_eq!(panel.rails_present(), (true, true));
        assert_eq!(lines.claimed(), 4);
        assert!(!supplies.is_available(VCI));

        // Idle levels are set before anything else happens
        let events = trace.events();
        assert_eq!(
            &events[..4],
            &[
                TraceEvent::Pin("reset", true),
                TraceEvent::Pin("cs", true),
                TraceEvent::Pin("sck", false),
                TraceEvent::Pin("sda", false),
            ]
        );

        let commands = decode_commands(&decode_words(&trace));
        assert_eq!(commands.len(), 27 + 1);
        assert_eq!(commands.last(), Some(&(opcode::WRDISBV, vec![255])));
    }

    #[test]
    fn test_attach_rolls_back_on_any_claim_failure() {
        let cases = [
            (LineId(1), LineRole::Reset),
            (LineId(2), LineRole::ChipSelect),
            (LineId(3), LineRole::Clock),
            (LineId(4), LineRole::Data),
        ];

        for (id, role) in cases {
            let trace = Trace::default();
            let mut lines = lines(&trace);
            let mut supplies = supplies(&trace);

            // Someone else already owns this line
            let taken = lines.claim(id, "other").unwrap();

            let result = TestPanel::attach(&config(), &mut lines, &mut supplies, MockDelay::new(&trace));
            assert_eq!(result.err(), Some(AttachError::ResourceUnavailable(role)));
            assert_eq!(lines.claimed(), 1);
            assert!(supplies.is_available(VCI));
            assert!(supplies.is_available(VDD3));

            lines.release(taken);
            assert_eq!(lines.claimed(), 0);
        }
    }

    #[test]
    fn test_attach_without_regulators() {
        let trace = Trace::default();
        let mut lines = lines(&trace);
        let mut supplies: SupplyTable<MockRegulator, 0> = SupplyTable::new([]);

        let panel = TestPanel::attach(&config(), &mut lines, &mut supplies, MockDelay::new(&trace))
            .unwrap_or_else(|_| panic!("attach failed"));

        assert!(panel.is_on());
        assert_eq!(panel.rails_present(), (false, false));
        assert_eq!(panel.get_brightness(), 255);
        assert!(!trace
            .events()
            .iter()
            .any(|e| matches!(e, TraceEvent::Enable(_) | TraceEvent::Disable(_))));

        // Reset pulse with the rail holds kept, then the settle delay
        let events = trace.events();
        let low = trace.position(&TraceEvent::Pin("reset", false)).unwrap();
        assert_eq!(
            &events[low..low + 6],
            &[
                TraceEvent::Pin("reset", false),
                TraceEvent::DelayUs(10),
                TraceEvent::DelayUs(10),
                TraceEvent::DelayUs(10),
                TraceEvent::Pin("reset", true),
                TraceEvent::DelayMs(10),
            ]
        );
        assert_eq!(decode_commands(&decode_events(&events[low..])).len(), 28);
    }

    #[test]
    fn test_attach_with_supply_names_cleared() {
        let trace = Trace::default();
        let mut lines = lines(&trace);
        let mut supplies = supplies(&trace);
        let config = config()
            .with_vci_supply(None)
            .and_then(|c| c.with_vdd3_supply(None))
            .unwrap();

        let panel = TestPanel::attach(&config, &mut lines, &mut supplies, MockDelay::new(&trace))
            .unwrap_or_else(|_| panic!("attach failed"));

        assert_eq!(panel.rails_present(), (false, false));
        assert!(supplies.is_available(VCI));
    }

    #[test]
    fn test_attach_power_on_failure_releases_everything() {
        let trace = Trace::default();
        let mut lines = lines(&trace);
        let mut supplies = supplies(&trace);

        trace.fail(VCI);
        let result = TestPanel::attach(&config(), &mut lines, &mut supplies, MockDelay::new(&trace));

        assert!(matches!(
            result,
            Err(AttachError::PowerOn(PanelError::Regulator(RailKind::Vci, _)))
        ));
        assert_eq!(lines.claimed(), 0);
        assert!(supplies.is_available(VCI));
        assert!(supplies.is_available(VDD3));
    }

    #[test]
    fn test_detach_powers_off_and_releases() {
        let trace = Trace::default();
        let (panel, mut lines, mut supplies) = attached(&trace);
        trace.clear();

        panel.detach(&mut lines, &mut supplies).unwrap();

        let commands = decode_commands(&decode_words(&trace));
        assert_eq!(commands.last().map(|c| c.0), Some(opcode::SLPIN));
        assert_eq!(trace.count(&TraceEvent::Disable(VCI)), 1);
        assert_eq!(trace.count(&TraceEvent::Disable(VDD3)), 1);
        assert_eq!(lines.claimed(), 0);
        assert!(supplies.is_available(VCI));
        assert!(supplies.is_available(VDD3));
    }

    #[test]
    fn test_detach_releases_despite_reset_fault() {
        let trace = Trace::default();
        let (panel, mut lines, mut supplies) = attached(&trace);
        trace.fail("reset");

        assert_eq!(
            panel.detach(&mut lines, &mut supplies),
            Err(PanelError::Line(MockError))
        );
        assert_eq!(trace.count(&TraceEvent::Disable(VCI)), 1);
        assert_eq!(trace.count(&TraceEvent::Disable(VDD3)), 1);
        assert_eq!(lines.claimed(), 0);
        assert!(supplies.is_available(VCI));
        assert!(supplies.is_available(VDD3));
    }

    #[test]
    fn test_detach_while_off_sends_nothing() {
        let trace = Trace::default();
        let (mut panel, mut lines, mut supplies) = attached(&trace);
        panel.suspend().unwrap();
        trace.clear();

        panel.detach(&mut lines, &mut supplies).unwrap();

        assert!(decode_words(&trace).is_empty());
        assert_eq!(lines.claimed(), 0);
    }

    #[test]
    fn test_suspend_resume_restores_brightness() {
        let trace = Trace::default();
        let (mut panel, _lines, _supplies) = attached(&trace);
        panel.update(77, false, false).unwrap();

        panel.suspend().unwrap();
        assert!(!panel.is_on());
        assert_eq!(panel.get_brightness(), 0);
        assert_eq!(panel.brightness(), 77);

        // Suspending twice does not run the power-off sequence again
        trace.clear();
        panel.suspend().unwrap();
        assert!(decode_words(&trace).is_empty());

        panel.resume().unwrap();
        assert!(panel.is_on());
        assert_eq!(panel.get_brightness(), 77);
        let commands = decode_commands(&decode_words(&trace));
        assert_eq!(commands.last(), Some(&(opcode::WRDISBV, vec![77])));
    }

    #[test]
    fn test_resume_keeps_blanked_panel_off() {
        let trace = Trace::default();
        let (mut panel, _lines, _supplies) = attached(&trace);
        panel.props_mut().fb_blank = true;

        panel.suspend().unwrap();
        panel.resume().unwrap();

        assert!(!panel.is_on());
    }

    #[test]
    fn test_resume_keeps_panel_blanked_by_update_off() {
        let trace = Trace::default();
        let (mut panel, _lines, _supplies) = attached(&trace);
        panel.update(50, true, false).unwrap();
        assert!(!panel.is_on());

        panel.suspend().unwrap();
        panel.resume().unwrap();

        assert!(!panel.is_on());
        assert_eq!(panel.brightness(), 50);

        panel.update(50, false, false).unwrap();
        assert!(panel.is_on());
        assert_eq!(panel.get_brightness(), 50);
    }
}
