//! Panel event handling
//!
//! Brightness, blank and power-management requests arrive as
//! [`PanelEvent`]s through an embassy-sync [`Channel`]. One handler owns the
//! panel and applies events in arrival order.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use s6d05a_core::state::PanelEvent;
use s6d05a_core::traits::Backlight;
use s6d05a_hal::Regulator;

use crate::error::PanelError;
use crate::panel::Panel;

/// Default capacity of a panel event channel
pub const EVENT_CHANNEL_SIZE: usize = 8;

/// Channel carrying requests to the panel handler
pub type PanelEventChannel<M, const N: usize = EVENT_CHANNEL_SIZE> = Channel<M, PanelEvent, N>;

impl<P, R, D> Panel<P, R, D>
where
    P: OutputPin,
    R: Regulator,
    D: DelayNs,
{
    /// Apply one event to the backlight properties and push the result to hardware
    pub fn handle_event(&mut self, event: PanelEvent) -> Result<(), PanelError<P::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("s6d05a: event {}", event);

        match event {
            PanelEvent::Suspend => self.suspend(),
            PanelEvent::Resume => self.resume(),
            other => {
                self.props.apply(other);
                self.update_status()
            }
        }
    }

    /// Handle every event currently queued, without waiting for more
    ///
    /// Returns the number of events handled. Stops at the first error; the
    /// remaining events stay queued.
    pub fn drain<M: RawMutex, const N: usize>(
        &mut self,
        channel: &Channel<M, PanelEvent, N>,
    ) -> Result<usize, PanelError<P::Error>> {
        let mut handled = 0;
        while let Ok(event) = channel.try_receive() {
            self.handle_event(event)?;
            handled += 1;
        }
        Ok(handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use s6d05a_core::opcode;
    use s6d05a_core::traits::BlankMode;

    #[test]
    fn test_events_in_order() {
        let trace = Trace::default();
        let (mut panel, _lines, _supplies) = attached(&trace);
        let channel: PanelEventChannel<NoopRawMutex> = Channel::new();

        channel.try_send(PanelEvent::SetBrightness(30)).unwrap();
        channel.try_send(PanelEvent::Blank(BlankMode::Powerdown)).unwrap();
        channel.try_send(PanelEvent::SetBrightness(60)).unwrap();
        trace.clear();

        assert_eq!(panel.drain(&channel), Ok(3));
        assert!(!panel.is_on());
        assert_eq!(panel.brightness(), 60);

        // 30 was shown before blanking, 60 is only remembered
        let commands = decode_commands(&decode_words(&trace));
        assert_eq!(commands[0], (opcode::WRDISBV, vec![30]));
        assert_eq!(commands.last().map(|c| c.0), Some(opcode::SLPIN));

        channel.try_send(PanelEvent::Blank(BlankMode::Unblank)).unwrap();
        assert_eq!(panel.drain(&channel), Ok(1));
        assert_eq!(panel.get_brightness(), 60);
    }

    #[test]
    fn test_framebuffer_blank_event() {
        let trace = Trace::default();
        let (mut panel, _lines, _supplies) = attached(&trace);

        panel.handle_event(PanelEvent::FramebufferBlank(true)).unwrap();
        assert!(!panel.is_on());
        panel.handle_event(PanelEvent::FramebufferBlank(false)).unwrap();
        assert!(panel.is_on());
    }

    #[test]
    fn test_suspend_resume_events() {
        let trace = Trace::default();
        let (mut panel, _lines, _supplies) = attached(&trace);
        panel.handle_event(PanelEvent::SetBrightness(12)).unwrap();

        panel.handle_event(PanelEvent::Suspend).unwrap();
        assert!(!panel.is_on());
        panel.handle_event(PanelEvent::Resume).unwrap();
        assert!(panel.is_on());
        assert_eq!(panel.get_brightness(), 12);
    }

    #[test]
    fn test_drain_stops_at_error() {
        let trace = Trace::default();
        let (mut panel, _lines, _supplies) = attached(&trace);
        let channel: PanelEventChannel<NoopRawMutex, 4> = Channel::new();

        channel.try_send(PanelEvent::SetBrightness(1)).unwrap();
        channel.try_send(PanelEvent::SetBrightness(2)).unwrap();
        trace.fail("sck");

        assert_eq!(panel.drain(&channel), Err(PanelError::Line(MockError)));
        assert_eq!(channel.len(), 1);
    }
}
