//! Command transmitter and sequence player

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use s6d05a_core::Command;

use crate::signal::SerialInterface;

impl<P: OutputPin, D: DelayNs> SerialInterface<P, D> {
    /// Send one command: opcode word, parameter words, then its post-delay
    pub fn send(&mut self, command: &Command) -> Result<(), P::Error> {
        for word in command.words() {
            self.write_word(word)?;
        }

        if command.delay_ms() > 0 {
            self.delay().delay_ms(command.delay_ms());
        }

        Ok(())
    }

    /// Send every command of a sequence in order
    ///
    /// Stops at the first line error; later commands are not sent.
    pub fn play(&mut self, sequence: &[Command]) -> Result<(), P::Error> {
        for command in sequence {
            self.send(command)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{decode_commands, decode_words, pin, MockDelay, MockPin, Trace, TraceEvent};
    use proptest::prelude::*;
    use s6d05a_core::{opcode, POWER_OFF_SEQUENCE, MAX_PARAMETERS};

    fn interface(trace: &Trace) -> SerialInterface<MockPin, MockDelay> {
        SerialInterface::new(
            pin("cs", trace),
            pin("sck", trace),
            pin("sda", trace),
            MockDelay::new(trace),
        )
    }

    #[test]
    fn test_send_waits_after_last_word() {
        let trace = Trace::default();
        let mut iface = interface(&trace);

        iface.send(&Command::new(opcode::SLPIN, &[], 200)).unwrap();

        let events = trace.events();
        assert_eq!(events.last(), Some(&TraceEvent::DelayMs(200)));
        assert_eq!(trace.count(&TraceEvent::DelayMs(200)), 1);
    }

    #[test]
    fn test_send_without_delay_does_not_sleep() {
        let trace = Trace::default();
        let mut iface = interface(&trace);

        iface.send(&Command::set_brightness(10)).unwrap();

        assert!(!trace
            .events()
            .iter()
            .any(|e| matches!(e, TraceEvent::DelayMs(_))));
    }

    #[test]
    fn test_play_in_order() {
        let trace = Trace::default();
        let mut iface = interface(&trace);

        iface.play(&POWER_OFF_SEQUENCE).unwrap();

        let sent = decode_commands(&decode_words(&trace));
        let expected: Vec<(u8, Vec<u8>)> = POWER_OFF_SEQUENCE
            .iter()
            .map(|c| (c.opcode(), c.params().to_vec()))
            .collect();
        assert_eq!(sent, expected);
    }

    #[test]
    fn test_play_stops_at_first_error() {
        let trace = Trace::default();
        let mut iface = interface(&trace);

        trace.fail("cs");
        assert!(iface.play(&POWER_OFF_SEQUENCE).is_err());
        assert!(decode_words(&trace).is_empty());
        assert_eq!(trace.events(), Vec::new());
    }

    proptest! {
        #[test]
        fn test_send_emits_one_word_per_byte(
            op in any::<u8>(),
            params in proptest::collection::vec(any::<u8>(), 0..=MAX_PARAMETERS),
        ) {
            let trace = Trace::default();
            let mut iface = interface(&trace);

            iface.send(&Command::try_new(op, &params, 0).unwrap()).unwrap();

            let words = decode_words(&trace);
            prop_assert_eq!(words.len(), 1 + params.len());
            prop_assert_eq!(words[0], op as u16);
            for (word, &p) in words[1..].iter().zip(params.iter()) {
                prop_assert_eq!(*word, 0x100 | p as u16);
            }
        }
    }
}
