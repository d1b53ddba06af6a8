//! Bit-banged 3-wire serial interface
//!
//! Each 9-bit word is framed by chip select. Data is set up while the
//! clock is low and latched by the controller on the rising clock edge:
//!
//! ```text
//! CS  ‾‾‾‾‾‾‾‾\________________________ ... ______/‾‾‾‾‾
//! SCK ____/‾‾‾‾‾‾‾‾\_____/‾‾‾\_____/‾‾‾ ...  ‾‾‾‾‾‾‾‾‾‾‾
//! SDA ==============X== b8 ==X== b7 === ... == b0 =======
//! ```
//!
//! Every level change is followed by a [`HALF_PERIOD_US`] busy-wait.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use s6d05a_core::Word;

/// Hold time after every line transition
pub const HALF_PERIOD_US: u32 = 10;

/// Chip select, clock and data lines plus the delay provider used to time them
pub struct SerialInterface<P, D> {
    cs: P,
    sck: P,
    sda: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> SerialInterface<P, D> {
    /// Create an interface from already configured output lines
    pub fn new(cs: P, sck: P, sda: P, delay: D) -> Self {
        Self { cs, sck, sda, delay }
    }

    /// Clock out one 9-bit word, most significant bit first
    pub fn write_word(&mut self, word: Word) -> Result<(), P::Error> {
        // Idle: chip select deasserted, clock high
        self.cs.set_high()?;
        self.delay.delay_us(HALF_PERIOD_US);
        self.sck.set_high()?;
        self.delay.delay_us(HALF_PERIOD_US);

        self.cs.set_low()?;
        self.delay.delay_us(HALF_PERIOD_US);

        for bit in word.bits() {
            self.sck.set_low()?;
            self.delay.delay_us(HALF_PERIOD_US);
            self.sda.set_state(PinState::from(bit))?;
            self.delay.delay_us(HALF_PERIOD_US);
            self.sck.set_high()?;
            self.delay.delay_us(HALF_PERIOD_US);
        }

        self.cs.set_high()?;
        self.delay.delay_us(HALF_PERIOD_US);

        Ok(())
    }

    /// Delay provider shared with the power sequencer
    pub fn delay(&mut self) -> &mut D {
        &mut self.delay
    }

    /// Give back the lines and the delay provider
    pub fn release(self) -> (P, P, P, D) {
        (self.cs, self.sck, self.sda, self.delay)
    }
}
