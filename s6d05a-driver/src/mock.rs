//! Test doubles
//!
//! Pins, regulators and the delay provider all append to one shared
//! [`Trace`], so tests can check the relative order of line writes, rail
//! switching and delays, and decode the words that went out on the wire.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

use s6d05a_core::config::{PanelConfig, PanelLines};
use s6d05a_hal::{LineId, LinePool, PooledLine, Regulator, RegulatorError, SupplyTable, TableSupply};

use crate::panel::Panel;

/// One recorded hardware interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Pin(&'static str, bool),
    Enable(&'static str),
    Disable(&'static str),
    DelayUs(u32),
    DelayMs(u32),
}

#[derive(Default)]
struct TraceInner {
    events: Vec<TraceEvent>,
    failing: Vec<&'static str>,
}

/// Shared, clonable event log
#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<TraceInner>>);

impl Trace {
    fn push(&self, event: TraceEvent) {
        self.0.borrow_mut().events.push(event);
    }

    fn is_failing(&self, name: &str) -> bool {
        self.0.borrow().failing.iter().any(|n| *n == name)
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    /// Make every further operation on the named pin or regulator fail
    pub fn fail(&self, name: &'static str) {
        self.0.borrow_mut().failing.push(name);
    }

    pub fn heal(&self, name: &'static str) {
        self.0.borrow_mut().failing.retain(|n| *n != name);
    }

    /// Last level written to the named pin
    pub fn level(&self, name: &str) -> Option<bool> {
        self.0.borrow().events.iter().rev().find_map(|e| match e {
            TraceEvent::Pin(n, level) if *n == name => Some(*level),
            _ => None,
        })
    }

    /// Index of the first event matching `event`
    pub fn position(&self, event: &TraceEvent) -> Option<usize> {
        self.0.borrow().events.iter().position(|e| e == event)
    }

    pub fn count(&self, event: &TraceEvent) -> usize {
        self.0.borrow().events.iter().filter(|e| *e == event).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl digital::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin recording its writes
pub struct MockPin {
    name: &'static str,
    trace: Trace,
}

pub fn pin(name: &'static str, trace: &Trace) -> MockPin {
    MockPin {
        name,
        trace: trace.clone(),
    }
}

impl MockPin {
    fn write(&mut self, level: bool) -> Result<(), MockError> {
        if self.trace.is_failing(self.name) {
            return Err(MockError);
        }
        self.trace.push(TraceEvent::Pin(self.name, level));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), MockError> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), MockError> {
        self.write(true)
    }
}

/// Delay provider recording requested delays instead of waiting
pub struct MockDelay {
    trace: Trace,
}

impl MockDelay {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.push(TraceEvent::DelayUs(ns.div_ceil(1000)));
    }

    fn delay_us(&mut self, us: u32) {
        self.trace.push(TraceEvent::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.trace.push(TraceEvent::DelayMs(ms));
    }
}

/// Regulator recording enable/disable calls
pub struct MockRegulator {
    name: &'static str,
    trace: Trace,
    on: bool,
}

pub fn regulator(name: &'static str, trace: &Trace) -> MockRegulator {
    MockRegulator {
        name,
        trace: trace.clone(),
        on: false,
    }
}

impl Regulator for MockRegulator {
    fn enable(&mut self) -> Result<(), RegulatorError> {
        if self.trace.is_failing(self.name) {
            return Err(RegulatorError::Failure);
        }
        self.on = true;
        self.trace.push(TraceEvent::Enable(self.name));
        Ok(())
    }

    fn disable(&mut self) -> Result<(), RegulatorError> {
        if self.trace.is_failing(self.name) {
            return Err(RegulatorError::Failure);
        }
        self.on = false;
        self.trace.push(TraceEvent::Disable(self.name));
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.on
    }
}

/// Rebuild the 9-bit words seen on the cs/sck/sda lines
///
/// A bit is sampled on every rising clock edge while chip select is low;
/// a word is complete when chip select goes high after nine bits.
pub fn decode_words(trace: &Trace) -> Vec<u16> {
    decode_events(&trace.events())
}

pub fn decode_events(events: &[TraceEvent]) -> Vec<u16> {
    let (mut cs, mut sck, mut sda) = (true, false, false);
    let (mut word, mut bits) = (0u16, 0u32);
    let mut words = Vec::new();

    for event in events {
        let TraceEvent::Pin(name, level) = *event else {
            continue;
        };
        match name {
            "cs" => {
                if cs && !level {
                    word = 0;
                    bits = 0;
                } else if !cs && level && bits == 9 {
                    words.push(word);
                }
                cs = level;
            }
            "sck" => {
                if !sck && level && !cs {
                    word = (word << 1) | sda as u16;
                    bits += 1;
                }
                sck = level;
            }
            "sda" => sda = level,
            _ => {}
        }
    }

    words
}

/// Group decoded words into `(opcode, parameters)` pairs
pub fn decode_commands(words: &[u16]) -> Vec<(u8, Vec<u8>)> {
    let mut commands: Vec<(u8, Vec<u8>)> = Vec::new();
    for &word in words {
        if word & 0x100 == 0 {
            commands.push((word as u8, Vec::new()));
        } else if let Some((_, params)) = commands.last_mut() {
            params.push(word as u8);
        }
    }
    commands
}

pub const VCI: &str = "lcd_vci";
pub const VDD3: &str = "lcd_vdd3";

pub type TestLines = LinePool<MockPin, 4>;
pub type TestSupplies = SupplyTable<MockRegulator, 2>;
pub type TestPanel = Panel<PooledLine<MockPin>, TableSupply<MockRegulator>, MockDelay>;

pub fn config() -> PanelConfig {
    PanelConfig::new(PanelLines {
        reset: LineId(1),
        cs: LineId(2),
        sck: LineId(3),
        sda: LineId(4),
    })
}

pub fn lines(trace: &Trace) -> TestLines {
    LinePool::new([
        (LineId(1), pin("reset", trace)),
        (LineId(2), pin("cs", trace)),
        (LineId(3), pin("sck", trace)),
        (LineId(4), pin("sda", trace)),
    ])
}

pub fn supplies(trace: &Trace) -> TestSupplies {
    SupplyTable::new([(VCI, regulator(VCI, trace)), (VDD3, regulator(VDD3, trace))])
}

/// Attach a panel with both rails fitted
pub fn attached(trace: &Trace) -> (TestPanel, TestLines, TestSupplies) {
    let mut lines = lines(trace);
    let mut supplies = supplies(trace);
    let panel = Panel::attach(&config(), &mut lines, &mut supplies, MockDelay::new(trace))
        .unwrap_or_else(|_| panic!("attach failed"));
    (panel, lines, supplies)
}
