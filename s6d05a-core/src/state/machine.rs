//! Panel power state machine
//!
//! The panel is either OFF or ON. Every change between the two runs one
//! full power sequence; asking for the state the panel is already in is
//! a no-op.

/// Panel power states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Rails off (or reset held), controller asleep
    #[default]
    Off,
    /// Controller initialized and displaying
    On,
}

/// A power sequence that has to run to change state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Reset, rails on, power-on sequence
    PowerOn,
    /// Power-off sequence, reset, rails off
    PowerOff,
}

impl Transition {
    /// State reached once the transition has completed
    pub fn target(self) -> PowerState {
        match self {
            Transition::PowerOn => PowerState::On,
            Transition::PowerOff => PowerState::Off,
        }
    }
}

impl PowerState {
    /// State for a boolean "should be on"
    pub fn from_on(on: bool) -> Self {
        if on {
            PowerState::On
        } else {
            PowerState::Off
        }
    }

    /// Check if the panel is on
    pub fn is_on(self) -> bool {
        self == PowerState::On
    }

    /// Transition needed to reach `target`, if any
    pub fn transition_to(self, target: PowerState) -> Option<Transition> {
        match (self, target) {
            (PowerState::Off, PowerState::On) => Some(Transition::PowerOn),
            (PowerState::On, PowerState::Off) => Some(Transition::PowerOff),
            _ => None,
        }
    }
}
