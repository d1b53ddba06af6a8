//! Backlight device abstraction
//!
//! A backlight device holds the requested brightness and the blank and
//! suspend flags set by the display stack. [`Backlight::update_status`]
//! pushes the combined state to hardware.

use crate::state::{PanelEvent, PowerState};

/// Highest brightness level
pub const MAX_BRIGHTNESS: u8 = 255;

/// Brightness applied on attach
pub const DEFAULT_BRIGHTNESS: u8 = MAX_BRIGHTNESS;

/// Display power mode requested by the display stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlankMode {
    /// Display on
    #[default]
    Unblank,
    /// Blanked, sync running
    Normal,
    /// Vertical sync suspended
    VSyncSuspend,
    /// Horizontal sync suspended
    HSyncSuspend,
    /// Fully powered down
    Powerdown,
}

/// Requested backlight state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightProps {
    /// Requested brightness, kept while the panel is off
    pub brightness: u8,
    /// Power mode
    pub power: BlankMode,
    /// Framebuffer is blanked
    pub fb_blank: bool,
    /// System is suspended
    pub suspended: bool,
}

impl Default for BacklightProps {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            power: BlankMode::Unblank,
            fb_blank: false,
            suspended: false,
        }
    }
}

impl BacklightProps {
    /// Highest brightness the device accepts
    pub const fn max_brightness(&self) -> u8 {
        MAX_BRIGHTNESS
    }

    /// Check if anything asks for the display to be blanked
    pub fn blanked(&self) -> bool {
        self.power != BlankMode::Unblank || self.fb_blank
    }

    /// Request or clear blanking directly
    ///
    /// Blanking sets the framebuffer blank flag. Unblanking clears both the
    /// flag and any blank power mode, so [`blanked`](Self::blanked) then
    /// matches `blank`.
    pub fn set_blanked(&mut self, blank: bool) {
        if blank == self.blanked() {
            return;
        }
        if blank {
            self.fb_blank = true;
        } else {
            self.power = BlankMode::Unblank;
            self.fb_blank = false;
        }
    }

    /// Power state these properties call for
    pub fn target_state(&self) -> PowerState {
        PowerState::from_on(!self.blanked() && !self.suspended)
    }

    /// Fold an event into the properties
    pub fn apply(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::SetBrightness(level) => self.brightness = level,
            PanelEvent::Blank(mode) => self.power = mode,
            PanelEvent::FramebufferBlank(blank) => self.fb_blank = blank,
            PanelEvent::Suspend => self.suspended = true,
            PanelEvent::Resume => self.suspended = false,
        }
    }
}

/// A device exposing brightness control to the display stack
pub trait Backlight {
    /// Error type for hardware updates
    type Error;

    /// Current requested properties
    fn props(&self) -> &BacklightProps;

    /// Mutable access to the requested properties
    ///
    /// Changes take effect on the next [`Backlight::update_status`].
    fn props_mut(&mut self) -> &mut BacklightProps;

    /// Apply the requested properties to hardware
    fn update_status(&mut self) -> Result<(), Self::Error>;

    /// Brightness actually shown (0 while the panel is off)
    fn get_brightness(&self) -> u8;
}
