//! Events that drive the panel

use crate::traits::backlight::BlankMode;

/// Requests delivered to the panel handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelEvent {
    // Backlight framework events
    /// New requested brightness (0-255)
    SetBrightness(u8),
    /// Backlight power mode changed
    Blank(BlankMode),
    /// Framebuffer blanked (`true`) or unblanked (`false`)
    FramebufferBlank(bool),

    // Power management events
    /// System is going to sleep
    Suspend,
    /// System woke up
    Resume,
}
