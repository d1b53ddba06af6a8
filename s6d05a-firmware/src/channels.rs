//! Inter-task communication channels

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use s6d05a_driver::events::EVENT_CHANNEL_SIZE;
use s6d05a_driver::PanelEventChannel;

/// Brightness, blank and power-management requests for the panel task
pub static PANEL_EVENTS: PanelEventChannel<CriticalSectionRawMutex, EVENT_CHANNEL_SIZE> =
    Channel::new();
