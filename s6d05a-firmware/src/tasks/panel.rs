//! Panel task
//!
//! Owns the attached panel and applies [`PanelEvent`]s in arrival order.
//! Nothing else touches the panel, so power sequences never interleave.
//!
//! [`PanelEvent`]: s6d05a_core::state::PanelEvent

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Delay;

use s6d05a_core::traits::Backlight;
use s6d05a_driver::{GpioRegulator, Panel};
use s6d05a_hal::{LinePool, PooledLine, SupplyTable, TableSupply};

use crate::channels::PANEL_EVENTS;

/// Control lines available to the panel
pub type PanelLines = LinePool<Output<'static>, 4>;

/// Switchable panel rails
pub type PanelRails = SupplyTable<GpioRegulator<Output<'static>>, 2>;

/// The panel as wired on this board
pub type BoardPanel =
    Panel<PooledLine<Output<'static>>, TableSupply<GpioRegulator<Output<'static>>>, Delay>;

/// Panel task - applies queued events to the panel
#[embassy_executor::task]
pub async fn panel_task(mut panel: BoardPanel) {
    info!("Panel task started");

    loop {
        let event = PANEL_EVENTS.receive().await;

        match panel.handle_event(event) {
            Ok(()) => debug!(
                "Panel {} at brightness {}",
                panel.state(),
                panel.get_brightness()
            ),
            Err(e) => warn!("Panel event {} failed: {}", event, e),
        }
    }
}
