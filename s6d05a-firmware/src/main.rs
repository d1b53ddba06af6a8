//! S6D05A panel bring-up firmware
//!
//! Drives an S6D05A panel from an RP2040: four GPIOs for the serial
//! interface and reset, two load switches for the VCI and VDD3 rails and a
//! user button for brightness and blanking.
//!
//! Pin assignments (Raspberry Pi Pico):
//! - GPIO2..GPIO5: reset, chip select, clock, data (see panel.toml)
//! - GPIO6: VCI load switch enable
//! - GPIO7: VDD3 load switch enable
//! - GPIO15: user button to ground

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use s6d05a_core::config::{DEFAULT_VCI_SUPPLY, DEFAULT_VDD3_SUPPLY};
use s6d05a_driver::{GpioRegulator, Panel};
use s6d05a_hal::{LineId, LinePool, SupplyTable};

use crate::tasks::{BoardPanel, PanelLines, PanelRails};

mod channels;
mod config;
mod tasks;

/// VCI rail output voltage
const VCI_MICROVOLTS: u32 = 3_000_000;

/// VDD3 rail output voltage
const VDD3_MICROVOLTS: u32 = 1_800_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("S6D05A firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = unwrap!(config::load());
    info!(
        "Panel lines: reset={} cs={} sck={} sda={}",
        config.lines.reset.number(),
        config.lines.cs.number(),
        config.lines.sck.number(),
        config.lines.sda.number()
    );

    // Line levels are set again on claim
    let mut lines: PanelLines = LinePool::new([
        (LineId::new(2), Output::new(p.PIN_2, Level::Low)),
        (LineId::new(3), Output::new(p.PIN_3, Level::High)),
        (LineId::new(4), Output::new(p.PIN_4, Level::Low)),
        (LineId::new(5), Output::new(p.PIN_5, Level::Low)),
    ]);

    let vci = unwrap!(GpioRegulator::new_active_high(
        Output::new(p.PIN_6, Level::Low),
        VCI_MICROVOLTS
    ));
    let vdd3 = unwrap!(GpioRegulator::new_active_high(
        Output::new(p.PIN_7, Level::Low),
        VDD3_MICROVOLTS
    ));
    let mut supplies: PanelRails =
        SupplyTable::new([(DEFAULT_VCI_SUPPLY, vci), (DEFAULT_VDD3_SUPPLY, vdd3)]);

    let panel: BoardPanel = match Panel::attach(&config, &mut lines, &mut supplies, Delay) {
        Ok(panel) => panel,
        Err(e) => {
            error!("Panel attach failed: {}", e);
            return;
        }
    };
    info!("Panel attached, brightness {}", panel.brightness());

    let button = Input::new(p.PIN_15, Pull::Up);

    spawner.spawn(tasks::panel_task(panel)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();

    info!("All tasks spawned");
}
