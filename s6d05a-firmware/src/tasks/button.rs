//! User button task
//!
//! A short press steps through the brightness levels. A long press toggles
//! framebuffer blanking, which powers the panel down and back up.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use s6d05a_core::state::PanelEvent;

use crate::channels::PANEL_EVENTS;

/// Brightness levels cycled by short presses
const LEVELS: [u8; 5] = [255, 192, 128, 64, 16];

/// Contact bounce settle time
const DEBOUNCE: Duration = Duration::from_millis(20);

/// Hold time that makes a press long
const LONG_PRESS: Duration = Duration::from_millis(600);

/// Button task - turns presses into panel events
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    let mut level = 0;
    let mut blanked = false;

    loop {
        button.wait_for_falling_edge().await;
        Timer::after(DEBOUNCE).await;
        if button.is_high() {
            continue;
        }

        let press = select(button.wait_for_rising_edge(), Timer::after(LONG_PRESS)).await;
        let event = match press {
            Either::First(()) => {
                level = (level + 1) % LEVELS.len();
                PanelEvent::SetBrightness(LEVELS[level])
            }
            Either::Second(()) => {
                blanked = !blanked;
                button.wait_for_high().await;
                PanelEvent::FramebufferBlank(blanked)
            }
        };

        debug!("Button: {}", event);
        PANEL_EVENTS.send(event).await;
    }
}
