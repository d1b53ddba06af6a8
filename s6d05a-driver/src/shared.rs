//! Panel shared between call sites
//!
//! The panel itself does no locking. When brightness requests and power
//! management hooks come from different places, wrap it in a
//! [`SharedPanel`]: every operation holds the lock for the whole
//! transition, so two power sequences never interleave.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use s6d05a_core::state::{PanelEvent, PowerState};
use s6d05a_core::traits::Backlight;
use s6d05a_hal::Regulator;

use crate::error::PanelError;
use crate::panel::Panel;

/// A panel behind an embassy-sync blocking mutex
pub struct SharedPanel<M: RawMutex, P, R, D> {
    inner: Mutex<M, RefCell<Panel<P, R, D>>>,
}

impl<M, P, R, D> SharedPanel<M, P, R, D>
where
    M: RawMutex,
    P: OutputPin,
    R: Regulator,
    D: DelayNs,
{
    /// Wrap an attached panel
    pub fn new(panel: Panel<P, R, D>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(panel)),
        }
    }

    /// Run `f` with exclusive access to the panel
    ///
    /// `f` must not call back into the same `SharedPanel`.
    pub fn lock<T>(&self, f: impl FnOnce(&mut Panel<P, R, D>) -> T) -> T {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// See [`Panel::update`]
    pub fn update(
        &self,
        requested: u8,
        blanked: bool,
        suspended: bool,
    ) -> Result<(), PanelError<P::Error>> {
        self.lock(|panel| panel.update(requested, blanked, suspended))
    }

    /// See [`Panel::handle_event`]
    pub fn handle_event(&self, event: PanelEvent) -> Result<(), PanelError<P::Error>> {
        self.lock(|panel| panel.handle_event(event))
    }

    /// See [`Panel::suspend`]
    pub fn suspend(&self) -> Result<(), PanelError<P::Error>> {
        self.lock(|panel| panel.suspend())
    }

    /// See [`Panel::resume`]
    pub fn resume(&self) -> Result<(), PanelError<P::Error>> {
        self.lock(|panel| panel.resume())
    }

    /// Brightness currently shown
    pub fn get_brightness(&self) -> u8 {
        self.lock(|panel| panel.get_brightness())
    }

    /// Current power state
    pub fn state(&self) -> PowerState {
        self.lock(|panel| panel.state())
    }

    /// Take the panel back, e.g. to detach it
    pub fn into_inner(self) -> Panel<P, R, D> {
        self.inner.into_inner().into_inner()
    }
}
