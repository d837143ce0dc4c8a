//! Interrupt-safe handle for a driver shared between normal flow and the
//! transfer-progress interrupt.
//!
//! The driver's state check is only a valid guard if normal-flow calls
//! cannot race the interrupt. This wrapper masks interrupts around every
//! operation via `critical-section`, so `update`/`abort` from the main loop
//! and `on_transfer_event` from the interrupt handler can share one driver.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::{Error, PwmDma, TransferEvent, Ws2812};

/// A driver behind a critical-section mutex.
pub struct SharedWs2812<'a, D: PwmDma> {
    inner: Mutex<RefCell<Ws2812<'a, D>>>,
}

impl<'a, D: PwmDma> SharedWs2812<'a, D> {
    pub const fn new(driver: Ws2812<'a, D>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Run `f` with exclusive access to the driver.
    pub fn with<R>(&self, f: impl FnOnce(&mut Ws2812<'a, D>) -> R) -> R {
        critical_section::with(|cs| {
            let mut driver = self.inner.borrow(cs).borrow_mut();
            f(&mut driver)
        })
    }

    /// Begin streaming; see [`Ws2812::update`].
    pub fn update(&self) -> Result<(), Error> {
        self.with(|driver| driver.update())
    }

    /// Poll progress; see [`Ws2812::status`].
    pub fn status(&self) -> i32 {
        self.with(|driver| driver.status())
    }

    /// Cancel the cycle in flight; see [`Ws2812::abort`].
    pub fn abort(&self) -> Result<(), Error> {
        self.with(|driver| driver.abort())
    }

    /// Forward a progress signal from the transfer interrupt.
    pub fn on_transfer_event(&self, event: TransferEvent) {
        self.with(|driver| driver.on_transfer_event(event));
    }
}
