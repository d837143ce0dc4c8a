//! Streaming state machine and control surface.
//!
//! One [`Ws2812`] maps to one physical output channel. `update`, `status`
//! and `abort` run in normal program flow; [`Ws2812::on_transfer_event`] is
//! called from the transfer-progress interrupt and refills the half of the
//! queue that just drained. The refill must finish before the transfer
//! engine wraps back into that half, which leaves one frame period of
//! budget (~30 us at the calibrated timing).
//!
//! The state check is the only synchronization between the two contexts, so
//! normal-flow calls must not race an in-flight interrupt; wrap the driver
//! in [`crate::SharedWs2812`] unless the host sequences access itself.

use crate::encode::{encode_frame, encode_reset};
use crate::queue::{BitQueue, Half};
use crate::timing::{FRAME_NS, RESET_CYCLES, RESET_PERIOD_NS};
use crate::{PwmDma, Rgb};

/// Lifecycle of one streaming cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Output stopped, ready for a new cycle.
    Idle,
    /// Pixel frames are streaming; `frame` is the last pixel encoded.
    Active { frame: usize },
    /// The latch hold is running; `cycle` is the last reset block encoded.
    Resetting { cycle: u32 },
}

/// Errors reported by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An update was requested while a cycle is still in flight.
    Busy,
    /// An abort was requested with no cycle in flight.
    NotRunning,
}

/// Progress signals raised by the transfer engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferEvent {
    /// The first half of the queue has drained.
    HalfComplete,
    /// The second half has drained; the transfer wraps to the start.
    Complete,
    /// The transfer engine reported an error condition.
    Fault,
}

/// Control block for one string of WS2812B LEDs.
///
/// Owns the duty queue and borrows the pixel store for its lifetime; the
/// store is addressed through [`Ws2812::pixels_mut`] between cycles.
/// Created once per string, no allocation afterwards.
///
/// # Usage
///
/// ```ignore
/// let mut strip = Ws2812::new(backend, &mut pixels);
///
/// strip.pixels_mut()[0] = Rgb::new(255, 0, 0);
/// strip.update()?;
///
/// // from the DMA interrupt handler:
/// strip.on_transfer_event(TransferEvent::HalfComplete);
/// ```
pub struct Ws2812<'a, D: PwmDma> {
    backend: D,
    pixels: &'a mut [Rgb],
    queue: BitQueue,
    state: State,
}

impl<'a, D: PwmDma> Ws2812<'a, D> {
    /// Bind a backend and pixel store to one output channel.
    ///
    /// Clears the pixel store and starts out idle.
    pub fn new(backend: D, pixels: &'a mut [Rgb]) -> Self {
        pixels.fill(Rgb::default());
        Self {
            backend,
            pixels,
            queue: BitQueue::new(),
            state: State::Idle,
        }
    }

    /// Begin streaming the pixel store to the string.
    ///
    /// Encodes the first two frames (or, for a single-pixel store, the
    /// frame and the first latch block), then starts the circular transfer.
    /// Further control happens in [`Ws2812::on_transfer_event`]. Progress
    /// can be polled with [`Ws2812::status`] and the cycle cancelled with
    /// [`Ws2812::abort`].
    ///
    /// Returns [`Error::Busy`] and changes nothing if a cycle is already in
    /// flight. An empty pixel store is a no-op.
    pub fn update(&mut self) -> Result<(), Error> {
        if self.state != State::Idle {
            return Err(Error::Busy);
        }

        match self.pixels.len() {
            0 => return Ok(()),
            // Single pixel: the second half already starts the latch hold.
            1 => {
                encode_frame(self.queue.slot_mut(Half::First), self.pixels[0]);
                encode_reset(self.queue.slot_mut(Half::Second));
                self.state = State::Resetting { cycle: 0 };
            }
            _ => {
                encode_frame(self.queue.slot_mut(Half::First), self.pixels[0]);
                encode_frame(self.queue.slot_mut(Half::Second), self.pixels[1]);
                self.state = State::Active { frame: 1 };
            }
        }

        self.backend.start(self.queue.as_slice());
        Ok(())
    }

    /// Approximate time until the string goes idle.
    ///
    /// Returns 0 when idle. While a cycle is in flight the estimate is a
    /// negative whole-microsecond count that shrinks toward -1 and floors
    /// there until the state machine actually reaches idle, so a busy
    /// driver never reports 0.
    pub fn status(&self) -> i32 {
        match self.state {
            State::Idle => 0,
            State::Active { frame } => {
                let frames = frame as i32 - self.pixels.len() as i32 + 1;
                (frames * FRAME_NS as i32 - RESET_PERIOD_NS as i32) / 1000
            }
            State::Resetting { cycle } => {
                let frames = cycle as i32 - RESET_CYCLES as i32 + 1;
                let remaining_ns = frames * FRAME_NS as i32;
                if remaining_ns == 0 { -1 } else { remaining_ns / 1000 }
            }
        }
    }

    /// Cancel the cycle in flight and stop the transfer engine.
    ///
    /// Returns [`Error::NotRunning`] if the driver is idle. The output line
    /// may be left mid-waveform; the string only latches what it received
    /// if the line then idles low for the minimum reset interval.
    pub fn abort(&mut self) -> Result<(), Error> {
        if self.state == State::Idle {
            return Err(Error::NotRunning);
        }
        self.backend.stop();
        self.state = State::Idle;
        Ok(())
    }

    /// Handle a progress signal from the transfer engine.
    ///
    /// Must be called from the transfer interrupt before its flags are
    /// cleared. Refills the half that just drained with the next pixel
    /// frame or latch block, stops the engine once the latch hold is
    /// complete, and never fails outward: a fault, or a signal arriving
    /// while idle, force-stops the engine and leaves the driver idle.
    pub fn on_transfer_event(&mut self, event: TransferEvent) {
        let freed = match event {
            TransferEvent::HalfComplete => Half::First,
            TransferEvent::Complete => Half::Second,
            TransferEvent::Fault => {
                self.backend.stop();
                self.state = State::Idle;
                return;
            }
        };

        match self.state {
            // Anomaly: the engine should already be stopped. Stop it again
            // rather than re-encoding anything.
            State::Idle => self.backend.stop(),
            State::Active { frame } => {
                let next = frame + 1;
                if next < self.pixels.len() {
                    encode_frame(self.queue.slot_mut(freed), self.pixels[next]);
                    self.state = State::Active { frame: next };
                } else {
                    encode_reset(self.queue.slot_mut(freed));
                    self.state = State::Resetting { cycle: 0 };
                }
            }
            State::Resetting { cycle } => {
                if cycle + 1 < RESET_CYCLES {
                    encode_reset(self.queue.slot_mut(freed));
                    self.state = State::Resetting { cycle: cycle + 1 };
                } else {
                    // Latch hold complete; the in-flight half is abandoned.
                    self.backend.stop();
                    self.state = State::Idle;
                }
            }
        }
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> State {
        self.state
    }

    /// Whether a new cycle can be started.
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    /// The pixel store.
    pub fn pixels(&self) -> &[Rgb] {
        self.pixels
    }

    /// Mutable access to the pixel store.
    ///
    /// Mutate between cycles; writes while a cycle is in flight are safe
    /// but frames already encoded keep their old colors.
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        self.pixels
    }

    /// Number of LEDs in the string.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the string has no LEDs.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The duty queue, as last encoded.
    pub const fn queue(&self) -> &BitQueue {
        &self.queue
    }

    /// The backend.
    pub const fn backend(&self) -> &D {
        &self.backend
    }

    /// Release the backend and pixel store.
    pub fn free(self) -> (D, &'a mut [Rgb]) {
        (self.backend, self.pixels)
    }
}
