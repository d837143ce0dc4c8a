#![no_std]

pub mod driver;
pub mod encode;
pub mod queue;
pub mod shared;
pub mod timing;

pub use driver::{Error, State, TransferEvent, Ws2812};
pub use queue::{BitQueue, Half};
pub use shared::SharedWs2812;

use smart_leds::RGB8;

/// Pixel type: three independent 8-bit channel intensities.
pub type Rgb = RGB8;

/// Abstract timer/DMA backend driving one PWM output line.
///
/// Implement this trait to bind the driver to a concrete platform, e.g. a
/// timer compare channel fed by a circular DMA stream. The driver is
/// generic over it.
///
/// Contract: `start` begins a circular copy of `duty_codes` into the
/// compare register, one code per carrier period, and the backend raises a
/// progress interrupt each time half of the buffer has drained (forwarded
/// to the driver as a [`TransferEvent`]). The buffer stays in use by the
/// hardware until `stop`.
pub trait PwmDma {
    /// Begin a circular transfer of `duty_codes` to the output channel.
    fn start(&mut self, duty_codes: &[u32]);

    /// Stop the transfer and the PWM output.
    fn stop(&mut self);
}
