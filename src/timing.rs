//! WS2812B protocol timing, calibrated for a 48 MHz timer clock (21 ns tick).
//!
//! Each protocol bit occupies one 1.25 us carrier period and the string
//! latches after 50 us of continuous low output. 50 us is 40 carrier
//! periods, which rounds up to 2 whole queue frames.
//!
//! These are compile-time calibration constants, not runtime configuration.
//! `ZERO_CODE` and `ONE_CODE` must be rederived if the timer clock changes:
//! the 0-bit high time has to stay within 30-40% of the carrier period and
//! the 1-bit high time within 60-80%.

/// Carrier period of one protocol bit, in nanoseconds.
pub const PWM_PERIOD_NS: u32 = 1250;

/// Minimum continuous low interval that latches the string, in nanoseconds.
pub const RESET_PERIOD_NS: u32 = 50_000;

/// Latch interval expressed in whole queue frames, rounded up.
pub const RESET_CYCLES: u32 = 2;

/// Compare threshold for a protocol 0 bit: 19 ticks ~ 399 ns (~32% duty).
pub const ZERO_CODE: u32 = 19;

/// Compare threshold for a protocol 1 bit: 38 ticks ~ 798 ns (~64% duty).
pub const ONE_CODE: u32 = 38;

/// Bits per color channel.
pub const BITS_PER_CHANNEL: usize = 8;

/// Color channels per pixel.
pub const CHANNELS: usize = 3;

/// Duty codes in one frame: one pixel, or one latch block.
pub const FRAME_LEN: usize = BITS_PER_CHANNEL * CHANNELS;

/// Frames held by the duty queue.
pub const QUEUE_FRAMES: usize = 2;

/// Total duty codes in the duty queue.
pub const QUEUE_LEN: usize = FRAME_LEN * QUEUE_FRAMES;

/// Duration of one frame on the wire, in nanoseconds.
pub const FRAME_NS: u32 = FRAME_LEN as u32 * PWM_PERIOD_NS;

// The latch hold must cover the minimum reset interval.
const _: () = assert!(RESET_CYCLES * FRAME_NS >= RESET_PERIOD_NS);
