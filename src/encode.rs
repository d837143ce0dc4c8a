//! Pixel-to-waveform encoders.
//!
//! A frame is 24 duty codes, one per protocol bit. The WS2812B shift
//! register is organized G[8] R[8] B[8], most significant bit first, so the
//! green channel lands at the start of the slot regardless of how the pixel
//! type orders its fields.

use crate::Rgb;
use crate::timing::{BITS_PER_CHANNEL, FRAME_LEN, ONE_CODE, ZERO_CODE};

/// Encode one pixel into a queue slot, in GRB wire order.
pub fn encode_frame(slot: &mut [u32; FRAME_LEN], pixel: Rgb) {
    encode_channel(slot, 0, pixel.g);
    encode_channel(slot, BITS_PER_CHANNEL, pixel.r);
    encode_channel(slot, 2 * BITS_PER_CHANNEL, pixel.b);
}

/// Fill a queue slot with the off code, holding the line low for one
/// frame period of the latch interval.
pub fn encode_reset(slot: &mut [u32; FRAME_LEN]) {
    slot.fill(0);
}

fn encode_channel(slot: &mut [u32; FRAME_LEN], offset: usize, value: u8) {
    for bit in 0..BITS_PER_CHANNEL {
        slot[offset + bit] = if value & (0x80 >> bit) != 0 {
            ONE_CODE
        } else {
            ZERO_CODE
        };
    }
}
