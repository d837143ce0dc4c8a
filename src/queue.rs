//! Double-buffered duty-code queue.
//!
//! The queue holds exactly two frame-sized slots and is drained circularly
//! by the transfer engine. While one half is in flight the other is free to
//! rewrite; the driver enforces that ordering, the queue only provides the
//! addressed views.

use crate::timing::{FRAME_LEN, QUEUE_FRAMES};

/// Identifies one half of the duty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Half {
    /// Codes 0..FRAME_LEN, drained first after the transfer wraps.
    First,
    /// Codes FRAME_LEN..QUEUE_LEN.
    Second,
}

impl Half {
    const fn index(self) -> usize {
        match self {
            Half::First => 0,
            Half::Second => 1,
        }
    }
}

/// Fixed-size queue of duty codes for one output channel.
pub struct BitQueue {
    slots: [[u32; FRAME_LEN]; QUEUE_FRAMES],
}

impl BitQueue {
    pub const fn new() -> Self {
        Self {
            slots: [[0; FRAME_LEN]; QUEUE_FRAMES],
        }
    }

    /// View of one half.
    pub const fn slot(&self, half: Half) -> &[u32; FRAME_LEN] {
        &self.slots[half.index()]
    }

    /// Mutable view of one half, for refilling after it drains.
    pub const fn slot_mut(&mut self, half: Half) -> &mut [u32; FRAME_LEN] {
        &mut self.slots[half.index()]
    }

    /// The contiguous view handed to the transfer engine.
    pub fn as_slice(&self) -> &[u32] {
        self.slots.as_flattened()
    }
}

impl Default for BitQueue {
    fn default() -> Self {
        Self::new()
    }
}
