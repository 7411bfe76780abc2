//! Channel output bank: six active-HIGH digital lines ("motors" 1–6).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub const CHANNEL_LINES: usize = pins::CHANNEL_GPIOS.len();

pub struct ChannelBank {
    levels: [bool; CHANNEL_LINES],
}

impl ChannelBank {
    pub fn new() -> Self {
        Self {
            levels: [false; CHANNEL_LINES],
        }
    }

    /// Drive line `index` (0-based). Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, high: bool) {
        let Some(&gpio) = pins::CHANNEL_GPIOS.get(index) else {
            return;
        };
        hw_init::gpio_write(gpio, high);
        self.levels[index] = high;
    }

    pub fn levels(&self) -> [bool; CHANNEL_LINES] {
        self.levels
    }
}
