//! Hardware adapter: bridges the GPIO drivers to the [`OutputPort`].
//!
//! Owns the [`DirectionBridge`] and [`ChannelBank`].  This is the only
//! module in the system that touches output lines.  On non-espidf targets
//! the underlying drivers track levels in memory.

use crate::app::outputs::{ChannelId, Direction};
use crate::app::ports::OutputPort;
use crate::drivers::channels::{CHANNEL_LINES, ChannelBank};
use crate::drivers::direction::DirectionBridge;

pub struct HardwareAdapter {
    bridge: DirectionBridge,
    channels: ChannelBank,
}

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareAdapter {
    pub fn new() -> Self {
        Self {
            bridge: DirectionBridge::new(),
            channels: ChannelBank::new(),
        }
    }

    /// Logical levels of (IN1, IN2).
    pub fn bridge_levels(&self) -> (bool, bool) {
        self.bridge.levels()
    }

    pub fn channel_levels(&self) -> [bool; CHANNEL_LINES] {
        self.channels.levels()
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl OutputPort for HardwareAdapter {
    fn write_channel(&mut self, channel: ChannelId, energized: bool) {
        self.channels.set(channel.index(), energized);
    }

    fn write_direction(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.bridge.forward(),
            Direction::Reverse => self.bridge.reverse(),
        }
    }
}
