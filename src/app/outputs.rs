//! Output state model: six channels plus the direction latch.
//!
//! [`OutputModel`] is the single owner of channel and direction state. It
//! keeps a shadow copy and mirrors every mutation onto the [`OutputPort`],
//! so the shadow always equals the last level written to each line.
//!
//! Raw ids arrive straight from query strings; anything outside 1–6 is
//! ignored without error.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::ports::OutputPort;

/// Number of independently switchable channels.
pub const CHANNEL_COUNT: usize = 6;

// ───────────────────────────────────────────────────────────────
// ChannelId
// ───────────────────────────────────────────────────────────────

/// A validated channel identifier in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelId(u8);

impl ChannelId {
    pub const CH1: Self = Self(1);
    pub const CH2: Self = Self(2);
    pub const CH3: Self = Self(3);
    pub const CH4: Self = Self(4);
    pub const CH5: Self = Self(5);
    pub const CH6: Self = Self(6);

    pub const ALL: [Self; CHANNEL_COUNT] = [
        Self::CH1,
        Self::CH2,
        Self::CH3,
        Self::CH4,
        Self::CH5,
        Self::CH6,
    ];

    /// `None` unless `raw` is in `1..=6`.
    pub fn new(raw: i32) -> Option<Self> {
        if (1..=CHANNEL_COUNT as i32).contains(&raw) {
            Some(Self(raw as u8))
        } else {
            None
        }
    }

    /// 1-based id as shown on the control page.
    pub fn get(self) -> u8 {
        self.0
    }

    /// 0-based index into channel arrays.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

// ───────────────────────────────────────────────────────────────
// Direction
// ───────────────────────────────────────────────────────────────

/// The binary direction latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

// ───────────────────────────────────────────────────────────────
// Snapshot
// ───────────────────────────────────────────────────────────────

/// Point-in-time view of every output, suitable for JSON or logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSnapshot {
    pub channels: [bool; CHANNEL_COUNT],
    pub direction: Direction,
}

impl OutputSnapshot {
    pub fn energized_count(&self) -> usize {
        self.channels.iter().filter(|&&on| on).count()
    }
}

// ───────────────────────────────────────────────────────────────
// OutputModel
// ───────────────────────────────────────────────────────────────

pub struct OutputModel<O: OutputPort> {
    port: O,
    energized: [bool; CHANNEL_COUNT],
    direction: Direction,
}

impl<O: OutputPort> OutputModel<O> {
    /// Take ownership of the port and drive it to the boot state:
    /// every channel off, direction forward.
    pub fn new(port: O) -> Self {
        let mut model = Self {
            port,
            energized: [false; CHANNEL_COUNT],
            direction: Direction::Forward,
        };
        for id in ChannelId::ALL {
            model.port.write_channel(id, false);
        }
        model.port.write_direction(Direction::Forward);
        model
    }

    // ── Channels ──────────────────────────────────────────────

    /// Set a channel directly.  Ids outside 1–6 are ignored.
    pub fn set_channel(&mut self, raw_id: i32, energized: bool) -> Option<ChannelId> {
        let id = ChannelId::new(raw_id)?;
        self.set(id, energized);
        Some(id)
    }

    /// Invert a channel.  Returns the new level, or `None` for an invalid id.
    pub fn toggle_channel(&mut self, raw_id: i32) -> Option<(ChannelId, bool)> {
        let id = ChannelId::new(raw_id)?;
        let next = !self.energized[id.index()];
        self.set(id, next);
        Some((id, next))
    }

    pub fn set(&mut self, id: ChannelId, energized: bool) {
        self.energized[id.index()] = energized;
        self.port.write_channel(id, energized);
    }

    pub fn all_off(&mut self) {
        for id in ChannelId::ALL {
            self.set(id, false);
        }
    }

    pub fn energize_all(&mut self) {
        for id in ChannelId::ALL {
            self.set(id, true);
        }
    }

    /// Off for any id outside 1–6.
    pub fn is_energized(&self, raw_id: i32) -> bool {
        ChannelId::new(raw_id).is_some_and(|id| self.energized[id.index()])
    }

    // ── Direction ─────────────────────────────────────────────

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.port.write_direction(direction);
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn snapshot(&self) -> OutputSnapshot {
        OutputSnapshot {
            channels: self.energized,
            direction: self.direction,
        }
    }

    pub fn port(&self) -> &O {
        &self.port
    }
}
