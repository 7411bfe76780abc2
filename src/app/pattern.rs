//! Named channel patterns.
//!
//! A pattern is a hard-coded channel subset applied exclusively: every
//! channel is cleared first, then the subset is energized.

use core::fmt;

use super::outputs::ChannelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Motor 1.
    A,
    /// Motors 1 and 3.
    B,
    /// Motors 1 and 2.
    C,
}

impl Pattern {
    /// Query-parameter precedence: `a` wins over `b`, `b` over `c`.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    pub fn channels(self) -> &'static [ChannelId] {
        match self {
            Self::A => &[ChannelId::CH1],
            Self::B => &[ChannelId::CH1, ChannelId::CH3],
            Self::C => &[ChannelId::CH1, ChannelId::CH2],
        }
    }

    /// Query parameter that selects this pattern.
    pub fn param(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        }
    }

    /// Response body sent once the pattern is applied.
    pub fn description(self) -> &'static str {
        match self {
            Self::A => "Pattern A set (Motor 1 on)",
            Self::B => "Pattern B set (Motors 1+3 on)",
            Self::C => "Pattern C set (Motors 1+2 on)",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        };
        f.write_str(name)
    }
}
