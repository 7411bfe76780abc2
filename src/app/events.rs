//! Outbound control events.
//!
//! The [`ControlService`](super::service::ControlService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use super::outputs::{ChannelId, Direction, OutputSnapshot};
use super::pattern::Pattern;

#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// A channel was toggled to the given level.
    ChannelToggled { channel: ChannelId, energized: bool },

    /// `/motor` named a channel outside 1–6.
    ChannelIgnored(i32),

    /// The direction latch was set.
    DirectionSet(Direction),

    /// A reverse pulse finished: latch back forward, every channel off.
    ReversePulse { hold_ms: u32 },

    /// `/dir` carried a code other than 1 or 2.
    DirectionIgnored(i32),

    PatternApplied(Pattern),

    /// A pattern request arrived while the latch was reverse.
    PatternRefused,

    /// A pattern request named none of a/b/c.
    PatternMissing,

    AnimationStarted,

    /// The animation ran to completion (carries the resting state).
    AnimationFinished(OutputSnapshot),
}
