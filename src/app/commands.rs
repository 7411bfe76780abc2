//! Inbound commands to the control service.
//!
//! The motor, direction, and animate routes translate each request into
//! one of these; the boot path issues [`ControlCommand::Animate`] directly.
//! Patterns go through [`ControlService::apply_pattern`] because their
//! handler reports the outcome back.
//!
//! [`ControlService::apply_pattern`]: super::service::ControlService::apply_pattern

use super::pattern::Pattern;

/// `/dir` code that latches forward.
pub const DIR_CODE_FORWARD: i32 = 1;
/// `/dir` code that pulses reverse and snaps back forward.
pub const DIR_CODE_REVERSE_PULSE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// Invert one channel.  The raw id is range-checked by the model.
    ToggleChannel(i32),

    /// Apply a `/dir` code (1 = forward, 2 = reverse pulse, else ignored).
    Direction(i32),

    /// Run the full animation sequence.
    Animate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternOutcome {
    Applied(Pattern),
    /// Latch is reverse; outputs untouched.
    RefusedReverse,
    /// Latch is forward but no pattern was named; outputs untouched.
    NoneSelected,
}
