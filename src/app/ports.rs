//! Port traits: the hexagonal boundary between control logic and hardware.
//!
//! ```text
//!   Route handlers ──▶ ControlService ──▶ OutputPort ──▶ GPIO
//!                                    └──▶ EventSink  ──▶ log
//! ```
//!
//! Blocking delays go through [`embedded_hal::delay::DelayNs`] rather than
//! a bespoke port, so FreeRTOS delays, host sleeps, and test recorders are
//! interchangeable.

use super::outputs::{ChannelId, Direction};

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → GPIO)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the output model calls this after every state change.
///
/// Pin writes are assumed infallible; implementations log and swallow
/// any platform error.
pub trait OutputPort {
    /// Drive one channel line.
    fn write_channel(&mut self, channel: ChannelId, energized: bool);

    /// Drive the direction bridge.
    fn write_direction(&mut self, direction: Direction);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The control core emits structured [`ControlEvent`](super::events::ControlEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::ControlEvent);
}

impl<T: OutputPort + ?Sized> OutputPort for &mut T {
    fn write_channel(&mut self, channel: ChannelId, energized: bool) {
        (**self).write_channel(channel, energized);
    }

    fn write_direction(&mut self, direction: Direction) {
        (**self).write_direction(direction);
    }
}
