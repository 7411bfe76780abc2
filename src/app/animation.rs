//! Animation sequencer: the welcome sequence run at boot and on `/animate`.
//!
//! The sequence is a fixed table of [`Step`]s executed to completion on
//! the calling thread.  There is no cancellation: the caller blocks for
//! every [`Step::Hold`].
//!
//! ```text
//!  all on ─▶ FWD ─hold─▶ REV ─hold─▶ FWD ─hold─▶ REV ─hold─▶ FWD ─▶ all off
//! ```

use embedded_hal::delay::DelayNs;

use super::outputs::{Direction, OutputModel};
use super::ports::OutputPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    EnergizeAll,
    Drive(Direction),
    /// Block for one animation step interval.
    Hold,
    DeenergizeAll,
}

/// The welcome sequence.  Always rests forward with every channel off.
pub const WELCOME_SEQUENCE: [Step; 11] = [
    Step::EnergizeAll,
    Step::Drive(Direction::Forward),
    Step::Hold,
    Step::Drive(Direction::Reverse),
    Step::Hold,
    Step::Drive(Direction::Forward),
    Step::Hold,
    Step::Drive(Direction::Reverse),
    Step::Hold,
    Step::Drive(Direction::Forward),
    Step::DeenergizeAll,
];

pub struct Sequencer {
    step_ms: u32,
}

impl Sequencer {
    pub fn new(step_ms: u32) -> Self {
        Self { step_ms }
    }

    /// Total blocking time of one run, in milliseconds.
    pub fn total_hold_ms(&self) -> u32 {
        let holds = WELCOME_SEQUENCE
            .iter()
            .filter(|s| matches!(s, Step::Hold))
            .count() as u32;
        holds * self.step_ms
    }

    pub fn run<O: OutputPort>(&self, outputs: &mut OutputModel<O>, delay: &mut impl DelayNs) {
        for step in WELCOME_SEQUENCE {
            match step {
                Step::EnergizeAll => outputs.energize_all(),
                Step::Drive(direction) => outputs.set_direction(direction),
                Step::Hold => delay.delay_ms(self.step_ms),
                Step::DeenergizeAll => outputs.all_off(),
            }
        }
    }
}
