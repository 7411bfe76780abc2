//! Control service: the hexagonal core.
//!
//! [`ControlService`] owns the [`OutputModel`] and the animation
//! [`Sequencer`].  Delays and the event sink are injected per call, so the
//! same service runs against real GPIO and FreeRTOS delays on target and
//! against recorders in host tests.
//!
//! ```text
//!  ControlCommand ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                     │    ControlService    │
//!       DelayNs  ◀────│ OutputModel · Seq.   │ ──▶ OutputPort
//!                     └──────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::config::FirmwareConfig;

use super::animation::Sequencer;
use super::commands::{ControlCommand, DIR_CODE_FORWARD, DIR_CODE_REVERSE_PULSE, PatternOutcome};
use super::events::ControlEvent;
use super::outputs::{Direction, OutputModel, OutputSnapshot};
use super::pattern::Pattern;
use super::ports::{EventSink, OutputPort};

pub struct ControlService<O: OutputPort> {
    outputs: OutputModel<O>,
    sequencer: Sequencer,
    reverse_pulse_ms: u32,
}

impl<O: OutputPort> ControlService<O> {
    pub fn new(port: O, config: &FirmwareConfig) -> Self {
        Self::with_outputs(OutputModel::new(port), config)
    }

    /// Wrap an existing model, keeping whatever state it already holds.
    pub fn with_outputs(outputs: OutputModel<O>, config: &FirmwareConfig) -> Self {
        Self {
            outputs,
            sequencer: Sequencer::new(config.animation_step_ms),
            reverse_pulse_ms: config.reverse_pulse_ms,
        }
    }

    // ── Command handling ──────────────────────────────────────

    pub fn handle_command(
        &mut self,
        cmd: ControlCommand,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) {
        debug!("command: {:?}", cmd);
        match cmd {
            ControlCommand::ToggleChannel(raw) => self.toggle_channel(raw, sink),
            ControlCommand::Direction(code) => {
                self.set_direction(code, delay, sink);
            }
            ControlCommand::Animate => self.run_animation(delay, sink),
        }
    }

    pub fn toggle_channel(&mut self, raw_id: i32, sink: &mut impl EventSink) {
        match self.outputs.toggle_channel(raw_id) {
            Some((channel, energized)) => {
                sink.emit(&ControlEvent::ChannelToggled { channel, energized });
            }
            None => sink.emit(&ControlEvent::ChannelIgnored(raw_id)),
        }
    }

    /// Apply a `/dir` code.  Returns `false` for codes other than 1 and 2.
    ///
    /// Code 2 holds reverse for the configured pulse, then latches forward
    /// and clears every channel before returning.
    pub fn set_direction(
        &mut self,
        code: i32,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> bool {
        match code {
            DIR_CODE_FORWARD => {
                self.outputs.set_direction(Direction::Forward);
                sink.emit(&ControlEvent::DirectionSet(Direction::Forward));
                true
            }
            DIR_CODE_REVERSE_PULSE => {
                self.outputs.set_direction(Direction::Reverse);
                sink.emit(&ControlEvent::DirectionSet(Direction::Reverse));
                delay.delay_ms(self.reverse_pulse_ms);
                self.outputs.set_direction(Direction::Forward);
                self.outputs.all_off();
                sink.emit(&ControlEvent::ReversePulse {
                    hold_ms: self.reverse_pulse_ms,
                });
                true
            }
            other => {
                sink.emit(&ControlEvent::DirectionIgnored(other));
                false
            }
        }
    }

    /// The reverse check comes first: a reverse latch refuses even a
    /// request that names no pattern.
    pub fn apply_pattern(
        &mut self,
        selection: Option<Pattern>,
        sink: &mut impl EventSink,
    ) -> PatternOutcome {
        if !self.outputs.direction().is_forward() {
            sink.emit(&ControlEvent::PatternRefused);
            return PatternOutcome::RefusedReverse;
        }
        let Some(pattern) = selection else {
            sink.emit(&ControlEvent::PatternMissing);
            return PatternOutcome::NoneSelected;
        };

        self.outputs.all_off();
        for &channel in pattern.channels() {
            self.outputs.set(channel, true);
        }
        sink.emit(&ControlEvent::PatternApplied(pattern));
        PatternOutcome::Applied(pattern)
    }

    pub fn run_animation(&mut self, delay: &mut impl DelayNs, sink: &mut impl EventSink) {
        sink.emit(&ControlEvent::AnimationStarted);
        self.sequencer.run(&mut self.outputs, delay);
        sink.emit(&ControlEvent::AnimationFinished(self.outputs.snapshot()));
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn outputs(&self) -> &OutputModel<O> {
        &self.outputs
    }

    pub fn snapshot(&self) -> OutputSnapshot {
        self.outputs.snapshot()
    }

    pub fn animation_ms(&self) -> u32 {
        self.sequencer.total_hold_ms()
    }
}
