//! Mock adapters for integration tests.
//!
//! [`MockOutputs`] records every pin write, [`RecordingDelay`] accumulates
//! requested delay instead of sleeping, and [`RecordingSink`] keeps every
//! emitted event.

use braillebot::app::controller::Controller;
use braillebot::app::events::ControlEvent;
use braillebot::app::outputs::{CHANNEL_COUNT, ChannelId, Direction, OutputModel};
use braillebot::app::ports::{EventSink, OutputPort};
use braillebot::app::service::ControlService;
use braillebot::config::FirmwareConfig;
use embedded_hal::delay::DelayNs;

// ── Pin write record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinWrite {
    Channel { id: u8, on: bool },
    Direction(Direction),
}

// ── MockOutputs ───────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockOutputs {
    pub writes: Vec<PinWrite>,
    pub levels: [bool; CHANNEL_COUNT],
    pub direction: Option<Direction>,
}

#[allow(dead_code)]
impl MockOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction_writes(&self) -> Vec<Direction> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                PinWrite::Direction(d) => Some(*d),
                PinWrite::Channel { .. } => None,
            })
            .collect()
    }
}

impl OutputPort for MockOutputs {
    fn write_channel(&mut self, channel: ChannelId, energized: bool) {
        self.levels[channel.index()] = energized;
        self.writes.push(PinWrite::Channel {
            id: channel.get(),
            on: energized,
        });
    }

    fn write_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
        self.writes.push(PinWrite::Direction(direction));
    }
}

// ── RecordingDelay ────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
    /// Every `delay_ms` request, in order.
    pub holds_ms: Vec<u32>,
}

#[allow(dead_code)]
impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.holds_ms.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<ControlEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &ControlEvent) {
        self.events.push(event.clone());
    }
}

// ── Builders ──────────────────────────────────────────────────

pub type TestController = Controller<MockOutputs, RecordingDelay, RecordingSink>;

pub fn controller() -> TestController {
    Controller::new(
        MockOutputs::new(),
        RecordingDelay::default(),
        RecordingSink::default(),
        &FirmwareConfig::default(),
    )
}

/// A controller whose latch is already reverse (reachable only
/// mid-sequence on real hardware).
#[allow(dead_code)]
pub fn reversed_controller(energized: &[i32]) -> TestController {
    let mut model = OutputModel::new(MockOutputs::new());
    for &id in energized {
        model.set_channel(id, true);
    }
    model.set_direction(Direction::Reverse);
    let service = ControlService::with_outputs(model, &FirmwareConfig::default());
    Controller::from_service(service, RecordingDelay::default(), RecordingSink::default())
}

/// Ids 1–6 currently energized, ascending.
pub fn energized(ctl: &TestController) -> Vec<u8> {
    let snap = ctl.service().snapshot();
    ChannelId::ALL
        .into_iter()
        .filter(|id| snap.channels[id.index()])
        .map(ChannelId::get)
        .collect()
}
