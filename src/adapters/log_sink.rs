//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing control events to the ESP-IDF
//! logger (UART in production).

use log::{debug, info, warn};

use crate::app::events::ControlEvent;
use crate::app::outputs::Direction;
use crate::app::ports::EventSink;

/// Adapter that logs every [`ControlEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

fn dir_tag(d: Direction) -> &'static str {
    match d {
        Direction::Forward => "FWD",
        Direction::Reverse => "REV",
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::ChannelToggled { channel, energized } => {
                info!("CHAN | {} -> {}", channel, if *energized { "ON" } else { "OFF" });
            }
            ControlEvent::ChannelIgnored(raw) => {
                debug!("CHAN | ignored id={}", raw);
            }
            ControlEvent::DirectionSet(d) => {
                info!("DIR | {}", dir_tag(*d));
            }
            ControlEvent::ReversePulse { hold_ms } => {
                info!("DIR | reverse pulse {}ms done, FWD, all channels off", hold_ms);
            }
            ControlEvent::DirectionIgnored(code) => {
                debug!("DIR | ignored code={}", code);
            }
            ControlEvent::PatternApplied(p) => {
                info!("PATTERN | {} applied", p);
            }
            ControlEvent::PatternRefused => {
                warn!("PATTERN | refused, latch is REV");
            }
            ControlEvent::PatternMissing => {
                warn!("PATTERN | none of a/b/c given");
            }
            ControlEvent::AnimationStarted => {
                info!("ANIM | start");
            }
            ControlEvent::AnimationFinished(snap) => {
                info!(
                    "ANIM | done, dir={} energized={}",
                    dir_tag(snap.direction),
                    snap.energized_count()
                );
            }
        }
    }
}
