//! Fuzz target: `Controller::handle_uri`
//!
//! Replays arbitrary newline-separated URIs against a null-output
//! controller and checks that the latch always rests forward and every
//! response carries a known status.
//!
//! cargo fuzz run fuzz_request_uri

#![no_main]

use braillebot::app::controller::Controller;
use braillebot::app::events::ControlEvent;
use braillebot::app::outputs::{ChannelId, Direction};
use braillebot::app::ports::{EventSink, OutputPort};
use braillebot::config::FirmwareConfig;
use embedded_hal::delay::DelayNs;
use libfuzzer_sys::fuzz_target;

struct NullPort;

impl OutputPort for NullPort {
    fn write_channel(&mut self, _channel: ChannelId, _energized: bool) {}
    fn write_direction(&mut self, _direction: Direction) {}
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &ControlEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut ctl = Controller::new(NullPort, NoDelay, Discard, &FirmwareConfig::default());

    for uri in text.lines().take(64) {
        let response = ctl.handle_uri(uri);
        assert!(matches!(response.status, 200 | 400 | 404));
        assert_eq!(ctl.service().snapshot().direction, Direction::Forward);
    }
});
