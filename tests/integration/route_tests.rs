//! End-to-end route tests: URI in, status/type/body out, pins checked.

use braillebot::app::events::ControlEvent;
use braillebot::app::outputs::Direction;
use braillebot::app::pattern::Pattern;
use braillebot::app::routes::{CONTENT_HTML, CONTENT_JSON, CONTENT_TEXT, INDEX_HTML};

use crate::mocks::{controller, energized, reversed_controller};

// ── / ───────────────────────────────────────────────────────

#[test]
fn index_serves_control_page() {
    let mut ctl = controller();
    let r = ctl.handle_uri("/");
    assert_eq!(r.status, 200);
    assert_eq!(r.content_type, CONTENT_HTML);
    assert_eq!(r.body, INDEX_HTML);
}

// ── /motor ──────────────────────────────────────────────────

#[test]
fn motor_toggles_channel() {
    let mut ctl = controller();
    let r = ctl.handle_uri("/motor?m=4");
    assert_eq!((r.status, r.content_type, r.body.as_ref()), (200, CONTENT_TEXT, "OK"));
    assert_eq!(energized(&ctl), vec![4]);

    ctl.handle_uri("/motor?m=4");
    assert!(energized(&ctl).is_empty());
}

#[test]
fn motor_out_of_range_still_ok_and_changes_nothing() {
    let mut ctl = controller();
    ctl.handle_uri("/motor?m=2");
    let before = ctl.service().snapshot();

    for uri in ["/motor?m=7", "/motor?m=0", "/motor?m=-1", "/motor?m=abc", "/motor"] {
        let r = ctl.handle_uri(uri);
        assert_eq!(r.status, 200, "{uri}");
        assert_eq!(r.body, "OK", "{uri}");
    }
    assert_eq!(ctl.service().snapshot(), before);
    assert!(ctl.sink().events.contains(&ControlEvent::ChannelIgnored(7)));
}

#[test]
fn motor_parses_leading_digits() {
    let mut ctl = controller();
    ctl.handle_uri("/motor?m=3xyz");
    assert_eq!(energized(&ctl), vec![3]);
}

#[test]
fn motor_non_ascii_value_is_noop() {
    let mut ctl = controller();
    let r = ctl.handle_uri("/motor?m=%C3%A93");
    assert_eq!(r.body, "OK");
    assert!(energized(&ctl).is_empty());
    assert!(ctl.sink().events.contains(&ControlEvent::ChannelIgnored(0)));
}

#[test]
fn motor_long_padded_value_still_selects() {
    let mut ctl = controller();
    ctl.handle_uri(&format!("/motor?m={}3", "0".repeat(40)));
    assert_eq!(energized(&ctl), vec![3]);
    ctl.handle_uri(&format!("/motor?m={}5", "+".repeat(40)));
    assert_eq!(energized(&ctl), vec![3, 5]);
}

#[test]
fn motor_never_blocks() {
    let mut ctl = controller();
    ctl.handle_uri("/motor?m=1");
    assert_eq!(ctl.delay().total_ns, 0);
}

// ── /dir ────────────────────────────────────────────────────

#[test]
fn dir_forward_sets_latch() {
    let mut ctl = controller();
    let r = ctl.handle_uri("/dir?d=1");
    assert_eq!((r.status, r.body.as_ref()), (200, "Direction Set"));
    assert_eq!(ctl.service().snapshot().direction, Direction::Forward);
    assert_eq!(ctl.delay().total_ns, 0);
}

#[test]
fn dir_reverse_pulse_then_forward() {
    let mut ctl = controller();
    ctl.handle_uri("/motor?m=1");
    ctl.handle_uri("/motor?m=5");

    let r = ctl.handle_uri("/dir?d=2");
    assert_eq!(r.body, "Direction Set");
    assert!(energized(&ctl).is_empty(), "d=2 must end with every channel off");
    assert_eq!(ctl.service().snapshot().direction, Direction::Forward);
    assert_eq!(ctl.delay().holds_ms, vec![250]);

    ctl.handle_uri("/dir?d=1");
    assert_eq!(ctl.service().snapshot().direction, Direction::Forward);
    assert_eq!(ctl.delay().total_ms(), 250);
}

#[test]
fn dir_reverse_pulse_drives_bridge_reverse_then_forward() {
    let mut ctl = controller();
    let before = ctl.service().outputs().port().direction_writes().len();
    ctl.handle_uri("/dir?d=2");
    let writes = ctl.service().outputs().port().direction_writes();
    assert_eq!(&writes[before..], &[Direction::Reverse, Direction::Forward]);
    assert_eq!(ctl.service().outputs().port().direction, Some(Direction::Forward));
}

#[test]
fn dir_unknown_code_is_noop() {
    let mut ctl = controller();
    ctl.handle_uri("/motor?m=6");
    let before = ctl.service().snapshot();
    for uri in ["/dir?d=3", "/dir?d=0", "/dir?d=x", "/dir"] {
        assert_eq!(ctl.handle_uri(uri).body, "Direction Set");
    }
    assert_eq!(ctl.service().snapshot(), before);
    assert_eq!(ctl.delay().total_ns, 0);
}

// ── /pattern ────────────────────────────────────────────────

#[test]
fn each_pattern_sets_its_subset() {
    let cases = [
        ("/pattern?a=1", vec![1], "Pattern A set (Motor 1 on)"),
        ("/pattern?b=1", vec![1, 3], "Pattern B set (Motors 1+3 on)"),
        ("/pattern?c=1", vec![1, 2], "Pattern C set (Motors 1+2 on)"),
    ];
    for (uri, expected, body) in cases {
        let mut ctl = controller();
        let r = ctl.handle_uri(uri);
        assert_eq!((r.status, r.body.as_ref()), (200, body), "{uri}");
        assert_eq!(energized(&ctl), expected, "{uri}");
    }
}

#[test]
fn patterns_reset_rather_than_merge() {
    let mut ctl = controller();
    ctl.handle_uri("/motor?m=6");
    ctl.handle_uri("/pattern?a=1");
    ctl.handle_uri("/pattern?b=1");
    ctl.handle_uri("/pattern?c=1");
    assert_eq!(energized(&ctl), vec![1, 2]);
}

#[test]
fn pattern_param_value_is_irrelevant() {
    let mut ctl = controller();
    assert_eq!(ctl.handle_uri("/pattern?b").status, 200);
    assert_eq!(energized(&ctl), vec![1, 3]);
    assert_eq!(ctl.handle_uri("/pattern?c=0").status, 200);
    assert_eq!(energized(&ctl), vec![1, 2]);
}

#[test]
fn pattern_key_is_percent_decoded() {
    let mut ctl = controller();
    let r = ctl.handle_uri("/pattern?%61=1");
    assert_eq!((r.status, r.body.as_ref()), (200, "Pattern A set (Motor 1 on)"));
    assert_eq!(energized(&ctl), vec![1]);
}

#[test]
fn pattern_a_takes_precedence() {
    let mut ctl = controller();
    let r = ctl.handle_uri("/pattern?c=1&a=1");
    assert_eq!(r.body, Pattern::A.description());
    assert_eq!(energized(&ctl), vec![1]);
}

#[test]
fn pattern_without_selection_is_bad_request() {
    let mut ctl = controller();
    ctl.handle_uri("/motor?m=4");
    let r = ctl.handle_uri("/pattern");
    assert_eq!((r.status, r.content_type, r.body.as_ref()), (400, CONTENT_TEXT, "Invalid pattern"));
    assert_eq!(ctl.handle_uri("/pattern?d=1").status, 400);
    assert_eq!(energized(&ctl), vec![4]);
}

#[test]
fn pattern_refused_while_reverse() {
    let mut ctl = reversed_controller(&[2, 5]);
    let before = ctl.service().snapshot();

    for uri in ["/pattern?a=1", "/pattern?b=1", "/pattern?c=1", "/pattern"] {
        let r = ctl.handle_uri(uri);
        assert_eq!(r.status, 200, "{uri}");
        assert_eq!(r.body, "Motors disabled in reverse direction", "{uri}");
    }
    assert_eq!(ctl.service().snapshot(), before);
    assert!(ctl.sink().events.iter().all(|e| *e == ControlEvent::PatternRefused));
}

// ── /animate ────────────────────────────────────────────────

#[test]
fn animate_ends_off_and_forward() {
    let mut ctl = controller();
    ctl.handle_uri("/pattern?b=1");
    ctl.handle_uri("/motor?m=6");

    let r = ctl.handle_uri("/animate");
    assert_eq!((r.status, r.body.as_ref()), (200, "Animation Done"));
    assert!(energized(&ctl).is_empty());
    assert_eq!(ctl.service().snapshot().direction, Direction::Forward);
    assert_eq!(ctl.delay().total_ms(), 2200);
}

#[test]
fn animate_from_reverse_ends_forward() {
    let mut ctl = reversed_controller(&[1, 2, 3]);
    ctl.handle_uri("/animate");
    let snap = ctl.service().snapshot();
    assert_eq!(snap.direction, Direction::Forward);
    assert_eq!(snap.energized_count(), 0);
}

// ── /state ──────────────────────────────────────────────────

#[test]
fn state_reports_json_snapshot() {
    let mut ctl = controller();
    ctl.handle_uri("/motor?m=2");
    let r = ctl.handle_uri("/state");
    assert_eq!((r.status, r.content_type), (200, CONTENT_JSON));

    let value: serde_json::Value = serde_json::from_str(&r.body).unwrap();
    assert_eq!(value["direction"], "forward");
    assert_eq!(value["channels"][1], true);
    assert_eq!(value["channels"][0], false);
}

// ── Unknown paths ───────────────────────────────────────────

#[test]
fn unknown_path_is_not_found_and_inert() {
    let mut ctl = controller();
    ctl.handle_uri("/motor?m=3");
    let before = ctl.service().snapshot();
    let events_before = ctl.sink().events.len();

    let r = ctl.handle_uri("/motors?m=1");
    assert_eq!(r.status, 404);
    assert_eq!(r.body, "Not found: /motors");
    assert_eq!(ctl.service().snapshot(), before);
    assert_eq!(ctl.sink().events.len(), events_before);
}
