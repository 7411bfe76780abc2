//! OutputModel behaviour against the recording port.

use braillebot::app::outputs::{ChannelId, Direction, OutputModel};

use crate::mocks::{MockOutputs, PinWrite};

fn model() -> OutputModel<MockOutputs> {
    OutputModel::new(MockOutputs::new())
}

#[test]
fn construction_drives_boot_state() {
    let m = model();
    let port = m.port();
    assert_eq!(port.levels, [false; 6]);
    assert_eq!(port.direction, Some(Direction::Forward));
    assert_eq!(port.writes.len(), 7);
}

#[test]
fn toggle_twice_restores_level() {
    let mut m = model();
    for id in 1..=6 {
        let before = m.snapshot();
        assert_eq!(m.toggle_channel(id).map(|(_, on)| on), Some(true));
        assert!(m.is_energized(id));
        m.toggle_channel(id);
        assert_eq!(m.snapshot(), before);
    }
}

#[test]
fn invalid_ids_never_touch_the_port() {
    let mut m = model();
    let writes = m.port().writes.len();
    for id in [0, 7, -1, 100, i32::MIN, i32::MAX] {
        assert_eq!(m.toggle_channel(id), None);
        assert_eq!(m.set_channel(id, true), None);
        assert!(!m.is_energized(id));
    }
    assert_eq!(m.port().writes.len(), writes);
}

#[test]
fn all_off_writes_every_line() {
    let mut m = model();
    m.energize_all();
    assert_eq!(m.snapshot().energized_count(), 6);

    let start = m.port().writes.len();
    m.all_off();
    let cleared: Vec<_> = m.port().writes[start..].to_vec();
    let expected: Vec<_> = ChannelId::ALL
        .into_iter()
        .map(|id| PinWrite::Channel {
            id: id.get(),
            on: false,
        })
        .collect();
    assert_eq!(cleared, expected);
    assert_eq!(m.snapshot().energized_count(), 0);
}

#[test]
fn port_levels_track_snapshot() {
    let mut m = model();
    m.set_channel(2, true);
    m.toggle_channel(5);
    m.set_direction(Direction::Reverse);
    m.toggle_channel(2);

    let snap = m.snapshot();
    assert_eq!(m.port().levels, snap.channels);
    assert_eq!(m.port().direction, Some(snap.direction));
    assert_eq!(snap.channels, [false, false, false, false, true, false]);
}

#[test]
fn direction_does_not_alter_channels() {
    let mut m = model();
    m.set_channel(3, true);
    m.set_direction(Direction::Reverse);
    m.set_direction(Direction::Forward);
    assert!(m.is_energized(3));
    assert_eq!(m.snapshot().energized_count(), 1);
}
