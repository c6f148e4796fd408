mod common;
pub(crate) use crate::common::*;

use automouse_timeout::{
    AutomouseTimeoutBehavior, AutomouseTimeoutConfig, Behavior, BindingEvent, DeviceError, Outcome,
};

fn config() -> AutomouseTimeoutConfig {
    AutomouseTimeoutConfig::new(100, 5000, 100, 600).unwrap()
}

/// Press `code` once with the sensor at `current`, return the outcome and the writes issued
fn press(current: u32, code: i32) -> (Result<Outcome, DeviceError>, Vec<u32>) {
    let mut sensor = MockSensor::new(current);
    let mut behavior = AutomouseTimeoutBehavior::new(config(), &mut sensor);
    let outcome = behavior.on_press(code);
    (outcome, sensor.writes)
}

#[test]
fn test_step_down() {
    assert_eq!(press(600, -1), (Ok(Outcome::Applied { old: 600, new: 500 }), vec![500]));
}

#[test]
fn test_step_down_pinned_at_floor() {
    assert_eq!(press(100, -1), (Ok(Outcome::Unchanged), vec![]));
}

#[test]
fn test_step_up_clamped_to_ceiling() {
    assert_eq!(press(4950, -2), (Ok(Outcome::Applied { old: 4950, new: 5000 }), vec![5000]));
}

#[test]
fn test_set_absolute() {
    assert_eq!(press(1200, 800), (Ok(Outcome::Applied { old: 1200, new: 800 }), vec![800]));
}

#[test]
fn test_set_absolute_below_min_is_clamped() {
    assert_eq!(press(1200, 80), (Ok(Outcome::Applied { old: 1200, new: 100 }), vec![100]));
}

#[test]
fn test_reset_to_default_unchanged() {
    assert_eq!(press(600, -3), (Ok(Outcome::Unchanged), vec![]));
}

#[test]
fn test_reset_to_default() {
    assert_eq!(press(3000, -3), (Ok(Outcome::Applied { old: 3000, new: 600 }), vec![600]));
}

#[test]
fn test_query() {
    assert_eq!(press(300, 0), (Ok(Outcome::Unchanged), vec![]));
}

#[test]
fn test_unknown_code_is_query() {
    assert_eq!(press(300, -7), (Ok(Outcome::Unchanged), vec![]));
}

#[test]
fn test_not_ready() {
    let mut sensor = MockSensor::not_ready(600);
    let mut behavior = AutomouseTimeoutBehavior::new(config(), &mut sensor);
    assert_eq!(behavior.on_press(-2), Err(DeviceError::NotReady));
    assert_eq!(behavior.handle(BindingEvent::Pressed(-2)).map_err(|e| e.errno()), Err(-19));
    assert!(sensor.writes.is_empty());
}

#[test]
fn test_write_failure() {
    let mut sensor = MockSensor::new(600);
    sensor.fail_code = Some(-5);
    let mut behavior = AutomouseTimeoutBehavior::new(config(), &mut sensor);
    assert_eq!(behavior.on_press(-2), Err(DeviceError::WriteFailed(-5)));
    // Single shot, no retry
    assert_eq!(sensor.writes, vec![700]);
    assert_eq!(sensor.timeout_ms, 600);
}

#[test]
fn test_press_sequence() {
    let mut sensor = MockSensor::new(600);
    let mut behavior = AutomouseTimeoutBehavior::new(config(), &mut sensor);

    for event in [
        BindingEvent::Pressed(-2),
        BindingEvent::Released,
        BindingEvent::Pressed(-2),
        BindingEvent::Released,
        BindingEvent::Pressed(-1),
        BindingEvent::Released,
        BindingEvent::Pressed(0),
        BindingEvent::Released,
        BindingEvent::Pressed(4999),
        BindingEvent::Pressed(-2),
        BindingEvent::Pressed(-2),
        BindingEvent::Pressed(-3),
    ] {
        assert_eq!(behavior.handle(event), Ok(()));
    }

    assert_eq!(sensor.writes, vec![700, 800, 700, 4999, 5000, 600]);
    assert_eq!(sensor.timeout_ms, 600);
}
