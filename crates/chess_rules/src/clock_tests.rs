use super::*;

#[test]
fn presets() {
    assert_eq!(TimeControl::blitz(), TimeControl::new(5, 0));
    assert_eq!(TimeControl::rapid().increment_secs, 5);
    assert_eq!(TimeControl::classical().initial_secs, 90 * 60);
    assert!(TimeControl::untimed().is_untimed());
    assert_eq!(TimeControl::rapid().to_string(), "10+5");
    assert_eq!(TimeControl::untimed().to_string(), "untimed");
}

#[test]
fn untimed_clock_never_expires() {
    let mut clock = ChessClock::new(TimeControl::untimed());
    clock.start(Color::White);
    assert!(!clock.is_enabled());
    assert_eq!(clock.running_for(), None);
    assert!(!clock.has_expired(Color::White));
}

#[test]
fn expiry_when_no_time_left() {
    let mut clock = ChessClock::new(TimeControl::blitz());
    assert!(!clock.has_expired(Color::White));
    clock.set_remaining(Color::White, Duration::ZERO);
    assert!(clock.has_expired(Color::White));
    assert!(!clock.has_expired(Color::Black));
}

#[test]
fn stopping_adds_increment_to_the_mover() {
    let mut clock = ChessClock::new(TimeControl::new(1, 2));
    clock.start(Color::White);
    assert_eq!(clock.running_for(), Some(Color::White));
    clock.stop_and_increment();
    assert_eq!(clock.running_for(), None);
    // 60s minus a few microseconds plus 2s
    assert!(clock.remaining(Color::White) > Duration::from_secs(61));
    assert_eq!(clock.remaining(Color::Black), Duration::from_secs(60));
}

#[test]
fn starting_other_side_stops_the_running_one() {
    let mut clock = ChessClock::new(TimeControl::new(1, 0));
    clock.start(Color::White);
    clock.start(Color::Black);
    assert_eq!(clock.running_for(), Some(Color::Black));
    clock.reset();
    assert_eq!(clock.running_for(), None);
    assert_eq!(clock.remaining(Color::White), Duration::from_secs(60));
}

#[test]
fn fallen_flag_gets_no_increment() {
    let mut clock = ChessClock::new(TimeControl::new(1, 5));
    clock.set_remaining(Color::White, Duration::ZERO);
    clock.start(Color::White);
    clock.stop_and_increment();
    assert!(clock.has_expired(Color::White));
}

#[test]
fn formats_minutes_and_tenths() {
    assert_eq!(ChessClock::format(Duration::from_secs(125)), "2:05");
    assert_eq!(ChessClock::format(Duration::from_millis(9_400)), "0:09.4");
}

#[test]
fn time_control_from_config_text() {
    let tc: TimeControl = serde_json::from_str(r#"{"initial_secs": 180}"#).unwrap();
    assert_eq!(tc, TimeControl::new(3, 0));
}
