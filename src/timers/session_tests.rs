//! Tests for session rebuild and tick behavior
//!
//! Time is driven by constructed instants (a base `Instant::now()` plus
//! offsets), never by sleeping.

use std::time::{Duration, Instant};

use crate::config::{AppConfig, PatternConfig};
use crate::expression::RenderPolicy;
use crate::surface::MemorySurface;

use super::Session;

fn pattern() -> PatternConfig {
    PatternConfig {
        prefix: "[[".to_string(),
        splitter: "|".to_string(),
        suffix: "]]".to_string(),
    }
}

fn clamped_config() -> AppConfig {
    AppConfig {
        pattern: pattern(),
        policy: RenderPolicy::Clamped {
            timeout_label: "DONE".to_string(),
        },
        tick_interval_ms: 100,
    }
}

fn overtime_config() -> AppConfig {
    AppConfig {
        pattern: pattern(),
        policy: RenderPolicy::Overtime {
            overtime_color: "red".to_string(),
        },
        tick_interval_ms: 100,
    }
}

#[test]
fn test_countdown_sequence_to_timeout() {
    let mut surface = MemorySurface::new();
    let node = surface.add_node("[[05:00|abc]]");
    surface.show(&[node]);

    let mut session = Session::new(&clamped_config());
    let t0 = Instant::now();

    session.rebuild(&mut surface, t0);
    assert_eq!(session.timer_count(), 1);
    assert_eq!(surface.text(node), "05:00");

    session.tick(&mut surface, t0 + Duration::from_secs(150));
    assert_eq!(surface.text(node), "02:30");

    session.tick(&mut surface, t0 + Duration::from_secs(300));
    assert_eq!(surface.text(node), "DONE");
}

#[test]
fn test_monitor_survives_rebuild() {
    let mut surface = MemorySurface::new();
    let node = surface.add_node("[[05:00|abc]]");
    surface.show(&[node]);

    let mut session = Session::new(&clamped_config());
    let t0 = Instant::now();
    session.rebuild(&mut surface, t0);

    // Navigate away and back: the label keeps its original start time
    surface.show(&[]);
    session.rebuild(&mut surface, t0 + Duration::from_secs(40));
    assert_eq!(session.timer_count(), 0);

    surface.show(&[node]);
    session.rebuild(&mut surface, t0 + Duration::from_secs(100));

    session.tick(&mut surface, t0 + Duration::from_secs(120));
    assert_eq!(surface.text(node), "03:00", "elapsed counts from t0, not the rebuild");
}

#[test]
fn test_original_content_reused_after_rewrite() {
    let mut surface = MemorySurface::new();
    let node = surface.add_node("[[05:00|abc]]");
    surface.show(&[node]);

    let mut session = Session::new(&clamped_config());
    let t0 = Instant::now();
    session.rebuild(&mut surface, t0);

    // The element now shows rendered digits, which are not a directive
    assert_eq!(surface.text(node), "05:00");

    session.rebuild(&mut surface, t0 + Duration::from_secs(10));
    assert_eq!(session.timer_count(), 1, "rebuild must parse the cached original");
    assert_eq!(surface.text(node), "04:50");
}

#[test]
fn test_shared_label_shares_start_instant() {
    let mut surface = MemorySurface::new();
    let a = surface.add_node("[[01:00|x]]");
    let b = surface.add_node("Also: [[01:00|x]]");
    surface.show(&[a, b]);

    let mut session = Session::new(&clamped_config());
    let t0 = Instant::now();
    session.rebuild(&mut surface, t0);

    session.tick(&mut surface, t0 + Duration::from_secs(30));
    assert_eq!(surface.text(a), "00:30");
    assert_eq!(surface.text(b), "00:30");
}

#[test]
fn test_non_matching_nodes_are_ignored() {
    let mut surface = MemorySurface::new();
    let plain = surface.add_node("Quarterly results");
    let timer = surface.add_node("[[02:00|talk]]");
    surface.show(&[plain, timer]);

    let mut session = Session::new(&clamped_config());
    session.rebuild(&mut surface, Instant::now());

    assert_eq!(session.timer_count(), 1);
    assert_eq!(surface.text(plain), "Quarterly results");
}

#[test]
fn test_empty_surface_is_a_noop() {
    let mut surface = MemorySurface::new();

    let mut session = Session::new(&clamped_config());
    session.rebuild(&mut surface, Instant::now());

    assert_eq!(session.timer_count(), 0);
    assert_eq!(surface.write_count(), 0);
}

#[test]
fn test_begin_resets_monitors() {
    let mut surface = MemorySurface::new();
    let node = surface.add_node("[[05:00|abc]]");
    surface.show(&[node]);

    let mut session = Session::new(&clamped_config());
    let t0 = Instant::now();
    session.rebuild(&mut surface, t0);

    session.begin();
    let t1 = t0 + Duration::from_secs(50);
    session.rebuild(&mut surface, t1);

    session.tick(&mut surface, t1 + Duration::from_secs(30));
    assert_eq!(surface.text(node), "04:30", "countdown restarts from the new activation");
}

#[test]
fn test_end_clears_active_state() {
    let mut surface = MemorySurface::new();
    let node = surface.add_node("[[05:00|abc]]");
    surface.show(&[node]);

    let mut session = Session::new(&clamped_config());
    session.rebuild(&mut surface, Instant::now());
    assert_eq!(session.timer_count(), 1);

    session.end();
    assert_eq!(session.timer_count(), 0);
    assert_eq!(session.monitored_labels().count(), 0);
}

#[test]
fn test_subsecond_ticks_do_not_write() {
    let mut surface = MemorySurface::new();
    let node = surface.add_node("[[05:00|abc]]");
    surface.show(&[node]);

    let mut session = Session::new(&clamped_config());
    let t0 = Instant::now();
    session.rebuild(&mut surface, t0);
    let writes_after_rebuild = surface.write_count();

    // Several ~100ms ticks inside the same whole second
    session.tick(&mut surface, t0 + Duration::from_millis(200));
    session.tick(&mut surface, t0 + Duration::from_millis(500));
    session.tick(&mut surface, t0 + Duration::from_millis(900));
    assert_eq!(surface.write_count(), writes_after_rebuild);

    session.tick(&mut surface, t0 + Duration::from_millis(1500));
    assert_eq!(surface.write_count(), writes_after_rebuild + 1);
    assert_eq!(surface.text(node), "04:59");
}

#[test]
fn test_overtime_session_flags_color() {
    let mut surface = MemorySurface::new();
    let node = surface.add_node("[[00:10|ot]]");
    surface.show(&[node]);

    let mut session = Session::new(&overtime_config());
    let t0 = Instant::now();
    session.rebuild(&mut surface, t0);
    assert_eq!(surface.text(node), "00:10");
    assert_eq!(surface.color(node), None);

    session.tick(&mut surface, t0 + Duration::from_secs(15));
    assert_eq!(surface.text(node), "00:05");
    assert_eq!(surface.color(node), Some("red"));
}
