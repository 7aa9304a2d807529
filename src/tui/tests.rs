//! Integration tests for TUI module.
//!
//! These tests drive the app through key presses with instant pacing and
//! poll `update` until the worker reports back.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::sort_app::{RunStatus, SortApp};
use crate::algorithms::Algorithm;
use crate::config::{VisualizerConfig, UI_MAX_SIZE, UI_MIN_SIZE};
use crate::data::{is_sorted, Pattern};
use crate::engine::{Pacing, Speed};
use crate::visualization::BarState;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

fn instant_app() -> SortApp {
    SortApp::with_defaults().with_pacing(Pacing::instant())
}

fn wait_for(app: &mut SortApp, status: RunStatus) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while app.status != status {
        assert!(Instant::now() < deadline, "timed out waiting for {status:?}");
        std::thread::sleep(Duration::from_millis(5));
        app.update();
    }
}

#[test]
fn test_sort_app_initial_state() {
    let app = instant_app();
    assert_eq!(app.status, RunStatus::Idle);
    assert_eq!(app.algorithm, Algorithm::Bubble);
    assert_eq!(app.chart.len(), 50);
    assert_eq!(app.original(), app.chart.values());
    assert_eq!(app.speed(), Speed::default());
    assert!(!app.should_quit());
}

#[test]
fn test_sort_app_runs_to_completion() {
    let mut app = instant_app();
    app.handle_key(KeyCode::Char(' '));
    assert_eq!(app.status, RunStatus::Running);

    wait_for(&mut app, RunStatus::Finished);
    assert!(is_sorted(app.chart.values()));
    assert!(app.chart.bars().all(|(_, state)| state == BarState::Sorted));
    assert_eq!(
        app.chart.description(),
        "Bubble Sort completed! Array is now sorted."
    );
    assert!(app.stats().comparisons > 0);
}

#[test]
fn test_sort_app_stop_and_reset() {
    let mut app = SortApp::with_defaults();
    let original = app.original().to_vec();

    app.handle_key(KeyCode::Char(' '));
    app.handle_key(KeyCode::Esc);
    assert_eq!(app.status, RunStatus::Stopped);

    let mut values = app.chart.values().to_vec();
    values.sort_unstable();
    let mut expected = original.clone();
    expected.sort_unstable();
    assert_eq!(values, expected);

    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.status, RunStatus::Idle);
    assert_eq!(app.chart.values(), original.as_slice());
    assert_eq!(app.chart.description(), "Array reset to original state.");
    assert_eq!(app.stats().swaps, 0);
}

#[test]
fn test_sort_app_pause_resume() {
    let mut app = SortApp::with_defaults();
    app.handle_key(KeyCode::Char(' '));
    app.handle_key(KeyCode::Char(' '));
    assert_eq!(app.status, RunStatus::Paused);
    assert!(app.chart.description().starts_with("Sorting paused."));

    app.handle_key(KeyCode::Char(' '));
    assert_eq!(app.status, RunStatus::Running);
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_sort_app_step_starts_paused() {
    let config = VisualizerConfig::builder().size(10).build();
    let mut app = SortApp::new(&config).expect("app").with_pacing(Pacing::instant());
    app.handle_key(KeyCode::Char('s'));
    assert_eq!(app.status, RunStatus::Paused);

    for _ in 0..10_000 {
        app.handle_key(KeyCode::Char('s'));
        app.update();
        if app.status == RunStatus::Finished {
            break;
        }
        std::thread::sleep(Duration::from_micros(200));
    }
    wait_for(&mut app, RunStatus::Finished);
    assert!(is_sorted(app.chart.values()));
}

#[test]
fn test_sort_app_menu_keys_ignored_while_running() {
    let mut app = SortApp::with_defaults();
    app.handle_key(KeyCode::Char(' '));
    app.handle_key(KeyCode::Char('a'));
    app.handle_key(KeyCode::Char('p'));
    app.handle_key(KeyCode::Char(']'));
    assert_eq!(app.algorithm, Algorithm::Bubble);
    assert_eq!(app.pattern, Pattern::Random);
    assert_eq!(app.size, 50);
    app.handle_key(KeyCode::Esc);
}

#[test]
fn test_sort_app_menu_keys_when_idle() {
    let mut app = instant_app();
    app.handle_key(KeyCode::Char('a'));
    assert_eq!(app.algorithm, Algorithm::Selection);

    app.handle_key(KeyCode::Char('p'));
    assert_eq!(app.pattern, Pattern::Sorted);
    assert!(is_sorted(app.chart.values()));

    for _ in 0..20 {
        app.handle_key(KeyCode::Char(']'));
    }
    assert_eq!(app.size, UI_MAX_SIZE);
    assert_eq!(app.chart.len(), UI_MAX_SIZE);

    for _ in 0..20 {
        app.handle_key(KeyCode::Char('['));
    }
    assert_eq!(app.size, UI_MIN_SIZE);
}

#[test]
fn test_sort_app_speed_keys() {
    let mut app = instant_app();
    app.handle_key(KeyCode::Char('+'));
    assert_eq!(app.speed(), Speed::new(6));
    for _ in 0..10 {
        app.handle_key(KeyCode::Char('-'));
    }
    assert_eq!(app.speed(), Speed::MIN);
}

#[test]
fn test_sort_app_generate_draws_new_array() {
    let mut app = instant_app();
    let first = app.original().to_vec();
    app.handle_key(KeyCode::Char('g'));
    assert_eq!(app.original().len(), first.len());
    assert_eq!(app.status, RunStatus::Idle);
}

#[test]
fn test_sort_app_placeholder_announces_fallback() {
    let config = VisualizerConfig::builder()
        .algorithm(Algorithm::Intro)
        .size(10)
        .build();
    let mut app = SortApp::new(&config).expect("app").with_pacing(Pacing::instant());
    assert_eq!(app.info().name, "Unknown Algorithm");

    app.handle_key(KeyCode::Char(' '));
    wait_for(&mut app, RunStatus::Finished);
    assert_eq!(
        app.chart.description(),
        "Quick Sort completed! Array is now sorted."
    );
}

#[test]
fn test_sort_app_rejects_unknown_algorithm() {
    let config = VisualizerConfig {
        algorithm: "bogo".to_string(),
        ..VisualizerConfig::default()
    };
    assert!(SortApp::new(&config).is_err());
}
