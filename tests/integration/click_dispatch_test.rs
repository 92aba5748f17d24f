// Integration tests for click routing and quitting
// Clicks are routed by bounding box to every widget that contains them

use griddash::core::system_monitor::{MemorySample, MetricsProvider};
use griddash::core::{AppState, BoundingBox, RunState};
use griddash::ui::dashboard::widgets::{Button, DashWidget, SharedWidget};
use griddash::ui::dashboard::{default_widgets, ButtonMask, DashEvent, DashboardApp};
use griddash::DashboardConfig;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

struct IdleProvider;

impl MetricsProvider for IdleProvider {
    fn sample_cpu_percent(&self, _window: Duration) -> griddash::Result<f32> {
        Ok(0.0)
    }

    fn sample_memory(&self) -> griddash::Result<MemorySample> {
        Ok(MemorySample::default())
    }
}

fn counting_button(bounds: BoundingBox) -> (Arc<Button>, Arc<AtomicUsize>) {
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = clicks.clone();
    let button = Arc::new(Button::new(
        bounds,
        "Count",
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    ));
    (button, clicks)
}

fn primary_click(x: u16, y: u16) -> DashEvent {
    DashEvent::Mouse {
        x,
        y,
        buttons: ButtonMask::PRIMARY,
    }
}

#[test]
fn test_click_inside_single_button() {
    let (left, left_clicks) = counting_button(BoundingBox::new(0, 0, 10, 3).unwrap());
    let (right, right_clicks) = counting_button(BoundingBox::new(12, 0, 10, 3).unwrap());
    let widgets: Vec<SharedWidget> = vec![left.clone(), right.clone()];
    let mut app = DashboardApp::new(widgets, RunState::new(), (80, 24));

    app.handle_event(primary_click(14, 1));

    assert_eq!(right_clicks.load(Ordering::SeqCst), 1);
    assert!(right.is_pressed());
    assert_eq!(left_clicks.load(Ordering::SeqCst), 0);
    assert!(!left.is_pressed());
}

#[test]
fn test_click_outside_every_widget() {
    let (button, clicks) = counting_button(BoundingBox::new(5, 5, 4, 2).unwrap());
    let widgets: Vec<SharedWidget> = vec![button.clone()];
    let app = DashboardApp::new(widgets, RunState::new(), (80, 24));

    for (x, y) in [(0, 0), (9, 5), (5, 7), (4, 6), (40, 20)] {
        assert_eq!(app.dispatch_click(x, y), 0, "({}, {})", x, y);
    }

    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert!(!button.is_pressed());
}

#[test]
fn test_overlapping_widgets_all_receive_click() {
    let (first, first_clicks) = counting_button(BoundingBox::new(0, 0, 10, 5).unwrap());
    let (second, second_clicks) = counting_button(BoundingBox::new(5, 2, 10, 5).unwrap());
    let widgets: Vec<SharedWidget> = vec![first.clone(), second.clone()];
    let app = DashboardApp::new(widgets, RunState::new(), (80, 24));

    assert_eq!(app.dispatch_click(7, 3), 2);
    assert_eq!(first_clicks.load(Ordering::SeqCst), 1);
    assert_eq!(second_clicks.load(Ordering::SeqCst), 1);

    assert_eq!(app.dispatch_click(1, 1), 1);
    assert_eq!(first_clicks.load(Ordering::SeqCst), 2);
    assert_eq!(second_clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn test_non_primary_button_does_not_click() {
    let (button, clicks) = counting_button(BoundingBox::new(0, 0, 10, 3).unwrap());
    let widgets: Vec<SharedWidget> = vec![button.clone()];
    let mut app = DashboardApp::new(widgets, RunState::new(), (80, 24));

    app.handle_event(DashEvent::Mouse {
        x: 2,
        y: 1,
        buttons: ButtonMask::SECONDARY,
    });

    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert_eq!(app.mouse_position(), (2, 1));
}

fn default_app() -> DashboardApp {
    let run_state = RunState::new();
    let widgets = default_widgets(
        &DashboardConfig::default(),
        Arc::new(IdleProvider),
        &run_state,
    )
    .unwrap();
    DashboardApp::new(widgets, run_state, (80, 24))
}

/// Drive the event half of the run loop until it stops.
fn iterations_until_stopped(app: &mut DashboardApp, events: &[DashEvent]) -> usize {
    let mut iterations = 0;
    let mut events = events.iter().copied();
    while app.is_running() && iterations < 10 {
        iterations += 1;
        app.handle_event(events.next().unwrap_or(DashEvent::None));
    }
    iterations
}

#[test]
fn test_quit_key_stops_within_one_iteration() {
    let mut app = default_app();

    let iterations = iterations_until_stopped(&mut app, &[DashEvent::Quit]);

    assert_eq!(iterations, 1);
    assert_eq!(app.state(), AppState::Stopped);
}

#[test]
fn test_exit_button_stops_within_one_iteration() {
    let mut app = default_app();
    let exit = app
        .widgets()
        .iter()
        .find(|w| w.name() == "Exit")
        .expect("default layout has an Exit button")
        .bounds();

    let iterations = iterations_until_stopped(&mut app, &[primary_click(exit.x + 1, exit.y + 1)]);

    assert_eq!(iterations, 1);
    assert_eq!(app.state(), AppState::Stopped);
}

#[test]
fn test_clicking_gauges_changes_nothing() {
    let mut app = default_app();
    let gauges: Vec<BoundingBox> = app
        .widgets()
        .iter()
        .filter(|w| w.name() != "Exit")
        .map(|w| w.bounds())
        .collect();

    for b in gauges {
        app.handle_event(primary_click(b.x + 1, b.y + 1));
    }

    assert_eq!(app.state(), AppState::Running);
}
