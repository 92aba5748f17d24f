// Integration tests for concurrent sampling and rendering
// A reader must never observe used and total memory from different samples

use griddash::core::system_monitor::{MemorySample, MetricsProvider, BYTES_PER_MB};
use griddash::core::{BoundingBox, RunState};
use griddash::ui::dashboard::widgets::{Memory, SharedWidget};
use griddash::ui::dashboard::{sample_all, DashboardApp, Renderer};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Alternates between a large and a small machine so that mixing fields
/// from two samples would show used > total.
struct SeesawProvider {
    calls: AtomicU64,
}

impl MetricsProvider for SeesawProvider {
    fn sample_cpu_percent(&self, _window: Duration) -> griddash::Result<f32> {
        Ok(50.0)
    }

    fn sample_memory(&self) -> griddash::Result<MemorySample> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let sample = if n % 2 == 0 {
            MemorySample::from_bytes(900 * BYTES_PER_MB, 1000 * BYTES_PER_MB)
        } else {
            MemorySample::from_bytes(50 * BYTES_PER_MB, 100 * BYTES_PER_MB)
        };
        Ok(sample)
    }
}

/// Parse "<used>M/<total>M" from a rendered row.
fn parse_used_total(row: &str) -> Option<(u64, u64)> {
    let text = row.trim_matches(|c: char| c == '│' || c.is_whitespace());
    let (used, total) = text.split_once('/')?;
    Some((
        used.trim_end_matches('M').parse().ok()?,
        total.trim_end_matches('M').parse().ok()?,
    ))
}

#[test]
fn test_no_torn_reads_during_1000_ticks() {
    let provider = Arc::new(SeesawProvider {
        calls: AtomicU64::new(0),
    });
    let memory = Arc::new(Memory::new(BoundingBox::new(0, 0, 24, 5).unwrap(), provider));
    let widgets: Vec<SharedWidget> = vec![memory.clone()];

    let sampler = {
        let widgets = widgets.clone();
        thread::spawn(move || {
            for _ in 0..1000 {
                let report = sample_all(&widgets);
                assert_eq!(report.failed, 0);
            }
        })
    };

    let app = DashboardApp::new(widgets, RunState::new(), (30, 8));
    let renderer = Renderer::new('q');
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    let mut frames = 0u64;

    while !sampler.is_finished() || frames == 0 {
        let reading = memory.reading();
        assert!(
            reading.used_mb <= reading.total_mb,
            "torn reading {:?}",
            reading
        );

        terminal.draw(|frame| renderer.render(frame, &app)).unwrap();
        let buf = terminal.backend().buffer();
        let row: String = (0..30u16).map(|x| buf[(x, 3u16)].symbol()).collect();
        if let Some((used, total)) = parse_used_total(&row) {
            assert!(used <= total, "torn frame {}", row);
        }
        frames += 1;
    }

    sampler.join().unwrap();
    assert!(frames > 0);

    let last = memory.reading();
    assert!(last.used_mb <= last.total_mb);
}

#[test]
fn test_clicks_and_updates_interleave() {
    use griddash::ui::dashboard::widgets::Button;
    use std::sync::atomic::AtomicUsize;

    let provider = Arc::new(SeesawProvider {
        calls: AtomicU64::new(0),
    });
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = clicks.clone();
    let button = Arc::new(Button::new(
        BoundingBox::new(0, 0, 10, 3).unwrap(),
        "Hit",
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    ));
    let memory = Arc::new(Memory::new(BoundingBox::new(12, 0, 20, 5).unwrap(), provider));
    let widgets: Vec<SharedWidget> = vec![button.clone(), memory];

    let sampler = {
        let widgets = widgets.clone();
        thread::spawn(move || {
            for _ in 0..500 {
                sample_all(&widgets);
            }
        })
    };

    let app = DashboardApp::new(widgets, RunState::new(), (80, 24));
    for _ in 0..500 {
        app.dispatch_click(1, 1);
    }
    sampler.join().unwrap();

    assert_eq!(clicks.load(Ordering::SeqCst), 500);
    assert!(button.is_pressed());
}
