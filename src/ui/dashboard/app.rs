use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::config::DashboardConfig;
use crate::core::geometry::BoundingBox;
use crate::core::run_state::{AppState, RunState};
use crate::core::system_monitor::{MetricsProvider, SysinfoProvider};

use super::input::{DashEvent, InputDispatcher};
use super::render::Renderer;
use super::sampler::Sampler;
use super::terminal::TerminalSession;
use super::widgets::{Button, Clock, CpuMonitor, Memory, SharedWidget};

/// Dashboard application state
pub struct DashboardApp {
    widgets: Vec<SharedWidget>,
    run_state: RunState,
    mouse: (u16, u16),
    size: (u16, u16),
}

impl DashboardApp {
    /// `widgets` is draw order and click order; it never changes afterwards.
    pub fn new(widgets: Vec<SharedWidget>, run_state: RunState, size: (u16, u16)) -> Self {
        Self {
            widgets,
            run_state,
            mouse: (0, 0),
            size,
        }
    }

    pub fn widgets(&self) -> &[SharedWidget] {
        &self.widgets
    }

    pub fn run_state(&self) -> &RunState {
        &self.run_state
    }

    pub fn state(&self) -> AppState {
        self.run_state.state()
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    pub fn mouse_position(&self) -> (u16, u16) {
        self.mouse
    }

    /// Last known terminal size as (width, height)
    pub fn terminal_size(&self) -> (u16, u16) {
        self.size
    }

    pub fn quit(&self) {
        if self.run_state.stop() {
            log::info!("Quit requested");
        }
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: DashEvent) {
        match event {
            DashEvent::Quit => self.quit(),
            DashEvent::Mouse { x, y, buttons } => {
                self.mouse = (x, y);
                if buttons.is_primary_click() {
                    self.dispatch_click(x, y);
                }
            }
            // Layout is fixed; only the stored size changes
            DashEvent::Resize(width, height) => self.size = (width, height),
            DashEvent::None => {}
        }
    }

    /// Deliver a click to every widget containing the point, in order.
    ///
    /// Overlapping widgets each receive the click. Returns how many did.
    pub fn dispatch_click(&self, x: u16, y: u16) -> usize {
        let mut hits = 0;
        for widget in &self.widgets {
            if widget.is_inside(x, y) {
                log::debug!("Click at ({}, {}) hit {}", x, y, widget.name());
                widget.on_click();
                hits += 1;
            }
        }
        hits
    }
}

/// The fixed dashboard layout: clock, exit button, CPU and memory gauges.
pub fn default_widgets(
    config: &DashboardConfig,
    provider: Arc<dyn MetricsProvider>,
    run_state: &RunState,
) -> crate::error::Result<Vec<SharedWidget>> {
    let quit = run_state.clone();

    let widgets: Vec<SharedWidget> = vec![
        Arc::new(Clock::new(BoundingBox::new(1, 1, 22, 3)?)),
        Arc::new(Button::new(
            BoundingBox::new(24, 1, 20, 3)?,
            "Exit",
            Box::new(move || {
                quit.stop();
            }),
        )),
        Arc::new(CpuMonitor::new(
            BoundingBox::new(1, 5, 22, 5)?,
            provider.clone(),
            config.cpu_window(),
        )),
        Arc::new(Memory::new(BoundingBox::new(24, 5, 20, 5)?, provider)),
    ];

    Ok(widgets)
}

/// Run the dashboard until the user quits.
///
/// Terminal and sampler setup failures are returned; everything after that
/// is handled inside the loop.
pub fn run_dashboard(config: DashboardConfig) -> Result<()> {
    config.validate()?;

    let run_state = RunState::new();
    let provider: Arc<dyn MetricsProvider> = Arc::new(SysinfoProvider::new());
    let widgets = default_widgets(&config, provider, &run_state)?;

    let signal_state = run_state.clone();
    ctrlc::set_handler(move || {
        signal_state.stop();
    })
    .context("Failed to set interrupt handler")?;

    let mut session = TerminalSession::enter().context("Failed to start terminal session")?;
    let size = session
        .terminal_mut()
        .size()
        .context("Failed to read terminal size")?;

    let sampler =
        Sampler::start(widgets.clone(), config.sample_interval()).context("Failed to start sampler")?;

    let mut app = DashboardApp::new(widgets, run_state, (size.width, size.height));
    let renderer = Renderer::new(config.quit_key);
    let dispatcher = InputDispatcher::new(config.poll_timeout(), config.quit_key);

    while app.is_running() {
        if let Err(e) = session
            .terminal_mut()
            .draw(|frame| renderer.render(frame, &app))
        {
            log::warn!("Frame draw failed: {}", e);
        }

        let event = dispatcher.poll();
        app.handle_event(event);
    }

    sampler.shutdown();
    drop(session);

    Ok(())
}
