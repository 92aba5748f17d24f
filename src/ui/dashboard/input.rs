use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Mouse buttons held for a mouse event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonMask(u8);

impl ButtonMask {
    pub const NONE: ButtonMask = ButtonMask(0);
    pub const PRIMARY: ButtonMask = ButtonMask(1);
    pub const SECONDARY: ButtonMask = ButtonMask(1 << 1);
    pub const MIDDLE: ButtonMask = ButtonMask(1 << 2);

    pub fn is_primary_click(self) -> bool {
        self.0 & Self::PRIMARY.0 != 0
    }
}

/// Events the dashboard reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashEvent {
    /// Quit key, Ctrl+C
    Quit,
    /// Pointer position, with any button pressed in this event
    Mouse { x: u16, y: u16, buttons: ButtonMask },
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// Poll timed out or the event was not relevant
    None,
}

/// Polls the terminal and classifies what it reads
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    timeout: Duration,
    quit_key: char,
}

impl InputDispatcher {
    pub fn new(timeout: Duration, quit_key: char) -> Self {
        Self { timeout, quit_key }
    }

    /// Wait at most the configured timeout for one event.
    ///
    /// Backend errors while polling or decoding are logged and reported as
    /// [`DashEvent::None`].
    pub fn poll(&self) -> DashEvent {
        match event::poll(self.timeout) {
            Ok(true) => {}
            Ok(false) => return DashEvent::None,
            Err(e) => {
                log::debug!("Event poll failed: {}", e);
                return DashEvent::None;
            }
        }

        match event::read() {
            Ok(ev) => self.translate(ev),
            Err(e) => {
                log::debug!("Dropping undecodable event: {}", e);
                DashEvent::None
            }
        }
    }

    /// Classify a raw terminal event.
    pub fn translate(&self, ev: Event) -> DashEvent {
        match ev {
            Event::Key(key) => self.translate_key(key),
            Event::Mouse(mouse) => translate_mouse(mouse),
            Event::Resize(width, height) => DashEvent::Resize(width, height),
            _ => DashEvent::None,
        }
    }

    fn translate_key(&self, key: KeyEvent) -> DashEvent {
        if key.kind != KeyEventKind::Press {
            return DashEvent::None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => DashEvent::Quit,
            KeyCode::Char(c) if c == self.quit_key && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                DashEvent::Quit
            }
            _ => DashEvent::None,
        }
    }
}

fn translate_mouse(mouse: MouseEvent) -> DashEvent {
    let buttons = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => ButtonMask::PRIMARY,
        MouseEventKind::Down(MouseButton::Right) => ButtonMask::SECONDARY,
        MouseEventKind::Down(MouseButton::Middle) => ButtonMask::MIDDLE,
        _ => ButtonMask::NONE,
    };

    DashEvent::Mouse {
        x: mouse.column,
        y: mouse.row,
        buttons,
    }
}
