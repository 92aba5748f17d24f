use ratatui::style::{Color, Modifier, Style};

/// Styles registered for one dashboard session.
///
/// Built when the renderer is created and dropped with it, so no color state
/// outlives the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub default: Style,
    pub status: Style,
    pub pressed: Style,
    pub normal: Style,
    pub alert: Style,
    pub cursor: Style,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            default: Style::default(),
            status: Style::default().fg(Color::White).bg(Color::Blue),
            pressed: Style::default().fg(Color::Black).bg(Color::White),
            normal: Style::default().fg(Color::Green),
            alert: Style::default().fg(Color::Red),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
