//! # StatusBar Component
//!
//! One line of feedback under the current screen: `[✓] Found it: 4.5`.
//!
//! Purely presentational. It receives the status as a prop and renders it
//! in the tone's color, or nothing when there is no status.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{Status, Tone};
use crate::tui::component::Component;

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Question => Color::Yellow,
        Tone::Error => Color::Red,
        Tone::Info => Color::Blue,
    }
}

pub struct StatusBar {
    pub status: Option<Status>,
}

impl StatusBar {
    pub fn new(status: Option<Status>) -> Self {
        Self { status }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(status) = &self.status else {
            return;
        };
        let text = format!("{} {}", status.tone.marker(), status.text);
        let style = Style::default().fg(tone_color(status.tone));
        frame.render_widget(Span::styled(text, style), area);
    }
}
