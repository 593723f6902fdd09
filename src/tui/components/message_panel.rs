//! # MessagePanel Component
//!
//! Text followed by what the prompt expects next. Covers three modes:
//!
//! - **Notice**: lines, then "Press ENTER to continue..."
//! - **Confirm**: lines, then `<question> (Y/n)` in the question tone
//! - **Busy**: a spinner frame and what is being waited for

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::state::Tone;
use crate::tui::component::Component;
use crate::tui::components::status_bar::tone_color;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    PressEnter,
    Question(String),
    Spinner { frame: usize, text: String },
}

pub struct MessagePanel {
    pub lines: Vec<String>,
    pub footer: Footer,
}

impl MessagePanel {
    pub fn new(lines: Vec<String>, footer: Footer) -> Self {
        Self { lines, footer }
    }

    fn footer_line(&self) -> Line<'static> {
        match &self.footer {
            Footer::PressEnter => Line::styled(
                "Press ENTER to continue...",
                Style::default().fg(Color::DarkGray),
            ),
            Footer::Question(question) => Line::styled(
                format!("{} {question} (Y/n)", Tone::Question.marker()),
                Style::default().fg(tone_color(Tone::Question)),
            ),
            Footer::Spinner { frame, text } => Line::styled(
                format!("{} {text}", SPINNER[frame % SPINNER.len()]),
                Style::default().fg(tone_color(Tone::Info)),
            ),
        }
    }
}

impl Component for MessagePanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = self.lines.iter().map(|l| Line::from(l.clone())).collect();
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(self.footer_line());
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }
}
