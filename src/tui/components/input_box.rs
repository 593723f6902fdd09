//! # InputBox Component
//!
//! The `> ` prompt under every screen. Single line; the cursor always sits
//! at the end of the buffer. An empty Enter is a real answer here (it means
//! "yes" on a confirm prompt and "back" on most screens), so it is submitted
//! like any other line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PROMPT: &str = "> ";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed, with the buffer contents.
    Submit(String),
    ContentChanged,
}

pub struct InputBox {
    pub buffer: String,
    /// Greyed out while input is ignored (busy, downloading).
    pub dimmed: bool,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
        }
    }

    /// Tail of the buffer that fits in `width` columns after the prompt.
    fn visible_text(&self, width: u16) -> &str {
        let room = (width as usize).saturating_sub(PROMPT.len() + 1);
        let mut start = 0;
        while self.buffer[start..].width() > room {
            match self.buffer[start..].chars().next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }
        &self.buffer[start..]
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let text = self.visible_text(area.width);
        let cursor_x = area.x + (PROMPT.len() + text.width()) as u16;

        let line = Line::from(vec![
            Span::styled(PROMPT, style),
            Span::styled(text.to_string(), style),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        if !self.dimmed {
            frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // First line only
                let line = text.lines().next().unwrap_or("");
                self.buffer.push_str(line);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => self.buffer.pop().map(|_| InputEvent::ContentChanged),
            TuiEvent::Submit => Some(InputEvent::Submit(std::mem::take(&mut self.buffer))),
            TuiEvent::Interrupt | TuiEvent::Resize => None,
        }
    }
}
