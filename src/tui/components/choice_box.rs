//! # ChoiceBox Component
//!
//! The picker shown for entries with several links:
//!
//! ```text
//! ┌──────────< B - back >──────────┐
//! │                                │
//! │ [1] Cinnamon                   │
//! │ [2] MATE                       │
//! │                                │
//! ├────────────────────────────────┤
//! │         Choose Version         │
//! └────────────────────────────────┘
//! ```
//!
//! The box is drawn from plain strings so its geometry can be tested
//! without a terminal. Width is at least 34 columns and grows to fit the
//! prompt (10 columns of margin) and every option (`│ [n]  │` is 7 columns
//! plus the digits). Width parity follows the prompt so that both the prompt
//! and the back label center exactly.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const MIN_WIDTH: usize = 34;
const EVEN_BACK_LABEL: &str = "< B - back >";
const ODD_BACK_LABEL: &str = "< back: B >";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub back_label: &'static str,
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

pub fn geometry(prompt: &str, options: &[&str]) -> Geometry {
    let prompt_width = prompt.width();
    let mut width = MIN_WIDTH.max(prompt_width + 10);
    for (i, option) in options.iter().enumerate() {
        width = width.max(option.width() + 7 + digits(i + 1));
    }

    let back_label = if prompt_width % 2 == 0 {
        if width % 2 == 1 {
            width += 1;
        }
        EVEN_BACK_LABEL
    } else {
        if width % 2 == 0 {
            width += 1;
        }
        ODD_BACK_LABEL
    };
    Geometry { width, back_label }
}

/// The box as text lines, each exactly `geometry.width` columns wide.
pub fn box_lines(prompt: &str, options: &[&str]) -> Vec<String> {
    let Geometry { width, back_label } = geometry(prompt, options);
    let inner = width - 2;
    let mut lines = Vec::with_capacity(options.len() + 6);

    let bar = "─".repeat((inner - back_label.width()) / 2);
    lines.push(format!("┌{bar}{back_label}{bar}┐"));
    lines.push(format!("│{}│", " ".repeat(inner)));
    for (i, option) in options.iter().enumerate() {
        let n = i + 1;
        let pad = width - 6 - option.width() - digits(n);
        lines.push(format!("│ [{n}] {option}{}│", " ".repeat(pad)));
    }
    lines.push(format!("│{}│", " ".repeat(inner)));
    lines.push(format!("├{}┤", "─".repeat(inner)));
    let margin = " ".repeat((inner - prompt.width()) / 2);
    lines.push(format!("│{margin}{prompt}{margin}│"));
    lines.push(format!("└{}┘", "─".repeat(inner)));
    lines
}

pub struct ChoiceBox {
    pub prompt: String,
    pub options: Vec<String>,
}

impl ChoiceBox {
    pub fn new(prompt: &str, options: Vec<String>) -> Self {
        Self {
            prompt: prompt.to_string(),
            options,
        }
    }

    fn lines(&self) -> Vec<String> {
        let options: Vec<&str> = self.options.iter().map(String::as_str).collect();
        box_lines(&self.prompt, &options)
    }

    pub fn height(&self) -> u16 {
        self.options.len() as u16 + 6
    }
}

impl Component for ChoiceBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .lines()
            .into_iter()
            .map(|l| Line::styled(l, Style::default().fg(Color::Cyan)))
            .collect();
        let width = lines.first().map_or(0, |l| l.width() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        let target = Rect::new(x, area.y, width, self.height().min(area.height));
        frame.render_widget(Paragraph::new(lines), target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_minimum_width_with_even_prompt() {
        let g = geometry("Choose Version", &["Cinnamon", "MATE", "Xfce"]);
        assert_eq!(g, Geometry { width: 34, back_label: "< B - back >" });
    }

    #[test]
    fn test_odd_prompt_makes_width_odd() {
        let g = geometry("Choose your Distro Type", &["Nvidia", "RPI4", "LTS"]);
        assert_eq!(g, Geometry { width: 35, back_label: "< back: B >" });
    }

    #[test]
    fn test_long_prompt_grows_box() {
        let prompt = "A prompt that is clearly longer than the box";
        let g = geometry(prompt, &["x"]);
        assert_eq!(g.width, prompt.len() + 10);
    }

    #[test]
    fn test_long_option_grows_box() {
        let option = "Windows 11 Pro 24H2 x64 English International";
        let g = geometry("Choose Version", &[option]);
        // 45 + 7 + 1 = 53, bumped to 54 for the even prompt
        assert_eq!(g.width, 54);

        let g = geometry("Choose your Distro Type", &[option]);
        assert_eq!(g.width, 53);
    }

    #[test]
    fn test_digits_count_towards_width() {
        let option = "x".repeat(26);
        let options: Vec<&str> = std::iter::repeat_n(option.as_str(), 10).collect();
        // Option 10 needs 26 + 7 + 2 = 35, bumped to 36 for the even prompt
        assert_eq!(geometry("Choose Version", &options).width, 36);
    }

    #[test]
    fn test_every_line_has_the_box_width() {
        for prompt in ["Choose Version", "Choose your Distro Type"] {
            let options = ["Cinnamon", "MATE", "Xfce"];
            let width = geometry(prompt, &options).width;
            for line in box_lines(prompt, &options) {
                assert_eq!(line.width(), width, "{line}");
            }
        }
    }

    #[test]
    fn test_box_layout() {
        let lines = box_lines("Choose Version", &["Cinnamon", "MATE"]);
        assert_eq!(lines[0], format!("┌{0}< B - back >{0}┐", "─".repeat(10)));
        assert_eq!(lines[2], format!("│ [1] Cinnamon{}│", " ".repeat(19)));
        assert_eq!(lines[6], format!("│{0}Choose Version{0}│", " ".repeat(9)));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_render_centers_box() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut choice = ChoiceBox::new(
            "Choose Version",
            vec!["Cinnamon".to_string(), "MATE".to_string()],
        );
        terminal.draw(|f| choice.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("< B - back >"));
        assert!(text.contains("[2] MATE"));
        // (60 - 34) / 2 = 13 columns of left margin
        assert_eq!(buffer[(13, 0)].symbol(), "┌");
    }
}
