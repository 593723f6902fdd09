use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const KEYS: &[(&str, &str)] = &[
    ("H", "Help Page (this page)"),
    ("N", "Next Page"),
    ("B", "Previous Page (back)"),
    ("99", "Exit"),
];

const ERRORS: &[(u8, &str)] = &[
    (1, "File already exists"),
    (2, "Can't check for file overwrite"),
    (3, "Can't download file from the server"),
];

const WIDTH: usize = 55;

fn row(text: String) -> Line<'static> {
    Line::from(format!("│{text:<WIDTH$}│"))
}

fn centered(text: &str) -> Line<'static> {
    Line::from(format!("│{text:^WIDTH$}│"))
}

fn rule(left: char, right: char) -> Line<'static> {
    Line::from(format!("{left}{}{right}", "─".repeat(WIDTH)))
}

/// Key, color and error reference.
pub struct HelpPanel;

impl HelpPanel {
    pub fn lines() -> Vec<Line<'static>> {
        let mut lines = vec![rule('┌', '┐'), row(" Key │ Command".to_string())];
        for (key, command) in KEYS {
            lines.push(row(format!(" {key:^3} │ {command}")));
        }
        lines.push(rule('├', '┤'));
        lines.push(row(" Color  │ Meaning".to_string()));
        lines.push(Line::from(vec![
            Span::raw("│ "),
            Span::styled("YELLOW", Style::default().fg(Color::Yellow)),
            Span::raw(format!(" │ {:<w$}│", "Advanced Option", w = WIDTH - 10)),
        ]));
        lines.push(rule('├', '┤'));
        lines.push(row(" Error │ Explanation".to_string()));
        for (code, text) in ERRORS {
            lines.push(row(format!("   {code}   │ {text}")));
        }
        lines.push(rule('├', '┤'));
        lines.push(centered("If scripts won't execute, press P"));
        lines.push(rule('├', '┤'));
        lines.push(centered("Press ENTER/B to go back."));
        lines.push(rule('└', '┘'));
        lines
    }
}

impl Component for HelpPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(Self::lines()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_every_line_is_boxed() {
        for line in HelpPanel::lines() {
            assert_eq!(text(&line).width(), WIDTH + 2, "{}", text(&line));
        }
    }

    #[test]
    fn test_lists_keys_errors_and_policy_hint() {
        let all: String = HelpPanel::lines().iter().map(text).collect();
        assert!(all.contains("99  │ Exit"));
        assert!(all.contains("YELLOW"));
        assert!(all.contains("3   │ Can't download file from the server"));
        assert!(all.contains("If scripts won't execute, press P"));
        assert!(all.contains("Press ENTER/B to go back."));
    }
}
