use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::catalog::Tool;
use crate::tui::component::Component;

const INDENT: &str = "    ";
const NO_INFO: &str = "Whoopsies, we dont have any additional info on this tool :/";

/// What `i <code>` shows: the name, every URL the entry acts on and the
/// free-form info, wrapped to the panel width.
pub struct InfoPanel<'a> {
    pub tool: &'a Tool,
}

impl<'a> InfoPanel<'a> {
    pub fn new(tool: &'a Tool) -> Self {
        Self { tool }
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let wrap_width = (width as usize).saturating_sub(INDENT.len()).max(20);
        let indented = textwrap::Options::new(wrap_width)
            .initial_indent(INDENT)
            .subsequent_indent(INDENT);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Name: ", bold),
                Span::raw(self.tool.name.clone()),
            ]),
            Line::styled(self.tool.kind.info_heading(), bold),
        ];
        for index in 0..self.tool.links.len() {
            let url = match self.tool.url(index) {
                Ok(url) => url,
                Err(e) => e.to_string(),
            };
            lines.push(Line::styled(
                format!("{INDENT}{url}"),
                Style::default().fg(Color::Cyan),
            ));
        }

        lines.push(Line::styled("Additional info:", bold));
        let info = if self.tool.info.is_empty() {
            NO_INFO
        } else {
            self.tool.info.as_str()
        };
        lines.extend(
            textwrap::wrap(info, &indented)
                .into_iter()
                .map(|l| Line::from(l.into_owned())),
        );
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "... press ENTER to continue ...",
            Style::default().fg(Color::DarkGray),
        ));
        lines
    }
}

impl Component for InfoPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines(area.width)), area);
    }
}
