//! # CatalogTable Component
//!
//! The main menu: four category columns of one page, 14 rows each.
//!
//! ```text
//!              XToolBox | v4.3, Made by Nyxie.
//! ┌────────────────┬────────────────┬────────────────┬────────────┐
//! │ [D] Debloat    │ [T] Tweaks     │ [A] Apps       │ [C] Clean… │
//! ├────────────────┼────────────────┼────────────────┼────────────┤
//! │ [1] EchoX      │ [1] Insider… ADV                             │
//! │ ...                                                           │
//! ├────────────────┼────────────────┼────────────────┼────────────┤
//! │ [H] Help       │ [N] Next page  │ [B] Previous…  │ 1/3        │
//! └────────────────┴────────────────┴────────────────┴────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Row, Table};

use crate::core::catalog::{Catalog, Column, Tool};
use crate::core::quotes::FOOTERS;
use crate::tui::component::Component;

/// Minimum width of a column, as in the classic console layout.
const MIN_COLUMN_WIDTH: u16 = 24;

pub struct CatalogTable<'a> {
    pub catalog: &'a Catalog,
    pub page: u8,
    pub title: String,
}

impl<'a> CatalogTable<'a> {
    pub fn new(catalog: &'a Catalog, page: u8, title: String) -> Self {
        Self {
            catalog,
            page,
            title,
        }
    }

    /// Rows needed to draw the table: 14 entries plus header, footer and borders.
    pub fn height(&self) -> u16 {
        crate::core::catalog::ROWS_PER_PAGE as u16 + 6
    }
}

fn header_cell(column: &Column) -> Cell<'static> {
    Cell::from(Line::from(vec![
        Span::raw("["),
        Span::styled(
            column.prefix.to_ascii_uppercase().to_string(),
            Style::default().fg(Color::Blue),
        ),
        Span::raw(format!("] {}", column.title)),
    ]))
    .style(Style::default().add_modifier(Modifier::BOLD))
}

fn tool_cell(tool: Option<&Tool>) -> Cell<'static> {
    let Some(tool) = tool else {
        return Cell::from("");
    };
    let mut spans = vec![
        Span::styled("[", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            tool.row_number().to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::styled("] ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(tool.name.clone()),
    ];
    if tool.is_advanced() {
        spans.push(Span::styled(" ADV", Style::default().fg(Color::Yellow)));
    }
    Cell::from(Line::from(spans))
}

impl Component for CatalogTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(layout) = self.catalog.layout(self.page) else {
            return;
        };

        let header = Row::new(layout.columns.iter().map(header_cell)).bottom_margin(1);

        let rows = self
            .catalog
            .rows(self.page)
            .into_iter()
            .map(|cells| Row::new(cells.into_iter().map(tool_cell)));

        let mut footer: Vec<Cell> = FOOTERS.iter().map(|f| Cell::from(*f)).collect();
        footer.push(Cell::from(Span::styled(
            format!("{}/{}", self.page, self.catalog.page_count()),
            Style::default().fg(Color::Blue),
        )));
        let footer = Row::new(footer).top_margin(1);

        let widths = [Constraint::Min(MIN_COLUMN_WIDTH); 4];
        let table = Table::new(rows, widths)
            .header(header)
            .footer(footer)
            .column_spacing(2)
            .block(
                Block::bordered()
                    .title(Line::from(self.title.clone()).alignment(Alignment::Center))
                    .title_style(Style::default().add_modifier(Modifier::ITALIC)),
            );

        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(page: u8) -> String {
        let catalog = Catalog::default();
        let backend = TestBackend::new(120, 22);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut table = CatalogTable::new(&catalog, page, "XToolBox | test".to_string());

        terminal.draw(|f| table.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_first_page_headers_rows_and_footer() {
        let text = render(1);
        assert!(text.contains("XToolBox | test"));
        assert!(text.contains("[D] Debloat"));
        assert!(text.contains("[C] Cleaning"));
        assert!(text.contains("[1] EchoX"));
        assert!(text.contains("[H] Help"));
        assert!(text.contains("1/3"));
    }

    #[test]
    fn test_advanced_entries_are_flagged() {
        let text = render(1);
        assert!(text.contains("InsiderEnroller ADV"));
        assert!(!text.contains("EchoX ADV"));
    }

    #[test]
    fn test_last_page_footer() {
        let text = render(3);
        assert!(text.contains("[G] Game Stores"));
        assert!(text.contains("3/3"));
    }

    #[test]
    fn test_height_fits_all_rows() {
        let catalog = Catalog::default();
        let table = CatalogTable::new(&catalog, 1, String::new());
        assert_eq!(table.height(), 20);
    }
}
