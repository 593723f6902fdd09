use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, Mode};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CatalogTable, ChoiceBox, DownloadGauge, Footer, HelpPanel, InfoPanel, MessagePanel, StatusBar,
};

/// Screen for the current mode, then the status line, then the prompt.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1), Length(1)]);
    let [main_area, status_area, input_area] = layout.areas(frame.area());

    draw_main(frame, main_area, app, spinner_frame);
    StatusBar::new(app.status.clone()).render(frame, status_area);

    tui.input_box.dimmed = matches!(app.mode, Mode::Busy(_) | Mode::Downloading);
    tui.input_box.render(frame, input_area);
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App, spinner_frame: usize) {
    match &app.mode {
        Mode::Browse => {
            CatalogTable::new(&app.catalog, app.page, app.title()).render(frame, area);
        }
        Mode::Help => HelpPanel.render(frame, area),
        Mode::Info(_) => {
            if let Some(tool) = app.focused_tool() {
                InfoPanel::new(tool).render(frame, area);
            }
        }
        Mode::Notice(lines) => {
            MessagePanel::new(lines.clone(), Footer::PressEnter).render(frame, area);
        }
        Mode::Confirm(prompt) => {
            MessagePanel::new(prompt.lines.clone(), Footer::Question(prompt.question.clone()))
                .render(frame, area);
        }
        Mode::Choose(_) => {
            let Some(tool) = app.focused_tool() else {
                return;
            };
            let options = tool.links.iter().map(|l| l.description.clone()).collect();
            let mut choice = ChoiceBox::new(tool.choice_prompt(), options);
            let mut table = CatalogTable::new(&app.catalog, app.page, app.title());

            let [table_area, choice_area] = Layout::vertical([
                Constraint::Length(table.height()),
                Constraint::Min(choice.height()),
            ])
            .areas(area);
            table.render(frame, table_area);
            choice.render(frame, choice_area);
        }
        Mode::Busy(text) => {
            let footer = Footer::Spinner {
                frame: spinner_frame,
                text: text.clone(),
            };
            MessagePanel::new(Vec::new(), footer).render(frame, area);
        }
        Mode::Downloading => {
            if let Some(progress) = &app.download {
                DownloadGauge::new(progress).render(frame, area);
            }
        }
    }
}
