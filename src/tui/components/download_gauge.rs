use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Gauge};

use crate::core::state::DownloadProgress;
use crate::tui::component::Component;

/// Banner plus progress bar for the running download.
pub struct DownloadGauge<'a> {
    pub progress: &'a DownloadProgress,
}

impl<'a> DownloadGauge<'a> {
    pub fn new(progress: &'a DownloadProgress) -> Self {
        Self { progress }
    }

    pub fn banner(&self) -> String {
        format!(
            "↓ Downloading {}, file size {:.1}MB",
            self.progress.plan.label,
            self.progress.size_mb()
        )
    }

    fn label(&self) -> String {
        let mb = |bytes: u64| bytes as f64 / 1024.0 / 1024.0;
        if self.progress.total == 0 {
            format!("{:.1}MB", mb(self.progress.received))
        } else {
            format!(
                "{:.1}/{:.1}MB ({:.0}%)",
                mb(self.progress.received),
                mb(self.progress.total),
                self.progress.ratio() * 100.0
            )
        }
    }
}

impl Component for DownloadGauge<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [banner_area, gauge_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Line::styled(self.banner(), Style::default().fg(Color::Green)),
            banner_area,
        );
        frame.render_widget(
            Gauge::default()
                .block(Block::bordered())
                .gauge_style(Style::default().fg(Color::Green))
                .ratio(self.progress.ratio())
                .label(self.label()),
            gauge_area,
        );
        frame.render_widget(
            Line::styled("Ctrl+C to abort", Style::default().fg(Color::DarkGray)),
            hint_area,
        );
    }
}
