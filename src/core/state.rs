//! # Application State
//!
//! Core business state for XToolBox. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog               // tool table + cached latest versions
//! ├── resolver: Arc<dyn Resolver>    // version / link lookups
//! ├── page: u8                       // catalog page being shown
//! ├── mode: Mode                     // what the screen is waiting for
//! ├── status: Option<Status>         // one-line feedback under the table
//! ├── page_views: usize              // drives the title rotation
//! ├── quote_seed: usize              // randomizes the first quote
//! ├── download: Option<DownloadProgress>
//! ├── download_dir: PathBuf
//! └── check_updates: bool
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::catalog::{Catalog, Tool};
use crate::core::config::ResolvedConfig;
use crate::core::interpreter::Screen;
use crate::core::quotes;
use crate::net::github::Release;
use crate::net::resolver::Resolver;

pub const VERSION: &str = "4.3";

/// Color and marker of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Question,
    Error,
    Info,
}

impl Tone {
    pub fn marker(self) -> &'static str {
        match self {
            Tone::Success => "[✓]",
            Tone::Question => "[?]",
            Tone::Error => "[✗]",
            Tone::Info => "[>]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub tone: Tone,
    pub text: String,
}

impl Status {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// What happens once a download has landed on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterDownload {
    /// Ask "Run <file>?" unless the file is a disk image.
    OfferLaunch,
    /// Start the file and exit (self-update).
    LaunchAndQuit,
}

/// Everything the download task needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    pub url: String,
    pub path: PathBuf,
    /// Name shown while downloading.
    pub label: String,
    /// Replace an existing file instead of failing with error 1.
    pub overwrite: bool,
    pub then: AfterDownload,
}

impl DownloadPlan {
    pub fn file_name(&self) -> String {
        file_name(&self.path)
    }
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// What a yes/no prompt is asking permission for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purpose {
    Download(DownloadPlan),
    Overwrite(DownloadPlan),
    RunShell(String),
    OpenUrl(String),
    Retrieve { url: String, path: PathBuf },
    LaunchFile(PathBuf),
    Update(Release),
    ContinueOffline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Context printed above the question.
    pub lines: Vec<String>,
    pub question: String,
    pub purpose: Purpose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Catalog table for `App::page`.
    Browse,
    Help,
    /// Info screen for a tool code.
    Info(String),
    /// Message lines followed by "Press ENTER to continue...".
    Notice(Vec<String>),
    Confirm(Prompt),
    /// Multi-choice box for a tool code.
    Choose(String),
    /// A background task is running; input is ignored.
    Busy(String),
    Downloading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadProgress {
    pub plan: DownloadPlan,
    /// Zero when the server did not report a size.
    pub total: u64,
    pub received: u64,
}

impl DownloadProgress {
    pub fn new(plan: DownloadPlan) -> Self {
        Self {
            plan,
            total: 0,
            received: 0,
        }
    }

    /// Completed fraction in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.received as f64 / self.total as f64).clamp(0.0, 1.0)
        }
    }

    /// Size in megabytes, one decimal, as shown in the download banner.
    pub fn size_mb(&self) -> f64 {
        (self.total as f64 / 1024.0 / 1024.0 * 10.0).round() / 10.0
    }
}

pub struct App {
    pub catalog: Catalog,
    pub resolver: Arc<dyn Resolver>,
    pub page: u8,
    pub mode: Mode,
    pub status: Option<Status>,
    /// Number of times a catalog page has been shown.
    pub page_views: usize,
    pub quote_seed: usize,
    pub download: Option<DownloadProgress>,
    pub download_dir: PathBuf,
    pub check_updates: bool,
}

impl App {
    pub fn new(resolver: Arc<dyn Resolver>, download_dir: PathBuf) -> Self {
        Self {
            catalog: Catalog::default(),
            resolver,
            page: 1,
            mode: Mode::Busy(String::from("Checking for updates...")),
            status: None,
            page_views: 0,
            quote_seed: 0,
            download: None,
            download_dir,
            check_updates: true,
        }
    }

    pub fn from_config(resolver: Arc<dyn Resolver>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(resolver, config.download_dir.clone());
        app.check_updates = config.check_updates;
        app.quote_seed = chrono::Utc::now().timestamp_subsec_nanos() as usize;
        app
    }

    /// Switches to the catalog table of `page`.
    pub fn show_page(&mut self, page: u8) {
        self.page = page;
        self.mode = Mode::Browse;
        self.page_views += 1;
    }

    pub fn set_status(&mut self, tone: Tone, text: impl Into<String>) {
        self.status = Some(Status::new(tone, text));
    }

    /// Table title: the version banner on the first view, a quote afterwards.
    pub fn title(&self) -> String {
        if self.page_views <= 1 {
            format!("XToolBox | v{VERSION}, Made by Nyxie.")
        } else {
            format!(
                "XToolBox | {}",
                quotes::pick(self.quote_seed.wrapping_add(self.page_views))
            )
        }
    }

    /// Screen the input line is interpreted against, or `None` when the
    /// current mode does not use the interpreter.
    pub fn screen(&self) -> Option<Screen> {
        match &self.mode {
            Mode::Browse => Some(Screen::Catalog(self.page)),
            Mode::Help => Some(Screen::Help),
            Mode::Confirm(_) => Some(Screen::Confirm),
            Mode::Choose(code) => self.catalog.get(code).map(|tool| Screen::Choose {
                options: tool.links.len(),
            }),
            Mode::Info(_) | Mode::Notice(_) | Mode::Busy(_) | Mode::Downloading => None,
        }
    }

    /// Tool whose screen is open (info or multi-choice), if any.
    pub fn focused_tool(&self) -> Option<&Tool> {
        match &self.mode {
            Mode::Info(code) | Mode::Choose(code) => self.catalog.get(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.page, 1);
        assert!(app.status.is_none());
        assert!(matches!(app.mode, Mode::Busy(_)));
        assert!(app.download.is_none());
        assert!(app.screen().is_none());
    }

    #[test]
    fn test_title_shows_version_first_then_quotes() {
        let mut app = test_app();
        app.show_page(1);
        assert_eq!(app.title(), "XToolBox | v4.3, Made by Nyxie.");
        app.show_page(2);
        let title = app.title();
        assert!(title.starts_with("XToolBox | "));
        assert!(!title.contains("Made by Nyxie"));
    }

    #[test]
    fn test_screen_follows_mode() {
        let mut app = test_app();
        app.show_page(3);
        assert_eq!(app.screen(), Some(Screen::Catalog(3)));
        app.mode = Mode::Help;
        assert_eq!(app.screen(), Some(Screen::Help));
        app.mode = Mode::Choose("l1-2".to_string());
        let options = app.catalog.get("l1-2").unwrap().links.len();
        assert_eq!(app.screen(), Some(Screen::Choose { options }));
        app.mode = Mode::Notice(vec![]);
        assert_eq!(app.screen(), None);
    }

    #[test]
    fn test_progress_ratio_and_size() {
        let plan = DownloadPlan {
            url: "https://x/a.exe".to_string(),
            path: PathBuf::from("a.exe"),
            label: "A".to_string(),
            overwrite: false,
            then: AfterDownload::OfferLaunch,
        };
        let mut progress = DownloadProgress::new(plan);
        assert_eq!(progress.ratio(), 0.0);
        progress.total = 4 * 1024 * 1024;
        progress.received = 1024 * 1024;
        assert_eq!(progress.ratio(), 0.25);
        assert_eq!(progress.size_mb(), 4.0);
        progress.received = 5 * 1024 * 1024;
        assert_eq!(progress.ratio(), 1.0);
    }

    #[test]
    fn test_tone_markers() {
        assert_eq!(Tone::Success.marker(), "[✓]");
        assert_eq!(Tone::Question.marker(), "[?]");
        assert_eq!(Tone::Error.marker(), "[✗]");
        assert_eq!(Tone::Info.marker(), "[>]");
    }
}
