//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `CatalogTable`: the four-column page of catalog entries
//! - `ChoiceBox`: link picker for entries with several downloads
//! - `HelpPanel`, `InfoPanel`: reference screens
//! - `MessagePanel`: notices, yes/no prompts and the busy spinner
//! - `DownloadGauge`: progress of the running download
//! - `StatusBar`: one-line feedback in the tone's color
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `InputBox`: the `> ` prompt; emits `InputEvent::Submit`
//!
//! Components receive external data as props, not by reaching into `App`.
//! That keeps each one renderable from a test with a `TestBackend`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! StatusBar::new(app.status.clone()).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! StatusBar.render(frame, area); // reads from global App
//! ```

pub mod catalog_table;
pub mod choice_box;
pub mod download_gauge;
pub mod help_panel;
pub mod info_panel;
pub mod input_box;
pub mod message_panel;
pub mod status_bar;

pub use catalog_table::CatalogTable;
pub use choice_box::ChoiceBox;
pub use download_gauge::DownloadGauge;
pub use help_panel::HelpPanel;
pub use info_panel::InfoPanel;
pub use input_box::{InputBox, InputEvent};
pub use message_panel::{Footer, MessagePanel};
pub use status_bar::StatusBar;
