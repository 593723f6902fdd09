//! # Core Application Logic
//!
//! This module contains XToolBox's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (tool table) │
//!                    │  • Interpreter (input)  │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    NET     │      │  PLATFORM  │
//!     │ (ratatui)  │      │ (reqwest)  │      │ (launcher) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The `Catalog` of tools, pages and download links
//! - [`placeholder`]: `%TOKEN%` templates resolved by scraping
//! - [`interpreter`]: Input line → `Command` for the current screen
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file, env and CLI layering

pub mod action;
pub mod catalog;
pub mod config;
pub mod interpreter;
pub mod placeholder;
pub mod quotes;
pub mod state;
