//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into `core::Action` values and performs the
//! `Effect`s the reducer asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Effects
//!
//! Network work (update check, version and link lookups, downloads,
//! retrievals) runs on tokio tasks that report back through an mpsc
//! channel. Quick local work (opening a URL, writing a file, launching a
//! downloaded file) runs inline and is fed straight back to `update`.
//! Shell commands suspend the full-screen UI and run in the plain terminal.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (busy spinner, download gauge): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms and only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::task::JoinHandle;

use crate::core::action::{Action, Effect, startup, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, DownloadPlan, Mode, VERSION, file_name};
use crate::net::client::{build_client, force_https};
use crate::net::download::{self, DownloadEvent};
use crate::net::resolver::{Endpoints, WebResolver};
use crate::platform::{Launcher, SystemLauncher};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

fn enable_terminal_modes() -> std::io::Result<()> {
    execute!(
        stdout(),
        EnableBracketedPaste,
        Show,
        // Non-blinking: avoids blink timer reset from continuous redraws
        SetCursorStyle::SteadyBlock
    )
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        enable_terminal_modes()?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Everything effects need besides the `App`.
struct Runtime {
    client: reqwest::Client,
    launcher: Arc<dyn Launcher>,
    tx: mpsc::Sender<Action>,
    download: Option<JoinHandle<()>>,
}

/// Result of performing one effect.
enum Step {
    Done,
    Quit,
    /// The effect finished inline; feed this back to `update`.
    Then(Action),
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client =
        build_client(&config.user_agent, config.timeout).map_err(std::io::Error::other)?;
    let endpoints = Endpoints {
        github_api: config.github_api_url.clone(),
        ..Endpoints::default()
    };
    let resolver = Arc::new(WebResolver::new(
        client.clone(),
        endpoints,
        &config.release_repo,
    ));
    let mut app = App::from_config(resolver, &config);
    let mut tui = TuiState::new();

    let (tx, rx) = mpsc::channel();
    let mut rt = Runtime {
        client,
        launcher: Arc::new(SystemLauncher),
        tx,
        download: None,
    };

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Couldn't enable terminal modes: {}", e);
    }

    let start_time = Instant::now();
    let mut needs_redraw = true;

    let first = startup(&mut app);
    let mut should_quit = settle(&mut app, first, &mut rt, &mut terminal)?;

    while !should_quit {
        let animating = matches!(app.mode, Mode::Busy(_) | Mode::Downloading);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::Interrupt => Action::Interrupt,
                other => match tui.input_box.handle_event(&other) {
                    Some(InputEvent::Submit(line)) => Action::Submit(line),
                    _ => continue,
                },
            };
            if dispatch(&mut app, action, &mut rt, &mut terminal)? {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break;
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if !matches!(action, Action::DownloadProgress { .. }) {
                debug!("Event loop received: {:?}", action);
            }
            if dispatch(&mut app, action, &mut rt, &mut terminal)? {
                should_quit = true;
                break;
            }
        }
    }

    if let Some(handle) = rt.download.take() {
        handle.abort();
    }
    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Exiting XToolBox");
    println!("bye!");
    Ok(())
}

/// Runs `action` through the reducer and performs the resulting effects.
/// Returns true when the app should exit.
fn dispatch(
    app: &mut App,
    action: Action,
    rt: &mut Runtime,
    terminal: &mut DefaultTerminal,
) -> std::io::Result<bool> {
    let effect = update(app, action);
    settle(app, effect, rt, terminal)
}

fn settle(
    app: &mut App,
    mut effect: Effect,
    rt: &mut Runtime,
    terminal: &mut DefaultTerminal,
) -> std::io::Result<bool> {
    loop {
        match perform(app, effect, rt, terminal)? {
            Step::Done => return Ok(false),
            Step::Quit => return Ok(true),
            Step::Then(action) => effect = update(app, action),
        }
    }
}

fn perform(
    app: &App,
    effect: Effect,
    rt: &mut Runtime,
    terminal: &mut DefaultTerminal,
) -> std::io::Result<Step> {
    let step = match effect {
        Effect::None => Step::Done,
        Effect::Quit => Step::Quit,
        Effect::CheckForUpdates => {
            let resolver = app.resolver.clone();
            let tx = rt.tx.clone();
            tokio::spawn(async move {
                let result = resolver.latest_release(VERSION).await;
                send(&tx, Action::UpdateChecked(result));
            });
            Step::Done
        }
        Effect::ResolveLatest { code, source, then } => {
            let resolver = app.resolver.clone();
            let tx = rt.tx.clone();
            tokio::spawn(async move {
                let result = resolver.latest_version(&source).await;
                send(&tx, Action::LatestResolved { code, result, then });
            });
            Step::Done
        }
        Effect::ExpandLink {
            code,
            index,
            placeholder,
            template,
        } => {
            let resolver = app.resolver.clone();
            let tx = rt.tx.clone();
            tokio::spawn(async move {
                let result = resolver.expand(&placeholder, &template).await;
                send(&tx, Action::LinkExpanded { code, index, result });
            });
            Step::Done
        }
        Effect::StartDownload(plan) => {
            rt.download = Some(spawn_download(plan, rt.client.clone(), rt.tx.clone()));
            Step::Done
        }
        Effect::CancelDownload(path) => {
            cancel_download(rt.download.take(), path);
            Step::Done
        }
        Effect::RunShell(command) => {
            let result = run_suspended(terminal, || rt.launcher.run_shell(&command))?;
            Step::Then(Action::TaskFinished(result))
        }
        Effect::OpenUrl(url) => Step::Then(Action::TaskFinished(rt.launcher.open_url(&url))),
        Effect::Retrieve { url, path } => {
            let client = rt.client.clone();
            let tx = rt.tx.clone();
            tokio::spawn(async move {
                let result = match download::fetch_to_file(&client, &url, &path).await {
                    Ok(bytes) => Ok(format!("Saved {} ({} bytes)", file_name(&path), bytes)),
                    Err(e) => Err(e.to_string()),
                };
                send(&tx, Action::TaskFinished(result));
            });
            Step::Done
        }
        Effect::WriteFile { path, content } => {
            Step::Then(Action::TaskFinished(rt.launcher.write_file(&path, &content)))
        }
        Effect::LaunchFile { path, then_quit } => {
            let result = rt.launcher.open_path(&path);
            if then_quit {
                if let Err(e) = &result {
                    warn!("{}", e);
                }
                Step::Quit
            } else {
                Step::Then(Action::TaskFinished(result))
            }
        }
    };
    Ok(step)
}

fn send(tx: &mpsc::Sender<Action>, action: Action) {
    if tx.send(action).is_err() {
        warn!("Failed to send action: receiver dropped");
    }
}

/// Streams the download on a task, forwarding progress as actions.
fn spawn_download(
    plan: DownloadPlan,
    client: reqwest::Client,
    tx: mpsc::Sender<Action>,
) -> JoinHandle<()> {
    info!("Spawning download of {}", plan.file_name());
    tokio::spawn(async move {
        let url = force_https(&plan.url);
        let (event_tx, mut event_rx) = tokio::sync::mpsc::channel::<DownloadEvent>(64);

        let progress_tx = tx.clone();
        let forward = async move {
            while let Some(event) = event_rx.recv().await {
                let action = match event {
                    DownloadEvent::Started { total } => Action::DownloadStarted { total },
                    DownloadEvent::Progress { received } => Action::DownloadProgress { received },
                };
                if progress_tx.send(action).is_err() {
                    return;
                }
            }
        };

        let (result, ()) = tokio::join!(
            download::download(&client, &url, &plan.path, plan.overwrite, event_tx),
            forward
        );
        send(&tx, Action::DownloadFinished(result));
    })
}

/// Aborts the download task, then removes what it wrote.
fn cancel_download(handle: Option<JoinHandle<()>>, path: PathBuf) {
    let Some(handle) = handle else {
        return;
    };
    info!("Cancelling download of {}", path.display());
    handle.abort();
    tokio::spawn(async move {
        // Wait for the task to drop its file handle
        let _ = handle.await;
        download::remove_partial(&path).await;
    });
}

/// Leaves the full-screen UI, runs `f` in the plain terminal, waits for
/// ENTER and restores the UI.
fn run_suspended<T>(terminal: &mut DefaultTerminal, f: impl FnOnce() -> T) -> std::io::Result<T> {
    ratatui::restore();
    let result = f();

    print!("\nPress ENTER to return to XToolBox...");
    stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    *terminal = ratatui::try_init()?;
    enable_terminal_modes()?;
    terminal.clear()?;
    Ok(result)
}
