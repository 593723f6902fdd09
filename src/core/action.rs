//! # Actions
//!
//! Everything that can happen in XToolBox becomes an `Action`.
//! User presses Enter? That's `Action::Submit(line)`.
//! A download reports progress? That's `Action::DownloadProgress { received }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` describing the I/O the TUI should
//! perform next. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Effects report back with another action, so every flow is a chain of
//! `update` calls that can be driven from a test without a terminal.

use log::{debug, info, warn};
use std::path::PathBuf;

use crate::core::catalog::{ActionKind, VersionSource};
use crate::core::interpreter::{self, Command};
use crate::core::placeholder::Placeholder;
use crate::core::state::{
    AfterDownload, App, DownloadPlan, DownloadProgress, Mode, Prompt, Purpose, Tone, file_name,
};
use crate::net::NetError;
use crate::net::download::DownloadError;
use crate::net::github::Release;

/// Command elevated from the help screen with `p`.
pub const ELEVATE_POLICY: &str = "Set-ExecutionPolicy Unrestricted -Scope CurrentUser";

/// What to do once a tool's latest version is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterResolve {
    ShowInfo,
    Run { index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A line typed into the prompt.
    Submit(String),
    /// Ctrl+C.
    Interrupt,
    UpdateChecked(Result<Option<Release>, NetError>),
    LatestResolved {
        code: String,
        result: Result<String, NetError>,
        then: AfterResolve,
    },
    LinkExpanded {
        code: String,
        index: usize,
        result: Result<String, NetError>,
    },
    DownloadStarted {
        total: u64,
    },
    DownloadProgress {
        received: u64,
    },
    DownloadFinished(Result<PathBuf, DownloadError>),
    /// A shell command, browser launch, fetch or file write completed.
    TaskFinished(Result<String, String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    CheckForUpdates,
    ResolveLatest {
        code: String,
        source: VersionSource,
        then: AfterResolve,
    },
    ExpandLink {
        code: String,
        index: usize,
        placeholder: Placeholder,
        template: String,
    },
    StartDownload(DownloadPlan),
    /// Abort the running download and remove its partial file.
    CancelDownload(PathBuf),
    RunShell(String),
    OpenUrl(String),
    Retrieve {
        url: String,
        path: PathBuf,
    },
    WriteFile {
        path: PathBuf,
        content: String,
    },
    LaunchFile {
        path: PathBuf,
        then_quit: bool,
    },
}

/// First effect of a session: the update check, or straight to page 1.
pub fn startup(app: &mut App) -> Effect {
    if app.check_updates {
        app.mode = Mode::Busy(String::from("Checking for updates..."));
        Effect::CheckForUpdates
    } else {
        app.show_page(1);
        Effect::None
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(line) => submit(app, &line),
        Action::Interrupt => interrupt(app),
        Action::UpdateChecked(result) => update_checked(app, result),
        Action::LatestResolved { code, result, then } => match result {
            Ok(version) => {
                let Some(tool) = app.catalog.get_mut(&code) else {
                    return back_to_page(app);
                };
                info!("Latest version of {} is {}", tool.name, version);
                tool.record_latest(version.clone());
                app.set_status(Tone::Success, format!("Found it: {version}"));
                match then {
                    AfterResolve::ShowInfo => {
                        app.mode = Mode::Info(code);
                        Effect::None
                    }
                    AfterResolve::Run { index } => run_link(app, &code, index),
                }
            }
            Err(e) => {
                warn!("Latest version lookup failed for {}: {}", code, e);
                let name = tool_name(app, &code);
                let effect = back_to_page(app);
                app.set_status(
                    Tone::Error,
                    format!("Couldn't find the latest version of {name}: {e}"),
                );
                effect
            }
        },
        Action::LinkExpanded {
            code,
            index,
            result,
        } => match result {
            Ok(url) => {
                debug!("Expanded link {} of {} to {}", index, code, url);
                approve(app, &code, index, url)
            }
            Err(e) => {
                warn!("Link expansion failed for {}: {}", code, e);
                let name = tool_name(app, &code);
                let effect = back_to_page(app);
                app.set_status(
                    Tone::Error,
                    format!("Couldn't find the download link for {name}: {e}"),
                );
                effect
            }
        },
        Action::DownloadStarted { total } => {
            if let Some(progress) = app.download.as_mut() {
                progress.total = total;
            }
            Effect::None
        }
        Action::DownloadProgress { received } => {
            if let Some(progress) = app.download.as_mut() {
                progress.received = received;
            }
            Effect::None
        }
        Action::DownloadFinished(result) => download_finished(app, result),
        Action::TaskFinished(result) => {
            let effect = back_to_page(app);
            match result {
                Ok(message) => app.set_status(Tone::Success, message),
                Err(message) => app.set_status(Tone::Error, message),
            }
            effect
        }
    }
}

fn submit(app: &mut App, line: &str) -> Effect {
    match &app.mode {
        Mode::Busy(_) | Mode::Downloading => return Effect::None,
        Mode::Info(_) | Mode::Notice(_) => {
            if line.trim() == "99" {
                return Effect::Quit;
            }
            return back_to_page(app);
        }
        _ => {}
    }
    let Some(screen) = app.screen() else {
        return back_to_page(app);
    };

    app.status = None;
    let command = interpreter::interpret(screen, line, &app.catalog);
    debug!("Input {:?} on {:?} → {:?}", line, screen, command);

    match command {
        Command::Exit => Effect::Quit,
        Command::OpenHelp => {
            app.mode = Mode::Help;
            Effect::None
        }
        Command::HelpBlocked => {
            app.set_status(Tone::Info, "Exit selection to access help!");
            Effect::None
        }
        Command::InfoUsage => {
            app.mode = Mode::Notice(vec![
                String::from("'i' is not a valid command, if you want info type:"),
                String::from("    i <CODE>"),
                String::from("For example: i d2"),
            ]);
            Effect::None
        }
        Command::NextPage => {
            let page = interpreter::next_page(app.page, app.catalog.page_count());
            app.show_page(page);
            Effect::None
        }
        Command::PreviousPage => {
            let page = interpreter::previous_page(app.page, app.catalog.page_count());
            app.show_page(page);
            Effect::None
        }
        Command::Select(code) => {
            let links = app.catalog.get(&code).map_or(0, |t| t.links.len());
            if links > 1 {
                app.mode = Mode::Choose(code);
                Effect::None
            } else {
                run_link(app, &code, 0)
            }
        }
        Command::Info(code) => {
            if let Some(tool) = app.catalog.get(&code)
                && tool.needs_latest()
                && let Some(source) = tool.version.clone()
            {
                app.mode = Mode::Busy(String::from("Checking for latest version..."));
                return Effect::ResolveLatest {
                    code,
                    source,
                    then: AfterResolve::ShowInfo,
                };
            }
            app.mode = Mode::Info(code);
            Effect::None
        }
        Command::Back | Command::Cancel => back_to_page(app),
        Command::ElevatePolicy => {
            app.mode = Mode::Confirm(Prompt {
                lines: vec![
                    String::from("XTBox will run the following command as powershell:"),
                    format!("    {ELEVATE_POLICY}"),
                ],
                question: String::from("Approve?"),
                purpose: Purpose::RunShell(ELEVATE_POLICY.to_string()),
            });
            Effect::None
        }
        Command::Answer(yes) => answer(app, yes),
        Command::Choose(index) => match &app.mode {
            Mode::Choose(code) => {
                let code = code.clone();
                run_link(app, &code, index)
            }
            _ => Effect::None,
        },
        Command::Nothing => Effect::None,
        Command::Unknown(input) => {
            app.set_status(Tone::Error, format!("No option named {input}"));
            Effect::None
        }
    }
}

/// Returns to the catalog page the user was on.
fn back_to_page(app: &mut App) -> Effect {
    let page = app.page;
    app.show_page(page);
    Effect::None
}

fn tool_name(app: &App, code: &str) -> String {
    app.catalog
        .get(code)
        .map_or_else(|| code.to_string(), |t| t.name.clone())
}

/// Prepares link `index` of a tool: resolves the version, then any
/// placeholder, then asks for approval.
fn run_link(app: &mut App, code: &str, index: usize) -> Effect {
    let tool = match app.catalog.tool(code) {
        Ok(tool) => tool,
        Err(e) => {
            warn!("{}", e);
            let effect = back_to_page(app);
            app.set_status(Tone::Error, e.to_string());
            return effect;
        }
    };

    if tool.needs_latest()
        && let Some(source) = tool.version.clone()
    {
        app.mode = Mode::Busy(String::from("Checking for latest version..."));
        return Effect::ResolveLatest {
            code: code.to_string(),
            source,
            then: AfterResolve::Run { index },
        };
    }

    let url = match tool.url(index) {
        Ok(url) => url,
        Err(e) => {
            warn!("{}", e);
            let effect = back_to_page(app);
            app.set_status(Tone::Error, e.to_string());
            return effect;
        }
    };

    if tool.kind.expands_placeholders()
        && let Some(placeholder) = Placeholder::detect(&url)
    {
        app.mode = Mode::Busy(format!("Looking up the latest {}...", placeholder.label()));
        return Effect::ExpandLink {
            code: code.to_string(),
            index,
            placeholder,
            template: url,
        };
    }

    approve(app, code, index, url)
}

/// Shows the approval prompt for a fully resolved link.
fn approve(app: &mut App, code: &str, index: usize, url: String) -> Effect {
    let Some(tool) = app.catalog.get(code) else {
        return back_to_page(app);
    };
    let executable = tool.executable(index).unwrap_or_default().to_string();
    let label = tool.link_name(index).unwrap_or(tool.name.as_str()).to_string();

    let (lines, purpose) = match tool.kind {
        ActionKind::Download => (
            vec![
                String::from("XToolBox will download an executable from:"),
                format!(" → {url}"),
            ],
            Purpose::Download(DownloadPlan {
                url,
                path: app.download_dir.join(&executable),
                label,
                overwrite: false,
                then: AfterDownload::OfferLaunch,
            }),
        ),
        ActionKind::RunShell => (
            vec![
                String::from("XTBox will run the following command as powershell:"),
                format!("    {url}"),
            ],
            Purpose::RunShell(url),
        ),
        ActionKind::OpenWeb => (
            vec![String::from("XTBox will open:"), format!("    {url}")],
            Purpose::OpenUrl(url),
        ),
        ActionKind::Retrieve => (
            vec![
                String::from("XTBox will retrieve data from:"),
                format!("    {url}"),
            ],
            Purpose::Retrieve {
                url,
                path: app.download_dir.join(&executable),
            },
        ),
        ActionKind::WriteFile => {
            // Nothing is executed, so no approval is asked.
            let path = app.download_dir.join(&executable);
            app.mode = Mode::Busy(format!("Writing {}...", file_name(&path)));
            return Effect::WriteFile { path, content: url };
        }
    };

    app.mode = Mode::Confirm(Prompt {
        lines,
        question: String::from("Approve?"),
        purpose,
    });
    Effect::None
}

fn start_download(app: &mut App, plan: DownloadPlan) -> Effect {
    info!("Starting download of {} from {}", plan.file_name(), plan.url);
    app.mode = Mode::Downloading;
    app.download = Some(DownloadProgress::new(plan.clone()));
    Effect::StartDownload(plan)
}

fn answer(app: &mut App, yes: bool) -> Effect {
    let Mode::Confirm(prompt) = &app.mode else {
        return Effect::None;
    };
    let purpose = prompt.purpose.clone();

    if !yes {
        return match purpose {
            Purpose::ContinueOffline => Effect::Quit,
            Purpose::Update(_) => {
                app.show_page(1);
                Effect::None
            }
            _ => back_to_page(app),
        };
    }

    match purpose {
        Purpose::Download(plan) | Purpose::Overwrite(plan) => start_download(app, plan),
        Purpose::RunShell(command) => {
            app.mode = Mode::Busy(String::from("Running command..."));
            Effect::RunShell(command)
        }
        Purpose::OpenUrl(url) => {
            app.mode = Mode::Busy(String::from("Opening browser..."));
            Effect::OpenUrl(url)
        }
        Purpose::Retrieve { url, path } => {
            app.mode = Mode::Busy(format!("Retrieving {}...", file_name(&path)));
            Effect::Retrieve { url, path }
        }
        Purpose::LaunchFile(path) => {
            app.mode = Mode::Busy(format!("Starting {}...", file_name(&path)));
            Effect::LaunchFile {
                path,
                then_quit: false,
            }
        }
        Purpose::Update(release) => {
            let plan = DownloadPlan {
                url: release.download_url.clone(),
                path: app
                    .download_dir
                    .join(format!("XTBox.{}.exe", release.version)),
                label: String::from("XToolBox Update"),
                overwrite: true,
                then: AfterDownload::LaunchAndQuit,
            };
            start_download(app, plan)
        }
        Purpose::ContinueOffline => {
            app.show_page(1);
            Effect::None
        }
    }
}

fn update_checked(app: &mut App, result: Result<Option<Release>, NetError>) -> Effect {
    match result {
        Ok(Some(release)) => {
            info!("New version available: {}", release.version);
            app.mode = Mode::Confirm(Prompt {
                lines: Vec::new(),
                question: format!(
                    "New version available: {}, do you want to update?",
                    release.version
                ),
                purpose: Purpose::Update(release),
            });
        }
        Ok(None) => {
            info!("XToolBox is up to date");
            app.show_page(1);
        }
        Err(e) => {
            warn!("Couldn't check for updates: {}", e);
            app.mode = Mode::Confirm(Prompt {
                lines: Vec::new(),
                question: String::from(
                    "Couldn't check for updates, this means you might be offline, do you still want to continue",
                ),
                purpose: Purpose::ContinueOffline,
            });
        }
    }
    Effect::None
}

fn download_finished(app: &mut App, result: Result<PathBuf, DownloadError>) -> Effect {
    if app.mode != Mode::Downloading {
        return Effect::None;
    }
    let Some(progress) = app.download.take() else {
        return back_to_page(app);
    };
    let plan = progress.plan;

    match result {
        Ok(path) => {
            let file = file_name(&path);
            info!("Finished download of {}", file);
            if plan.then == AfterDownload::LaunchAndQuit {
                return Effect::LaunchFile {
                    path,
                    then_quit: true,
                };
            }
            app.set_status(Tone::Success, format!("Downloaded {file}"));
            if file.ends_with("iso") {
                app.mode = Mode::Notice(vec![format!("Downloaded {file}")]);
            } else {
                app.mode = Mode::Confirm(Prompt {
                    lines: vec![format!("Downloaded {file}")],
                    question: format!("Run {file}?"),
                    purpose: Purpose::LaunchFile(path),
                });
            }
            Effect::None
        }
        Err(e) => {
            warn!("Download of {} failed: {}", plan.url, e);
            match e {
                DownloadError::FileExists(_) => {
                    let file = plan.file_name();
                    app.mode = Mode::Confirm(Prompt {
                        lines: vec![String::from("ERROR 1: File already exists")],
                        question: format!("Overwrite {file}?"),
                        purpose: Purpose::Overwrite(DownloadPlan {
                            overwrite: true,
                            ..plan
                        }),
                    });
                }
                DownloadError::OverwriteCheck(_) => {
                    app.mode =
                        Mode::Notice(vec![String::from("ERROR 2: Can't check for file overwrite")]);
                }
                DownloadError::Transfer(_) => {
                    app.mode = Mode::Notice(vec![String::from(
                        "ERROR 3: Can't download file from the server...",
                    )]);
                }
            }
            app.set_status(Tone::Error, e.to_string());
            Effect::None
        }
    }
}

fn interrupt(app: &mut App) -> Effect {
    if app.mode == Mode::Downloading
        && let Some(progress) = app.download.take()
    {
        info!("Aborted file download for {}!", progress.plan.file_name());
        app.mode = Mode::Notice(vec![String::from("Aborting!")]);
        app.set_status(Tone::Error, "Aborting!");
        return Effect::CancelDownload(progress.plan.path);
    }
    Effect::Quit
}
