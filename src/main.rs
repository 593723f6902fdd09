use clap::Parser;
use std::path::{Path, PathBuf};

use xtoolbox::core::config::{self, CliOverrides, XToolBoxConfig};
use xtoolbox::core::state::VERSION;
use xtoolbox::{logging, tui};

#[derive(Parser)]
#[command(
    name = "xtoolbox",
    version,
    about = "Terminal menu for downloading and running Windows tools"
)]
struct Args {
    /// Don't ask GitHub for a newer XToolBox on startup
    #[arg(long)]
    skip_update_check: bool,

    /// Directory downloads are saved to
    #[arg(long, value_name = "DIR")]
    download_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Logger first so config loading is recorded
    if let Err(e) = logging::init(Path::new(logging::LOG_FILE)) {
        eprintln!("Couldn't open {}: {}", logging::LOG_FILE, e);
    }
    log::info!("Starting XToolBox v{}", VERSION);

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        XToolBoxConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            skip_update_check: args.skip_update_check,
            download_dir: args.download_dir,
        },
    );
    logging::set_level(resolved.log_level);
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}
