use log::LevelFilter;
use xtoolbox::core::config;
use xtoolbox::logging;

// The logger is process-global, so this binary holds a single test.
#[test]
fn test_config_loading_is_logged_before_level_applies() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("xtoolbox.log");
    std::fs::write(&log_path, "earlier run\n").unwrap();

    logging::init(&log_path).unwrap();
    log::info!("Starting XToolBox v4.3");
    log::debug!("too chatty before the level is known");

    let config_path = dir.path().join("nested").join("config.toml");
    config::load_config_from(&config_path).unwrap();

    logging::set_level(LevelFilter::Warn);
    log::info!("dropped at warn");
    log::warn!("kept at warn");
    log::logger().flush();

    let text = std::fs::read_to_string(&log_path).unwrap();
    assert!(text.starts_with("earlier run\n"), "log file is appended to");
    assert!(text.contains("Starting XToolBox v4.3"));
    assert!(text.contains("No config file found, generating default"));
    assert!(text.contains("kept at warn"));
    assert!(!text.contains("too chatty"));
    assert!(!text.contains("dropped at warn"));

    let start = text.find("Starting XToolBox").unwrap();
    let config = text.find("No config file found").unwrap();
    assert!(start < config);
}
