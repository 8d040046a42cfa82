use std::io;
use std::path::Path;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const DEFAULT_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";

/// Installs the global logger from a log4rs YAML file, or a console logger at
/// `Info` when the file does not exist. Only the first call in a process succeeds.
pub fn init_logger<T: AsRef<Path>>(path: T) -> io::Result<()> {
    let path = path.as_ref();
    if path.exists() {
        log4rs::init_file(path, Default::default()).map_err(io::Error::other)?;
        log::info!("Logger configured from {}", path.display());
        return Ok(());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(DEFAULT_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .map_err(io::Error::other)?;
    log4rs::init_config(config).map_err(io::Error::other)?;
    log::info!("{} not found, logging to console", path.display());
    Ok(())
}
