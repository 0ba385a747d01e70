use std::path::Path;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const CONFIG_FILE: &str = "log4rs.yaml";
const STDERR_APPENDER: &str = "stderr";

#[ctor::ctor]
fn init() {
    if Path::new(CONFIG_FILE).is_file()
        && log4rs::init_file(CONFIG_FILE, Default::default()).is_ok()
    {
        return;
    }
    init_console();
}

/// Fallback when no `log4rs.yaml` is found next to the process.
fn init_console() {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(STDERR_APPENDER)
                .build(LevelFilter::Info),
        );
    if let Ok(config) = config {
        // a logger may already be installed, e.g. by a test harness
        let _ = log4rs::init_config(config);
    }
}

pub fn log_header(path: &Path, header: &[u8]) {
    log::debug!(
        "{}: header {:?}",
        path.display(),
        String::from_utf8_lossy(header)
    );
}
