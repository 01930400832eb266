//! Logging Infrastructure
//!
//! Logs go to stderr (stdout carries the JSON output) or, when a log
//! directory exists, to a daily rolling file. `RUST_LOG` overrides the
//! configured level. Production runs log JSON lines.

use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_path = log_dir.map(Path::new).filter(|path| path.exists());
    let to_file = log_path.is_some();
    let writer = match log_path {
        Some(path) => BoxMakeWriter::new(tracing_appender::rolling::daily(path, "quote")),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_ansi(!to_file)
        .with_writer(writer);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
