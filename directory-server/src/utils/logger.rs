//! Logging Infrastructure
//!
//! Structured logging setup shared by the server and the operator CLI.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str =
    "directory_server=info,http_access=info,security=info,tower_http=warn";

/// Initialize the logger with the default filter, stderr output.
pub fn init_logger() {
    init_logger_with_file(DEFAULT_LOG_FILTER, None);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` overrides `default_filter` when set. When `log_dir` names an
/// existing directory, output goes to a daily-rolling file inside it.
pub fn init_logger_with_file(default_filter: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(dir, "directory-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
