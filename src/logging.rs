use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Routes `tracing` output to `path`, keeping stdout free for the maze.
///
/// The returned guard flushes the writer on drop and must be held for the
/// lifetime of the program.
pub fn init_file_logging(path: &Path, verbose: bool) -> WorkerGuard {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .unwrap_or_else(|| "pathmaze.log".as_ref());
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .try_init();
    guard
}
