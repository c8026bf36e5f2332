//! Logging for genui
//!
//! XDG-compliant log file with fallback chain. The TUI owns the terminal, so
//! log output never goes to stdout.

use anyhow::Result;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter
pub const LOG_FILTER_ENV: &str = "GENUI_LOG";

/// Environment variable overriding the log file path
pub const LOG_FILE_ENV: &str = "GENUI_LOG_FILE";

const DEFAULT_FILTER: &str = "info";

/// Where log events end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Discard,
}

/// Discover log file path with fallback chain
///
/// Priority:
/// 1. $GENUI_LOG_FILE environment variable (explicit override)
/// 2. $XDG_STATE_HOME/genui/genui.log (XDG standard)
/// 3. ~/.local/state/genui/genui.log (XDG fallback)
pub fn discover_log_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(LOG_FILE_ENV) {
        return Some(PathBuf::from(path));
    }

    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        return Some(Path::new(&xdg_state).join("genui").join("genui.log"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(
            Path::new(&home)
                .join(".local")
                .join("state")
                .join("genui")
                .join("genui.log"),
        );
    }

    None
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// `interactive` is true when the TUI is about to take over the terminal;
/// without a usable log file its events are dropped instead of corrupting
/// the screen.
pub fn init(interactive: bool) -> Result<LogTarget> {
    let file = discover_log_path().and_then(|path| match open_log_file(&path) {
        Ok(file) => Some((path, file)),
        Err(_) => None,
    });

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let target = match file {
        Some((path, file)) => {
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
            LogTarget::File(path)
        }
        None if interactive => {
            builder
                .with_writer(std::io::sink)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
            LogTarget::Discard
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
            LogTarget::Stderr
        }
    };

    Ok(target)
}
