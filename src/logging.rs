use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file base path.
pub const LOG_ENV_VAR: &str = "STAFFPICK_LOG";

const DEFAULT_FILTER: &str = "info";

/// Send `tracing` output to a file when `STAFFPICK_LOG` is set.
///
/// Without it nothing is logged, so the TUI is never drawn over. Each run
/// gets its own `{path}.{timestamp}.{pid}` file; `RUST_LOG` filters as
/// usual.
pub fn init_tracing() {
    let Ok(base) = std::env::var(LOG_ENV_VAR) else {
        return;
    };

    let path = log_file_path(&base, unix_seconds(), std::process::id());
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path, err);
            return;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .init();
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn log_file_path(base: &str, timestamp: u64, pid: u32) -> String {
    format!("{base}.{timestamp}.{pid}")
}
