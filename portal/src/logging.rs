//! Log setup for the portal binary: rolling file plus stderr warnings.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::PortalConfig;

/// Install the global subscriber.
///
/// Sets up:
/// - Daily-rotated `portal.log` in the configured log directory
/// - Compact warnings-and-up on stderr
/// - Panic hook logging location and message
///
/// Returns the appender guard; keep it alive until exit so buffered lines
/// are flushed. `None` when the log directory cannot be created, in which
/// case only stderr logging is installed.
pub fn init(config: &PortalConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("portal=info,warn"));

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Log directory {} unavailable ({}), logging to stderr only", config.log_dir.display(), e);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer())
            .try_init();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "portal.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer())
        .try_init()
        .is_err()
    {
        // Already initialized (embedding application or tests)
        return Some(guard);
    }

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        "Logging initialized"
    );

    setup_panic_hook();
    Some(guard)
}

/// Compact warnings-and-up for the terminal
fn stderr_layer<S>() -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(LevelFilter::WARN)
}

/// Route panics through tracing before the default hook prints them.
fn setup_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info.location().map(ToString::to_string);
        tracing::error!(
            location = location.as_deref().unwrap_or("unknown"),
            reason = panic_message(info.payload()),
            "Portal panicked"
        );
        previous(info);
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string payload>")
}
