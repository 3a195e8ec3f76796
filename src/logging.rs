//! Structured logging for algoviz
//!
//! The engines emit `tracing` spans and events; the embedding
//! application decides whether anything listens. `init_tracing`
//! installs a stderr subscriber for binaries and test harnesses that
//! want one.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging
///
/// `level` is a directive such as `debug` or `algoviz=trace`; when
/// `None` the default is `algoviz=warn`. The `ALGOVIZ_LOG` environment
/// variable (or `RUST_LOG`) overrides both.
pub fn init_tracing(
    level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = level.unwrap_or("warn");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ALGOVIZ_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("algoviz={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
