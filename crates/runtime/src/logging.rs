//! Tracing subscriber setup for binaries.
use tracing::Level;

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` directives are honoured; `default` is added on top so that
/// run start/finish messages show up without any configuration. Calling this
/// twice is harmless (the second call is ignored).
pub fn init(default: Level) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
