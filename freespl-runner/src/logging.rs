use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the stderr subscriber. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=freespl_interpreter=debug`.
pub fn init() {
    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    }
}
