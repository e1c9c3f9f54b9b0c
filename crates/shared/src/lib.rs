use std::path::PathBuf;

use tracing_subscriber::fmt::format::FmtSpan;

pub mod api;
pub mod model;
pub mod plans;
pub mod routes;
pub mod table;
pub mod utils;

/// Default filter used when `RUST_LOG` isn't set
const DEFAULT_LOG_FILTER: &str = "info,server=debug,shared=debug,tower_http=debug";

pub fn configure_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::TRACE)
            .with_env_filter(env_filter)
            .with_line_number(true)
            .with_file(true)
            .with_span_events(FmtSpan::CLOSE)
            .finish(),
    )
    .expect("Failed to set default tracing subscriber");
}

pub fn load_dotenv() -> Result<Option<PathBuf>, dotenv::Error> {
    match dotenv::dotenv() {
        // Swallow NotFound error since the .env is optional
        Err(dotenv::Error::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        r => r.map(Some),
    }
}
