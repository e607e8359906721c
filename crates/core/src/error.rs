use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// Sampling, history, and aggregation are total and never produce one of
/// these; only the outer edges (config files, the windowing backend) do.
#[derive(Debug, Error)]
pub enum RvError {
    #[error("config error: {0}")]
    Config(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = RvError> = std::result::Result<T, E>;
