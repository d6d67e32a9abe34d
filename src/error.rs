use thiserror::Error;

/// Errors raised around the ranker: loading article sets, configuration and
/// summary input selection. Ranking itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid article json: {0}")]
    Json(#[from] serde_json::Error),

    /// The news provider answered with a non-ok status
    #[error("news provider error: {0}")]
    Provider(String),

    #[error("article has no content to summarize")]
    EmptyArticle,

    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },

    #[error("unknown search mode: {0:?} (expected \"text\" or \"semantic\")")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
