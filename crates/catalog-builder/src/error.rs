#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("source not found: {0}")]
    SourceNotFound(String),

    #[error("csv error in {path}: {message}")]
    Source { path: String, message: String },

    #[error("output error: {0}")]
    Output(String),
}
