#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Empty dataset: at least one row is required")]
    EmptyDataset,

    #[error("Invalid date in row {index}: {value:?}")]
    InvalidDate { index: usize, value: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
