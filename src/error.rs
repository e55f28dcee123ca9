use thiserror::Error;

#[derive(Debug, Error)]
pub enum TasqError {
    #[error("not a tasq directory (run `tasq init` first)")]
    NotInitialized,

    #[error("tasq already initialized in this directory")]
    AlreadyInitialized,

    #[error("task {0} not found")]
    TaskNotFound(String),

    #[error("task id prefix '{0}' is ambiguous: matches {1}")]
    TaskIdAmbiguous(String, String),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TasqError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotInitialized => "not_initialized",
            Self::AlreadyInitialized => "already_initialized",
            Self::TaskNotFound(_) => "task_not_found",
            Self::TaskIdAmbiguous(_, _) => "task_id_ambiguous",
            Self::InvalidDate(_) => "invalid_date",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, TasqError>;
