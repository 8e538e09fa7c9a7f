use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Scene file not found: {0}")]
    SceneNotFound(String),

    #[error("Invalid scene document: {0}")]
    SceneInvalid(String),

    #[error("Invalid argument '{field}': {problem}")]
    InvalidArgument { field: String, problem: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_argument(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Error::InvalidArgument {
            field: field.into(),
            problem: problem.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::SceneNotFound(_) => "scene.not_found",
            Error::SceneInvalid(_) => "scene.invalid",
            Error::InvalidArgument { .. } => "validation.invalid_argument",
            Error::Io(_) => "internal.io_error",
            Error::Json(_) => "internal.json_error",
        }
    }
}
