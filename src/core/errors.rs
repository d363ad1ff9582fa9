use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for VitrineError {
    fn from(error: std::io::Error) -> Self {
        VitrineError::Io(Box::new(error))
    }
}
