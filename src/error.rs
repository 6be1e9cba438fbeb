use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Invalid draw: {0}")]
    InvalidDraw(String),

    #[error("Unknown game type: {0}")]
    UnknownGame(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LotteryError>;
