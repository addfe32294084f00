use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid IP range: {0}")]
    InvalidRange(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No such host")]
    NotFound,

    #[error("Timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Worker failed: {0}")]
    WorkerFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
