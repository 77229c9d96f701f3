use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Json Error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Wrong dump format: {0}")]
    DumpFormat(&'static str),

    #[error("Timestamp {ts} of source `{src}` is earlier than last seen {last}")]
    NonMonotonicTimestamp { src: String, ts: u64, last: u64 },
}
