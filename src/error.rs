use derive_more::{Display, From};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    #[from]
    Http(reqwest::Error),

    #[from]
    Json(serde_json::Error),

    #[display("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[display("Unexpected response body from {url}: {msg}")]
    UnexpectedBody { url: String, msg: String },

    #[display("Package not found: {full_name}")]
    PackageNotFound { full_name: String },

    #[display("Index {index} out of bounds for package list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[display("Configuration error: {msg}")]
    Config { msg: String },
}

impl std::error::Error for Error {}
