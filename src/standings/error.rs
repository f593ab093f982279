use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Standings table with ID {0} can not be found")]
    TableNotFound(String),

    #[error("Cached page {} does not exist", .0.display())]
    CacheMissing(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request was not successful, status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}
