//! CLI error type

use campus_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("config error: {0}")]
    Config(String),
    #[error("input error: {0}")]
    Input(#[from] std::io::Error),
}
