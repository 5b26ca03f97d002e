use thiserror::Error;

use crate::setup::SetupError;

#[derive(Error, Debug)]
pub enum Rg110Error {
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),
}

pub type Result<T> = std::result::Result<T, Rg110Error>;
