//! Runtime errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A host capability was invoked on a context with no host bound.
    #[error("{0} is not implemented: the host runtime must provide it")]
    Unimplemented(&'static str),

    #[error("Host error: {0}")]
    Host(String),

    #[error("Handler error: {0}")]
    Handler(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
