//! Common utilities and types shared across the M.E.R.C.Y devkit crates.

pub mod clock;
pub mod digest;
pub mod error;

pub use clock::GeneratedAt;
pub use error::{Error, Result};
