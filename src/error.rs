use crate::sum::numeral::Malformed;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read input or write output")]
    Io(#[from] std::io::Error),
    /// Growing a buffer failed; `what` names the buffer
    #[error("Unable to allocate memory for {what}")]
    Alloc { what: &'static str },
    #[error("Invalid binary number format on line {line}: {reason}")]
    InvalidFormat { line: usize, reason: Malformed },
}

pub type Result<T> = std::result::Result<T, Error>;
