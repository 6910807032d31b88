use std::io;

use thiserror::Error;

use crate::{container::Kind, operation::Operation};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid workload: {0}")]
    InvalidWorkload(&'static str),

    #[error("unknown container kind `{0}`")]
    UnknownKind(String),

    /// Accumulated nanoseconds no longer fit in an `i64`
    #[error("{kind}: {operation} total overflowed i64 nanoseconds")]
    Overflow { kind: Kind, operation: Operation },

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}
