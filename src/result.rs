//! Errors raised when a model is misused
//!
//! These are configuration errors: a duplicate name, a handle from another
//! model, a vector of the wrong length. They are not meant to be recovered
//! from. A proposal outside the support of a variable is not an error at this
//! level; see [`OutOfBounds`](crate::node::OutOfBounds).
use std::fmt;
use std::result;

use crate::node::OutOfBounds;

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    /// A random variable with the same name already exists in the model
    DuplicateName,
    /// The variable is not a stochastic variable of this model
    UnknownVariable,
    /// The node handle does not belong to this model
    UnknownNode,
    /// One or more of the supplied parameters is invalid
    InvalidParameter,
    /// A vector does not have one entry per stochastic variable
    LengthMismatch,
    /// A trace does not contain a stochastic variable of the model
    MissingVariable,
    /// The sequences of a trace do not all have the same length
    TraceLengthMismatch,
    /// A trace has no samples to draw from
    EmptyTrace,
    /// A supplied value is outside the support of its variable
    OutOfBounds,
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::DuplicateName => "duplicate name",
            ErrorKind::UnknownVariable => "unknown variable",
            ErrorKind::UnknownNode => "unknown node",
            ErrorKind::InvalidParameter => "invalid parameter",
            ErrorKind::LengthMismatch => "length mismatch",
            ErrorKind::MissingVariable => "missing variable",
            ErrorKind::TraceLengthMismatch => "trace length mismatch",
            ErrorKind::EmptyTrace => "empty trace",
            ErrorKind::OutOfBounds => "out of bounds",
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

impl Error {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Error {
            msg: msg.into(),
            kind,
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        self.msg.as_str()
    }
}

impl From<OutOfBounds> for Error {
    fn from(err: OutOfBounds) -> Self {
        Error::new(ErrorKind::OutOfBounds, err.to_string())
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.msg)
    }
}
