use core::fmt;

/// Result alias for `lloyd`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied argument violates a precondition of `fit`.
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Row width mismatch (usize).
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Centroids were requested before any successful `fit`.
    NotFitted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { name, message } => {
                write!(f, "invalid argument '{name}': {message}")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::NotFitted => write!(f, "model has not been fitted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
