//! Error types
//!
//! Marshalling has a single failure mode: the caller-supplied buffer is
//! too short for the minimal encoding. Truncation is total and has no
//! error type.

use thiserror::Error;

/// Errors returned by [`marshal`](crate::marshal()) and
/// [`marshal_generic`](crate::marshal_generic).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MarshalError {
    /// The output buffer cannot hold the encoding.
    ///
    /// Nothing has been written when this is returned. Size the buffer
    /// with [`max_byte_len`](crate::max_byte_len) and retry.
    #[error("buffer too small: encoding needs {needed} bytes, buffer holds {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

pub type Result<T> = core::result::Result<T, MarshalError>;
