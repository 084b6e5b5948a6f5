//! Error types for phase computation and message selection.

use thiserror::Error;

use crate::message::PoolKey;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolError {
    /// Coordinates out of range, non-finite, or no location available at all.
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// The message catalog has no usable templates for a pool the selector needs.
    #[error("Missing message pool: {0}")]
    MissingPool(PoolKey),
}

pub type Result<T> = std::result::Result<T, SolError>;
