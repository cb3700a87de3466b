//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::TryGetError;
use serde::{Deserialize, Serialize};

// Type aliases.
pub type DecodeResult<T> = Result<T, DecodeError>;

// IE decode errors.
#[derive(Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum DecodeError {
    ReadOutOfBounds,
    UndefinedType(u8),
    InvalidLength(u8, u16),
    // IE-specific errors
    InvalidGeographicLocationType(u8),
}

// ===== impl DecodeError =====

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::ReadOutOfBounds => {
                write!(f, "attempt to read out of bounds")
            }
            DecodeError::UndefinedType(ie_type) => {
                write!(f, "undefined IE type: {ie_type}")
            }
            DecodeError::InvalidLength(ie_type, len) => {
                write!(f, "invalid length for IE type {ie_type}: {len}")
            }
            DecodeError::InvalidGeographicLocationType(geo_type) => {
                write!(f, "invalid geographic location type: {geo_type}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<TryGetError> for DecodeError {
    fn from(_error: TryGetError) -> DecodeError {
        DecodeError::ReadOutOfBounds
    }
}
