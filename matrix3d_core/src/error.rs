// Copyright 2026 the Matrix3d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

/// Errors from constructing a [`Matrix3d`](crate::Matrix3d).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matrix3dError {
    /// A coefficient list did not contain exactly 16 values.
    InvalidDimension {
        /// Number of values actually supplied.
        found: usize,
    },
}

impl fmt::Display for Matrix3dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { found } => {
                write!(f, "expected 16 matrix coefficients, found {found}")
            }
        }
    }
}

impl core::error::Error for Matrix3dError {}

/// Errors from parsing `matrix3d(...)` text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMatrixError {
    /// The text does not start with `matrix3d(`.
    MissingPrefix,
    /// The text does not end with `)`.
    MissingClosingParen,
    /// The value at the given (column-major) position is not a number.
    InvalidNumber(usize),
    /// The argument list did not contain exactly 16 values.
    InvalidDimension {
        /// Number of values actually supplied.
        found: usize,
    },
}

impl fmt::Display for ParseMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => f.write_str("expected `matrix3d(`"),
            Self::MissingClosingParen => f.write_str("expected closing `)`"),
            Self::InvalidNumber(index) => write!(f, "value {index} is not a number"),
            Self::InvalidDimension { found } => {
                write!(f, "expected 16 matrix3d() values, found {found}")
            }
        }
    }
}

impl core::error::Error for ParseMatrixError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_reports_found_length() {
        let err = Matrix3dError::InvalidDimension { found: 15 };
        assert_eq!(err.to_string(), "expected 16 matrix coefficients, found 15");
    }
}
