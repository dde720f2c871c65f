// Copyright 2026 the Matrix3d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `matrix3d(...)` text form.
//!
//! The 16 coefficients are written column by column (the transpose of the
//! row-major storage), comma separated with no spaces, which is the order
//! CSS `transform: matrix3d(...)` expects.
//!
//! Each value is written with the shortest decimal that parses back to the
//! same `f64`, in positional notation (never `1e-17` style). Integral values
//! print without a fraction (`2`, not `2.0`) and negative zero prints as `0`.
//! Values are not rounded or capped, so [`FromStr`] recovers the matrix
//! exactly. Floating-point residues are visible as a result: `rotate_z(90.0)`
//! writes `cos 90°` as `0.00000000000000006123233995736766`, and magnitudes
//! far from one (say `1e-300`) print hundreds of digits. Callers that want
//! short output should round coefficients before formatting.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::ParseMatrixError;
use crate::matrix::Matrix3d;

const PREFIX: &str = "matrix3d(";

impl Matrix3d {
    /// Returns the `matrix3d(...)` text form of this matrix.
    ///
    /// Equivalent to `self.to_string()`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Matrix3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;
        for (i, v) in self.to_col_major().into_iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            // -0 prints as 0.
            if v == 0.0 {
                f.write_str("0")?;
            } else {
                write!(f, "{v}")?;
            }
        }
        f.write_str(")")
    }
}

impl FromStr for Matrix3d {
    type Err = ParseMatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix(PREFIX)
            .ok_or(ParseMatrixError::MissingPrefix)?
            .strip_suffix(')')
            .ok_or(ParseMatrixError::MissingClosingParen)?;
        if body.trim().is_empty() {
            return Err(ParseMatrixError::InvalidDimension { found: 0 });
        }

        let mut cols = [0.0; 16];
        let mut found = 0;
        for (i, part) in body.split(',').enumerate() {
            if let Some(slot) = cols.get_mut(i) {
                *slot = part
                    .trim()
                    .parse()
                    .map_err(|_| ParseMatrixError::InvalidNumber(i))?;
            }
            found += 1;
        }
        if found != 16 {
            return Err(ParseMatrixError::InvalidDimension { found });
        }
        Ok(Self::from_col_major(cols))
    }
}
