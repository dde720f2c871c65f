// Copyright 2026 the Matrix3d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-major 4×4 homogeneous transform.
//!
//! [`Matrix3d`] has a single computational primitive, [`Matrix3d::multiply`].
//! Every named transform (translate, scale, rotate, skew) builds a canonical
//! elementary matrix and right-multiplies it onto the receiver, returning
//! `&mut Self` so calls can be chained.

use alloc::vec::Vec;
use core::ops::{Mul, MulAssign};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::error::Matrix3dError;

/// A row-major 4×4 transform stored as `[f64; 16]`.
///
/// The coefficient at linear index `r * 4 + c` is the element at row `r`,
/// column `c`. Vectors are treated as columns multiplied from the right, so
/// translation lives in column 3.
///
/// `Matrix3d` is [`Copy`]: assigning or cloning a matrix produces an
/// independent value, and mutating one never affects the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3d {
    m: [f64; 16],
}

impl Matrix3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Returns the 4×4 identity matrix.
    #[inline]
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from 16 coefficients in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Matrix3dError::InvalidDimension`] unless `coefficients`
    /// holds exactly 16 values.
    pub fn from_coefficients(coefficients: &[f64]) -> Result<Self, Matrix3dError> {
        let m: [f64; 16] = coefficients
            .try_into()
            .map_err(|_| Matrix3dError::InvalidDimension {
                found: coefficients.len(),
            })?;
        Ok(Self { m })
    }

    /// Creates a matrix from a row-major array.
    #[inline]
    #[must_use]
    pub const fn from_row_major(m: [f64; 16]) -> Self {
        Self { m }
    }

    /// Creates a matrix from a column-major array.
    #[must_use]
    pub const fn from_col_major(cols: [f64; 16]) -> Self {
        let mut m = [0.0; 16];
        let mut i = 0;
        while i < 16 {
            m[(i % 4) * 4 + i / 4] = cols[i];
            i += 1;
        }
        Self { m }
    }

    /// Creates a matrix from four row arrays.
    #[inline]
    #[must_use]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self {
            m: [
                r0[0], r0[1], r0[2], r0[3], //
                r1[0], r1[1], r1[2], r1[3], //
                r2[0], r2[1], r2[2], r2[3], //
                r3[0], r3[1], r3[2], r3[3],
            ],
        }
    }

    /// Returns the coefficients in row-major order.
    #[inline]
    #[must_use]
    pub const fn coefficients(&self) -> &[f64; 16] {
        &self.m
    }

    /// Returns a copy of the coefficients in row-major order.
    #[inline]
    #[must_use]
    pub const fn to_row_major(self) -> [f64; 16] {
        self.m
    }

    /// Returns the coefficients in column-major order.
    #[must_use]
    pub const fn to_col_major(self) -> [f64; 16] {
        let mut out = [0.0; 16];
        let mut i = 0;
        while i < 16 {
            out[i] = self.m[(i % 4) * 4 + i / 4];
            i += 1;
        }
        out
    }

    /// Returns the element at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 4` or `col >= 4`.
    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < 4 && col < 4, "matrix index out of range");
        self.m[row * 4 + col]
    }

    /// Returns row `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn row(&self, i: usize) -> [f64; 4] {
        let m = &self.m;
        [m[i * 4], m[i * 4 + 1], m[i * 4 + 2], m[i * 4 + 3]]
    }

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(&self, i: usize) -> [f64; 4] {
        let m = &self.m;
        [m[i], m[4 + i], m[8 + i], m[12 + i]]
    }

    /// Returns `true` if every coefficient differs from `other`'s by at most
    /// `epsilon`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Is this matrix [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }

    /// Is any coefficient [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.m.iter().any(|v| v.is_nan())
    }

    /// Replaces `self` with the product `self × other` and returns `self`.
    ///
    /// Under the column-vector convention the result applies `other` first,
    /// then the previous value of `self`.
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        let a = &self.m;
        let b = &other.m;
        let mut out = [0.0_f64; 16];
        for i in 0..4 {
            for j in 0..4 {
                out[i * 4 + j] = a[i * 4] * b[j]
                    + a[i * 4 + 1] * b[4 + j]
                    + a[i * 4 + 2] * b[8 + j]
                    + a[i * 4 + 3] * b[12 + j];
            }
        }
        self.m = out;
        self
    }

    // -- elementary matrices ----------------------------------------------

    /// Creates a pure translation matrix.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            m: [
                1.0, 0.0, 0.0, x, //
                0.0, 1.0, 0.0, y, //
                0.0, 0.0, 1.0, z, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Creates a non-uniform scale matrix.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            m: [
                sx, 0.0, 0.0, 0.0, //
                0.0, sy, 0.0, 0.0, //
                0.0, 0.0, sz, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Creates a rotation around the X axis (degrees).
    #[must_use]
    pub fn from_rotation_x(degrees: f64) -> Self {
        let (s, c) = sin_cos_degrees(degrees);
        Self {
            m: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, c, s, 0.0, //
                0.0, -s, c, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Creates a rotation around the Y axis (degrees).
    #[must_use]
    pub fn from_rotation_y(degrees: f64) -> Self {
        let (s, c) = sin_cos_degrees(degrees);
        Self {
            m: [
                c, 0.0, -s, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                s, 0.0, c, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Creates a rotation around the Z axis (degrees).
    #[must_use]
    pub fn from_rotation_z(degrees: f64) -> Self {
        let (s, c) = sin_cos_degrees(degrees);
        Self {
            m: [
                c, s, 0.0, 0.0, //
                -s, c, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Creates a skew matrix from X and Y skew angles (degrees).
    ///
    /// Row 0, column 1 holds `tan(x_degrees)`; row 1, column 0 holds
    /// `tan(y_degrees)`.
    #[must_use]
    pub fn from_skew(x_degrees: f64, y_degrees: f64) -> Self {
        let tx = tan_degrees(x_degrees);
        let ty = tan_degrees(y_degrees);
        Self {
            m: [
                1.0, tx, 0.0, 0.0, //
                ty, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    // -- chained composition ----------------------------------------------

    /// Right-multiplies a translation by `(x, y, z)` in a single step.
    pub fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.multiply(&Self::from_translation(x, y, z))
    }

    /// Right-multiplies a translation along X.
    pub fn translate_x(&mut self, x: f64) -> &mut Self {
        self.multiply(&Self::from_translation(x, 0.0, 0.0))
    }

    /// Right-multiplies a translation along Y.
    pub fn translate_y(&mut self, y: f64) -> &mut Self {
        self.multiply(&Self::from_translation(0.0, y, 0.0))
    }

    /// Right-multiplies a translation along Z.
    pub fn translate_z(&mut self, z: f64) -> &mut Self {
        self.multiply(&Self::from_translation(0.0, 0.0, z))
    }

    /// Scales uniformly by `s`, as three successive per-axis multiplies.
    pub fn scale(&mut self, s: f64) -> &mut Self {
        self.scale_x(s).scale_y(s).scale_z(s)
    }

    /// Right-multiplies a scale along X.
    pub fn scale_x(&mut self, s: f64) -> &mut Self {
        self.multiply(&Self::from_scale(s, 1.0, 1.0))
    }

    /// Right-multiplies a scale along Y.
    pub fn scale_y(&mut self, s: f64) -> &mut Self {
        self.multiply(&Self::from_scale(1.0, s, 1.0))
    }

    /// Right-multiplies a scale along Z.
    pub fn scale_z(&mut self, s: f64) -> &mut Self {
        self.multiply(&Self::from_scale(1.0, 1.0, s))
    }

    /// Alias for [`rotate_z`](Self::rotate_z).
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        self.rotate_z(degrees)
    }

    /// Right-multiplies a rotation around X (degrees).
    pub fn rotate_x(&mut self, degrees: f64) -> &mut Self {
        self.multiply(&Self::from_rotation_x(degrees))
    }

    /// Right-multiplies a rotation around Y (degrees).
    pub fn rotate_y(&mut self, degrees: f64) -> &mut Self {
        self.multiply(&Self::from_rotation_y(degrees))
    }

    /// Right-multiplies a rotation around Z (degrees).
    pub fn rotate_z(&mut self, degrees: f64) -> &mut Self {
        self.multiply(&Self::from_rotation_z(degrees))
    }

    /// Right-multiplies a combined X/Y skew (degrees) in a single step.
    pub fn skew(&mut self, x_degrees: f64, y_degrees: f64) -> &mut Self {
        self.multiply(&Self::from_skew(x_degrees, y_degrees))
    }

    /// Right-multiplies a skew along X (degrees).
    pub fn skew_x(&mut self, degrees: f64) -> &mut Self {
        self.multiply(&Self::from_skew(degrees, 0.0))
    }

    /// Right-multiplies a skew along Y (degrees).
    pub fn skew_y(&mut self, degrees: f64) -> &mut Self {
        self.multiply(&Self::from_skew(0.0, degrees))
    }
}

fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    #[cfg(feature = "std")]
    let (s, c) = radians.sin_cos();
    #[cfg(not(feature = "std"))]
    let (s, c) = (radians.sin(), radians.cos());
    (s, c)
}

fn tan_degrees(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

impl Default for Matrix3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<&[f64]> for Matrix3d {
    type Error = Matrix3dError;

    fn try_from(coefficients: &[f64]) -> Result<Self, Self::Error> {
        Self::from_coefficients(coefficients)
    }
}

impl TryFrom<Vec<f64>> for Matrix3d {
    type Error = Matrix3dError;

    fn try_from(coefficients: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_coefficients(&coefficients)
    }
}

impl From<[f64; 16]> for Matrix3d {
    #[inline]
    fn from(m: [f64; 16]) -> Self {
        Self::from_row_major(m)
    }
}

/// Embeds a 2D affine transform in the XY plane.
impl From<kurbo::Affine> for Matrix3d {
    fn from(affine: kurbo::Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self::from_rows([
            [a, c, 0.0, e],
            [b, d, 0.0, f],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

impl Mul for Matrix3d {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: Self) -> Self {
        self.multiply(&rhs);
        self
    }
}

impl MulAssign for Matrix3d {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}
