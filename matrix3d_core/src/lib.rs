// Copyright 2026 the Matrix3d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Homogeneous 4×4 transform matrices for 3D layout and styling.
//!
//! `matrix3d_core` provides [`Matrix3d`], a row-major 4×4 matrix that composes
//! translations, scales, rotations, and skews by right-multiplying canonical
//! elementary matrices onto the current value, and serializes the result in
//! the column-major `matrix3d(...)` notation consumed by CSS and similar
//! presentation layers. It is `no_std` compatible (with `alloc`).
//!
//! # Composition order
//!
//! Every named transform builds one elementary matrix `E` and replaces the
//! receiver `M` with `M × E`. Under the column-vector convention this means
//! the last call in a chain is applied to a point first:
//!
//! ```text
//!   identity().translate(10, 0, 0).scale(2)
//!       == T(10, 0, 0) × Sx(2) × Sy(2) × Sz(2)
//! ```
//!
//! ```
//! use matrix3d_core::Matrix3d;
//!
//! let mut m = Matrix3d::identity();
//! m.translate(10.0, 0.0, 0.0).scale(2.0);
//! assert_eq!(m.to_text(), "matrix3d(2,0,0,0,0,2,0,0,0,0,2,0,10,0,0,1)");
//! ```
//!
//! # Modules
//!
//! **[`matrix`]** — The [`Matrix3d`] type: construction, multiplication, and
//! the elementary transform builders.
//!
//! **[`descriptor`]** — [`TransformDescriptor`], a declarative description of
//! a translate/scale/rotate/skew sequence applied in a fixed order.
//!
//! **[`text`]** — `matrix3d(...)` formatting and parsing.
//!
//! **[`error`]** — Error types for fallible construction and parsing.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! descriptor application, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Uses `std` float intrinsics instead of
//!   `libm` and enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `serde` (disabled by default): Derives `Serialize`/`Deserialize` for the
//!   descriptor types. Absent fields take their [`Default`] values.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod descriptor;
pub mod error;
pub mod matrix;
pub mod text;
pub mod trace;

pub use descriptor::TransformDescriptor;
pub use error::{Matrix3dError, ParseMatrixError};
pub use matrix::Matrix3d;
