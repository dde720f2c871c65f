// Copyright 2026 the Matrix3d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, JSON export, and JSON descriptor loading for
//! matrix3d diagnostics.
//!
//! This crate provides [`TraceSink`](matrix3d_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`export::export`] — writes a JSON array from recorded bytes.
//!
//! [`descriptor`] loads a
//! [`TransformDescriptor`](matrix3d_core::TransformDescriptor) from a JSON
//! object of the form
//! `{"translate": {"x": 0, "y": 0, "z": 0}, "scale": {..}, "rotate": {..}, "skew": {"x": 0, "y": 0}}`.

pub mod descriptor;
pub mod export;
pub mod pretty;
pub mod recorder;
