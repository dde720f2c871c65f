// Copyright 2026 the Matrix3d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading a [`TransformDescriptor`] from JSON.
//!
//! The accepted shape mirrors the descriptor itself:
//!
//! ```json
//! {
//!   "translate": { "x": 10, "y": 0, "z": 0 },
//!   "scale":     { "x": 2 },
//!   "rotate":    { "z": 45 },
//!   "skew":      { "x": 0, "y": 0 }
//! }
//! ```
//!
//! Absent or `null` objects leave the sub-configuration unset. Absent fields
//! take the per-field [`Default`]; a `null` field is rejected like any other
//! non-number. Unknown keys are ignored.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use serde_json::error::Category;

use matrix3d_core::descriptor::TransformDescriptor;

/// Errors from [`from_json`] and [`from_json_str`].
#[derive(Debug)]
pub enum DescriptorError {
    /// The input is not well-formed JSON.
    Syntax(serde_json::Error),
    /// The JSON does not have the descriptor's shape: a sub-configuration is
    /// not an object, or a field is not a number.
    Invalid(serde_json::Error),
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "malformed descriptor JSON: {err}"),
            Self::Invalid(err) => write!(f, "invalid descriptor: {err}"),
        }
    }
}

impl std::error::Error for DescriptorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(err) | Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DescriptorError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Invalid(err),
            Category::Io | Category::Syntax | Category::Eof => Self::Syntax(err),
        }
    }
}

/// Parses a descriptor from JSON text.
///
/// # Errors
///
/// Returns [`DescriptorError::Syntax`] for malformed JSON and
/// [`DescriptorError::Invalid`] for JSON of the wrong shape.
pub fn from_json_str(text: &str) -> Result<TransformDescriptor, DescriptorError> {
    Ok(serde_json::from_str(text)?)
}

/// Builds a descriptor from a parsed JSON value.
///
/// # Errors
///
/// Returns [`DescriptorError::Invalid`] if the root or a sub-configuration is
/// not an object, or if a present field is not numeric.
pub fn from_json(value: &Value) -> Result<TransformDescriptor, DescriptorError> {
    Ok(TransformDescriptor::deserialize(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix3d_core::Matrix3d;
    use matrix3d_core::descriptor::{Scale, Skew, Translate};
    use serde_json::json;

    #[test]
    fn empty_object_is_empty_descriptor() {
        let desc = from_json(&json!({})).unwrap();
        assert!(desc.is_empty());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let desc = from_json(&json!({
            "translate": { "y": 4 },
            "scale": { "x": 2 },
        }))
        .unwrap();
        assert_eq!(
            desc.translate,
            Some(Translate {
                x: 0.0,
                y: 4.0,
                z: 0.0
            })
        );
        assert_eq!(
            desc.scale,
            Some(Scale {
                x: 2.0,
                y: 1.0,
                z: 1.0
            })
        );
        assert_eq!(desc.rotate, None);
        assert_eq!(desc.skew, None);
    }

    #[test]
    fn translate_axes_are_independent() {
        let desc = from_json_str(r#"{"translate": {"x": 1, "y": 2, "z": 3}}"#).unwrap();
        let m = Matrix3d::from_descriptor(&desc);
        assert_eq!(m.col(3), [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn explicit_zero_is_kept() {
        let desc = from_json(&json!({ "scale": { "x": 0 } })).unwrap();
        assert_eq!(desc.scale.map(|s| s.x), Some(0.0));
    }

    #[test]
    fn null_object_is_unset() {
        let desc = from_json(&json!({ "rotate": null, "skew": { "y": 5 } })).unwrap();
        assert_eq!(desc.rotate, None);
        assert_eq!(desc.skew, Some(Skew { x: 0.0, y: 5.0 }));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let desc = from_json(&json!({ "origin": "center", "scale": { "w": 3 } })).unwrap();
        assert_eq!(desc.scale, Some(Scale::default()));
        assert_eq!(desc.translate, None);
    }

    #[test]
    fn rejects_non_numeric_field() {
        let err = from_json(&json!({ "rotate": { "z": "45deg" } })).unwrap_err();
        assert!(matches!(err, DescriptorError::Invalid(_)), "{err:?}");
        assert!(err.to_string().contains("expected f64"), "{err}");

        let err = from_json(&json!({ "translate": { "x": null } })).unwrap_err();
        assert!(matches!(err, DescriptorError::Invalid(_)), "{err:?}");
    }

    #[test]
    fn rejects_non_object() {
        let err = from_json(&json!(5)).unwrap_err();
        assert!(matches!(err, DescriptorError::Invalid(_)), "{err:?}");
        assert!(
            err.to_string().contains("expected struct TransformDescriptor"),
            "{err}"
        );

        let err = from_json(&json!({ "skew": 10 })).unwrap_err();
        assert!(matches!(err, DescriptorError::Invalid(_)), "{err:?}");
        assert!(err.to_string().contains("expected struct Skew"), "{err}");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = from_json_str("{ translate: }").unwrap_err();
        assert!(matches!(err, DescriptorError::Syntax(_)), "{err:?}");
        assert!(std::error::Error::source(&err).is_some());

        let err = from_json_str(r#"{"scale": {"x": 2"#).unwrap_err();
        assert!(matches!(err, DescriptorError::Syntax(_)), "{err:?}");
    }
}
