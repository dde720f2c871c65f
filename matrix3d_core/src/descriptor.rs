// Copyright 2026 the Matrix3d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative transform descriptions.
//!
//! A [`TransformDescriptor`] names up to four sub-configurations, each
//! optional. Present ones are applied in a fixed order regardless of how the
//! descriptor was built:
//!
//! 1. translate (one combined step)
//! 2. scale X, Y, Z
//! 3. rotate X, Y, Z
//! 4. skew X, Y
//!
//! A present sub-configuration is always applied in full; fields left at their
//! [`Default`] contribute an identity step.

use crate::matrix::Matrix3d;
use crate::trace::{ComposeEvent, DescriptorEvent, Tracer};

/// Translation offsets. Defaults to zero on every axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Translate {
    /// Offset along X.
    pub x: f64,
    /// Offset along Y.
    pub y: f64,
    /// Offset along Z.
    pub z: f64,
}

/// Per-axis scale factors. Defaults to one on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scale {
    /// Factor along X.
    pub x: f64,
    /// Factor along Y.
    pub y: f64,
    /// Factor along Z.
    pub z: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
}

/// Rotation angles in degrees. Defaults to zero on every axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rotate {
    /// Angle around X.
    pub x: f64,
    /// Angle around Y.
    pub y: f64,
    /// Angle around Z.
    pub z: f64,
}

/// Skew angles in degrees. Defaults to zero on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Skew {
    /// Skew along X.
    pub x: f64,
    /// Skew along Y.
    pub y: f64,
}

/// A declarative translate/scale/rotate/skew sequence.
///
/// ```
/// use matrix3d_core::descriptor::{Scale, TransformDescriptor, Translate};
/// use matrix3d_core::Matrix3d;
///
/// let desc = TransformDescriptor::new()
///     .with_translate(Translate { x: 10.0, ..Translate::default() })
///     .with_scale(Scale { x: 2.0, y: 2.0, z: 2.0 });
/// let m = Matrix3d::from_descriptor(&desc);
/// assert_eq!(m.to_text(), "matrix3d(2,0,0,0,0,2,0,0,0,0,2,0,10,0,0,1)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformDescriptor {
    /// Translation, applied first.
    pub translate: Option<Translate>,
    /// Scale, applied after translation.
    pub scale: Option<Scale>,
    /// Rotation, applied after scale.
    pub rotate: Option<Rotate>,
    /// Skew, applied last.
    pub skew: Option<Skew>,
}

impl TransformDescriptor {
    /// Creates an empty descriptor (applies nothing).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            translate: None,
            scale: None,
            rotate: None,
            skew: None,
        }
    }

    /// Sets the translate sub-configuration.
    #[must_use]
    pub const fn with_translate(mut self, translate: Translate) -> Self {
        self.translate = Some(translate);
        self
    }

    /// Sets the scale sub-configuration.
    #[must_use]
    pub const fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets the rotate sub-configuration.
    #[must_use]
    pub const fn with_rotate(mut self, rotate: Rotate) -> Self {
        self.rotate = Some(rotate);
        self
    }

    /// Sets the skew sub-configuration.
    #[must_use]
    pub const fn with_skew(mut self, skew: Skew) -> Self {
        self.skew = Some(skew);
        self
    }

    /// Returns `true` if no sub-configuration is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.translate.is_none()
            && self.scale.is_none()
            && self.rotate.is_none()
            && self.skew.is_none()
    }

    /// Returns the elementary steps this descriptor applies, in order.
    pub fn steps(&self) -> impl Iterator<Item = (TransformOp, Matrix3d)> {
        let translate = self.translate.map(|t| {
            [(
                TransformOp::Translate,
                Matrix3d::from_translation(t.x, t.y, t.z),
            )]
        });
        let scale = self.scale.map(|s| {
            [
                (TransformOp::ScaleX, Matrix3d::from_scale(s.x, 1.0, 1.0)),
                (TransformOp::ScaleY, Matrix3d::from_scale(1.0, s.y, 1.0)),
                (TransformOp::ScaleZ, Matrix3d::from_scale(1.0, 1.0, s.z)),
            ]
        });
        let rotate = self.rotate.map(|r| {
            [
                (TransformOp::RotateX, Matrix3d::from_rotation_x(r.x)),
                (TransformOp::RotateY, Matrix3d::from_rotation_y(r.y)),
                (TransformOp::RotateZ, Matrix3d::from_rotation_z(r.z)),
            ]
        });
        let skew = self.skew.map(|k| {
            [
                (TransformOp::SkewX, Matrix3d::from_skew(k.x, 0.0)),
                (TransformOp::SkewY, Matrix3d::from_skew(0.0, k.y)),
            ]
        });

        translate
            .into_iter()
            .flatten()
            .chain(scale.into_iter().flatten())
            .chain(rotate.into_iter().flatten())
            .chain(skew.into_iter().flatten())
    }
}

/// An elementary step produced while applying a [`TransformDescriptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformOp {
    /// Combined X/Y/Z translation.
    Translate,
    /// Scale along X.
    ScaleX,
    /// Scale along Y.
    ScaleY,
    /// Scale along Z.
    ScaleZ,
    /// Rotation around X.
    RotateX,
    /// Rotation around Y.
    RotateY,
    /// Rotation around Z.
    RotateZ,
    /// Skew along X.
    SkewX,
    /// Skew along Y.
    SkewY,
}

impl TransformOp {
    /// Every variant, in descriptor application order.
    pub const ALL: [Self; 9] = [
        Self::Translate,
        Self::ScaleX,
        Self::ScaleY,
        Self::ScaleZ,
        Self::RotateX,
        Self::RotateY,
        Self::RotateZ,
        Self::SkewX,
        Self::SkewY,
    ];

    /// Returns the CSS-style function name for this step.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Translate => "translate3d",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::ScaleZ => "scaleZ",
            Self::RotateX => "rotateX",
            Self::RotateY => "rotateY",
            Self::RotateZ => "rotateZ",
            Self::SkewX => "skewX",
            Self::SkewY => "skewY",
        }
    }
}

impl Matrix3d {
    /// Builds a matrix by applying `descriptor` to the identity.
    #[must_use]
    pub fn from_descriptor(descriptor: &TransformDescriptor) -> Self {
        Self::from_descriptor_traced(descriptor, &mut Tracer::none())
    }

    /// Like [`from_descriptor`](Self::from_descriptor), reporting each
    /// elementary step to `tracer`.
    #[must_use]
    pub fn from_descriptor_traced(
        descriptor: &TransformDescriptor,
        tracer: &mut Tracer<'_>,
    ) -> Self {
        let mut m = Self::IDENTITY;
        let mut steps = 0_u32;
        for (op, operand) in descriptor.steps() {
            m.multiply(&operand);
            tracer.compose(&ComposeEvent {
                step: steps,
                op,
                operand,
                result: m,
            });
            steps += 1;
        }
        tracer.descriptor_applied(&DescriptorEvent { steps, result: m });
        m
    }
}

impl From<TransformDescriptor> for Matrix3d {
    fn from(descriptor: TransformDescriptor) -> Self {
        Self::from_descriptor(&descriptor)
    }
}

impl From<&TransformDescriptor> for Matrix3d {
    fn from(descriptor: &TransformDescriptor) -> Self {
        Self::from_descriptor(descriptor)
    }
}
