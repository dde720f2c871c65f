// Copyright 2026 the Matrix3d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Matrices are stored as 16 row-major `f64` values.

use matrix3d_core::Matrix3d;
use matrix3d_core::descriptor::TransformOp;
use matrix3d_core::trace::{ComposeEvent, DescriptorEvent, TraceSink};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_COMPOSE: u8 = 1;
const TAG_DESCRIPTOR_APPLIED: u8 = 2;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_matrix(&mut self, m: &Matrix3d) {
        for v in m.coefficients() {
            self.buf.extend_from_slice(&v.to_le_bytes());
        }
    }

    fn write_op(&mut self, op: TransformOp) {
        self.write_u8(op_to_u8(op));
    }
}

impl TraceSink for RecorderSink {
    fn on_compose(&mut self, e: &ComposeEvent) {
        self.write_u8(TAG_COMPOSE);
        self.write_u32(e.step);
        self.write_op(e.op);
        self.write_matrix(&e.operand);
        self.write_matrix(&e.result);
    }

    fn on_descriptor_applied(&mut self, e: &DescriptorEvent) {
        self.write_u8(TAG_DESCRIPTOR_APPLIED);
        self.write_u32(e.steps);
        self.write_matrix(&e.result);
    }
}

const fn op_to_u8(op: TransformOp) -> u8 {
    match op {
        TransformOp::Translate => 0,
        TransformOp::ScaleX => 1,
        TransformOp::ScaleY => 2,
        TransformOp::ScaleZ => 3,
        TransformOp::RotateX => 4,
        TransformOp::RotateY => 5,
        TransformOp::RotateZ => 6,
        TransformOp::SkewX => 7,
        TransformOp::SkewY => 8,
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`ComposeEvent`].
    Compose(ComposeEvent),
    /// A [`DescriptorEvent`].
    DescriptorApplied(DescriptorEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_f64(&mut self) -> Option<f64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = f64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_matrix(&mut self) -> Option<Matrix3d> {
        let mut m = [0.0; 16];
        for slot in &mut m {
            *slot = self.read_f64()?;
        }
        Some(Matrix3d::from_row_major(m))
    }

    fn read_op(&mut self) -> Option<TransformOp> {
        TransformOp::ALL.get(usize::from(self.read_u8()?)).copied()
    }

    fn decode_compose(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Compose(ComposeEvent {
            step: self.read_u32()?,
            op: self.read_op()?,
            operand: self.read_matrix()?,
            result: self.read_matrix()?,
        }))
    }

    fn decode_descriptor_applied(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::DescriptorApplied(DescriptorEvent {
            steps: self.read_u32()?,
            result: self.read_matrix()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_COMPOSE => self.decode_compose(),
            TAG_DESCRIPTOR_APPLIED => self.decode_descriptor_applied(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use matrix3d_core::descriptor::{Rotate, Skew, TransformDescriptor};
    use matrix3d_core::trace::Tracer;

    #[test]
    fn op_encoding_matches_decode_table() {
        for (i, op) in TransformOp::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(op_to_u8(op)), i, "{op:?}");
        }
    }

    #[test]
    fn round_trip_compose() {
        let mut rec = RecorderSink::new();
        let operand = Matrix3d::from_rotation_y(33.0);
        let orig = ComposeEvent {
            step: 4,
            op: TransformOp::RotateY,
            operand,
            result: operand * Matrix3d::from_translation(1.0, 2.0, 3.0),
        };
        rec.on_compose(&orig);

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 1);
        match &events[0] {
            RecordedEvent::Compose(e) => {
                assert_eq!(e.step, orig.step);
                assert_eq!(e.op, orig.op);
                assert_eq!(e.operand, orig.operand);
                assert_eq!(e.result, orig.result);
            }
            other => panic!("expected Compose, got {other:?}"),
        }
    }

    #[test]
    fn records_descriptor_application() {
        let desc = TransformDescriptor::new()
            .with_rotate(Rotate {
                z: 45.0,
                ..Rotate::default()
            })
            .with_skew(Skew { x: 5.0, y: 0.0 });
        let mut rec = RecorderSink::new();
        let mut tracer = Tracer::new(&mut rec);
        let m = Matrix3d::from_descriptor_traced(&desc, &mut tracer);
        drop(tracer);

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 6);
        assert!(matches!(
            events[0],
            RecordedEvent::Compose(ComposeEvent {
                op: TransformOp::RotateX,
                ..
            })
        ));
        assert!(matches!(
            events[4],
            RecordedEvent::Compose(ComposeEvent {
                op: TransformOp::SkewY,
                ..
            })
        ));
        match &events[5] {
            RecordedEvent::DescriptorApplied(e) => {
                assert_eq!(e.steps, 5);
                assert_eq!(e.result, m);
            }
            other => panic!("expected DescriptorApplied, got {other:?}"),
        }
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_descriptor_applied(&DescriptorEvent {
            steps: 0,
            result: Matrix3d::IDENTITY,
        });
        let bytes = rec.into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 1]).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }
}
