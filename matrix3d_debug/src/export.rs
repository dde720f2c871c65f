// Copyright 2026 the Matrix3d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter for recorded composition traces.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes a JSON array with one object per event. Matrices are written
//! both as their `matrix3d(...)` text and as nested row arrays so the output
//! is easy to diff and to feed back into other tools.

use std::io::{self, Write};

use serde_json::{Value, json};

use matrix3d_core::Matrix3d;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Compose(e) => {
                events.push(json!({
                    "event": "compose",
                    "step": e.step,
                    "op": e.op.name(),
                    "operand": matrix_json(&e.operand),
                    "result": matrix_json(&e.result),
                }));
            }
            RecordedEvent::DescriptorApplied(e) => {
                events.push(json!({
                    "event": "descriptor_applied",
                    "steps": e.steps,
                    "finite": e.result.is_finite(),
                    "result": matrix_json(&e.result),
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

/// Returns `{"css": "matrix3d(...)", "rows": [[..], [..], [..], [..]]}`.
///
/// Non-finite coefficients become `null` in `rows`.
#[must_use]
pub fn matrix_json(m: &Matrix3d) -> Value {
    let rows: Vec<[f64; 4]> = (0..4).map(|r| m.row(r)).collect();
    json!({
        "css": m.to_text(),
        "rows": rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use matrix3d_core::descriptor::{Scale, TransformDescriptor, Translate};
    use matrix3d_core::trace::Tracer;

    #[test]
    fn export_produces_valid_json() {
        let desc = TransformDescriptor::new()
            .with_translate(Translate {
                x: 10.0,
                ..Translate::default()
            })
            .with_scale(Scale {
                x: 2.0,
                y: 2.0,
                z: 2.0,
            });
        let mut rec = RecorderSink::new();
        let mut tracer = Tracer::new(&mut rec);
        let _ = Matrix3d::from_descriptor_traced(&desc, &mut tracer);
        drop(tracer);

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        // Should parse as a JSON array.
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 5);

        assert_eq!(parsed[0]["event"], "compose");
        assert_eq!(parsed[0]["op"], "translate3d");
        assert_eq!(parsed[0]["result"]["rows"][0][3], 10.0);

        assert_eq!(parsed[4]["event"], "descriptor_applied");
        assert_eq!(parsed[4]["steps"], 4);
        assert_eq!(parsed[4]["finite"], true);
        assert_eq!(
            parsed[4]["result"]["css"],
            "matrix3d(2,0,0,0,0,2,0,0,0,0,2,0,10,0,0,1)"
        );
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn matrix_json_rows_are_row_major() {
        let value = matrix_json(&Matrix3d::from_translation(1.0, 2.0, 3.0));
        assert_eq!(value["rows"][1], json!([0.0, 1.0, 0.0, 2.0]));
    }
}
