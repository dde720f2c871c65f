// Copyright 2026 the Matrix3d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Matrices are
//! printed in their `matrix3d(...)` text form.

use std::io::Write;

use matrix3d_core::trace::{ComposeEvent, DescriptorEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    operands: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("operands", &self.operands)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            operands: false,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            operands: false,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            operands: false,
        }
    }

    /// Also prints the elementary matrix of every compose step.
    #[must_use]
    pub fn with_operands(mut self, operands: bool) -> Self {
        self.operands = operands;
        self
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_compose(&mut self, e: &ComposeEvent) {
        if self.operands {
            let _ = writeln!(
                self.writer,
                "[compose] step={} op={} operand={} result={}",
                e.step,
                e.op.name(),
                e.operand,
                e.result,
            );
        } else {
            let _ = writeln!(
                self.writer,
                "[compose] step={} op={} result={}",
                e.step,
                e.op.name(),
                e.result,
            );
        }
    }

    fn on_descriptor_applied(&mut self, e: &DescriptorEvent) {
        let finite = if e.result.is_finite() { "ok" } else { "NON-FINITE" };
        let _ = writeln!(
            self.writer,
            "[descriptor] steps={} result={} {finite}",
            e.steps, e.result,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use matrix3d_core::Matrix3d;
    use matrix3d_core::descriptor::{Scale, TransformDescriptor, Translate};
    use matrix3d_core::trace::Tracer;

    #[test]
    fn pretty_print_descriptor() {
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
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        let mut tracer = Tracer::new(&mut sink);
        let _ = Matrix3d::from_descriptor_traced(&desc, &mut tracer);
        drop(tracer);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5, "got: {output}");
        assert!(lines[0].starts_with("[compose] step=0 op=translate3d"), "got: {output}");
        assert!(lines[3].contains("op=scaleZ"), "got: {output}");
        assert_eq!(
            lines[4],
            "[descriptor] steps=4 result=matrix3d(2,0,0,0,0,2,0,0,0,0,2,0,10,0,0,1) ok"
        );
    }

    #[test]
    fn operands_are_optional() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new()).with_operands(true);
        sink.on_compose(&ComposeEvent {
            step: 0,
            op: matrix3d_core::descriptor::TransformOp::ScaleX,
            operand: Matrix3d::from_scale(3.0, 1.0, 1.0),
            result: Matrix3d::from_scale(3.0, 1.0, 1.0),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("operand=matrix3d(3,"), "got: {output}");
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn boxed_writer_receives_lines() {
        let buf = SharedBuf::default();
        let mut sink = PrettyPrintSink::new(Box::new(buf.clone()));
        sink.on_descriptor_applied(&DescriptorEvent {
            steps: 0,
            result: Matrix3d::IDENTITY,
        });
        let mut broken = Matrix3d::IDENTITY;
        broken.scale_x(f64::INFINITY);
        sink.on_descriptor_applied(&DescriptorEvent {
            steps: 1,
            result: broken,
        });
        drop(sink);

        let output = String::from_utf8(buf.0.take()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "[descriptor] steps=0 result=matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,0,0,0,1) ok"
        );
        assert!(lines[1].ends_with(" NON-FINITE"), "got: {output}");
    }

    #[test]
    fn stderr_sink_starts_without_operands() {
        let sink = PrettyPrintSink::stderr();
        assert_eq!(
            format!("{sink:?}"),
            "PrettyPrintSink { operands: false, .. }"
        );
    }
}
