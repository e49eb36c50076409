// SPDX-License-Identifier: MPL-2.0
//! Line-oriented terminal rendering for the demo binary.

use crate::application::port::{ElementId, Surface, TextSink};
use crate::ui::notifications::{Placement, Severity, ToastView};
use std::io::{self, Write};

fn glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "i",
        Severity::Success => "✔",
        Severity::Error => "!",
    }
}

/// Prints one line per toast state change.
#[derive(Debug)]
pub struct TerminalSurface<W> {
    out: W,
    next_element: u64,
}

impl TerminalSurface<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_element: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, element: ElementId, what: &str, toast: Option<&ToastView>) {
        let result = match toast {
            Some(toast) => writeln!(
                self.out,
                "[toast {}] {what:<8} {} {} ({})",
                element.raw(),
                glyph(toast.severity),
                toast.message,
                match toast.placement {
                    Placement::Offscreen => "off-screen",
                    Placement::Onscreen => "on-screen",
                },
            ),
            None => writeln!(self.out, "[toast {}] {what}", element.raw()),
        };
        if let Err(err) = result {
            tracing::debug!(error = %err, "terminal write failed");
        }
    }
}

impl<W: Write> Surface<ToastView> for TerminalSurface<W> {
    fn render(&mut self, content: &ToastView) -> ElementId {
        let element = ElementId::from_raw(self.next_element);
        self.next_element += 1;
        self.line(element, "attach", Some(content));
        element
    }

    fn update(&mut self, element: ElementId, content: &ToastView) {
        self.line(element, "update", Some(content));
    }

    fn remove(&mut self, element: ElementId) {
        self.line(element, "detach", None);
    }
}

/// Typewriter line printed with a fixed prefix.
#[derive(Debug)]
pub struct TerminalLine<W> {
    out: W,
    prefix: String,
}

impl TerminalLine<io::Stdout> {
    #[must_use]
    pub fn stdout(prefix: impl Into<String>) -> Self {
        Self::new(io::stdout(), prefix)
    }
}

impl<W: Write> TerminalLine<W> {
    pub fn new(out: W, prefix: impl Into<String>) -> Self {
        Self {
            out,
            prefix: prefix.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TextSink for TerminalLine<W> {
    fn write(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{}{text}", self.prefix) {
            tracing::debug!(error = %err, "terminal write failed");
        }
    }
}
