//! Fluent line builder.
//!
//! [`Line`] borrows the writer while one line is under construction and
//! exposes only the operations valid there: adding nodes, adding
//! attributes, and ending the line. The Graphviz helpers (`label`,
//! `color`, `shape`, ...) are thin wrappers over [`Line::attribute`].

use plume_color::Color;
use plume_enum::Enumerated;

use crate::attr::{Shape, Style};
use crate::sink::Sink;
use crate::writer::DotWriter;

/// A line under construction.
///
/// Created by [`DotWriter::start_line`] and the defaults-line variants.
/// Methods chain by value; [`Line::end`] or [`Line::finish`] terminates
/// the line, or a later structural call on the writer terminates it
/// implicitly.
pub struct Line<'w, S: Sink> {
    writer: &'w mut DotWriter<S>,
}

impl<'w, S: Sink> Line<'w, S> {
    pub(crate) fn new(writer: &'w mut DotWriter<S>) -> Self {
        Self { writer }
    }

    /// Add a node token to the line.
    pub fn node(self, name: &str, ports: &[&str]) -> Self {
        self.writer.node(name, ports);
        self
    }

    /// Add a `"name"="value"` attribute to the line.
    pub fn attribute(self, name: &str, value: &str) -> Self {
        self.writer.attribute(name, value);
        self
    }

    /// End the line with a space, keeping the next statement on the same
    /// physical row.
    pub fn end(self) {
        self.writer.end_line(false);
    }

    /// End the line with a newline.
    pub fn finish(self) {
        self.writer.end_line(true);
    }

    /// `label` attribute.
    pub fn label(self, label: &str) -> Self {
        self.attribute("label", label)
    }

    /// `color` attribute from a named color.
    pub fn color_name(self, name: &str) -> Self {
        self.attribute("color", name)
    }

    /// `color` attribute from a [`Color`], in its HTML hex form.
    pub fn color(self, color: Color) -> Self {
        self.attribute("color", &color.to_html())
    }

    /// `fillcolor` attribute from a [`Color`], in its HTML hex form.
    pub fn fill_color(self, color: Color) -> Self {
        self.attribute("fillcolor", &color.to_html())
    }

    /// `pos` attribute.
    pub fn pos(self, x: f64, y: f64) -> Self {
        self.attribute("pos", &format!("{x},{y}"))
    }

    /// `width` attribute.
    pub fn width(self, width: f64) -> Self {
        self.attribute("width", &width.to_string())
    }

    /// `height` attribute.
    pub fn height(self, height: f64) -> Self {
        self.attribute("height", &height.to_string())
    }

    /// `width` and `height` together.
    pub fn size(self, width: f64, height: f64) -> Self {
        self.width(width).height(height)
    }

    /// `pin` attribute.
    pub fn pin(self, pin: bool) -> Self {
        self.attribute("pin", if pin { "true" } else { "false" })
    }

    /// `fontsize` attribute in points.
    pub fn font_size(self, points: u32) -> Self {
        self.attribute("fontsize", &points.to_string())
    }

    /// `shape` attribute.
    pub fn shape(self, shape: Shape) -> Self {
        self.attribute("shape", shape.name())
    }

    /// `style` attribute.
    pub fn style(self, style: Style) -> Self {
        self.attribute("style", style.name())
    }
}
