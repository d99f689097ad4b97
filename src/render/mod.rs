//! Drawing surface abstraction and the recording surface.
//!
//! The frame renderer talks to an immediate-mode 2D surface through
//! [`DrawSurface`]. [`RenderList`] implements it by recording backend-agnostic
//! [`RenderCommand`]s that render backends (such as the GPUI backend) replay.

mod color;

pub use color::Color;

use crate::geom::Vector2;

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl LineStyle {
    /// Create a line style.
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Text styling.
///
/// Text is anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
    /// Font family name.
    pub family: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 16.0,
            family: "Ubuntu".to_string(),
        }
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: Vector2,
    /// Bottom-right corner.
    pub max: Vector2,
}

impl ScreenRect {
    /// Create a rectangle from its corners.
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin_size(origin: Vector2, size: Vector2) -> Self {
        Self::new(origin, origin + size)
    }
}

/// 2D immediate-mode drawing surface.
///
/// Mirrors the subset of an HTML canvas context the renderer needs. Stroke
/// and fill state persists across calls until changed.
pub trait DrawSurface {
    /// Clear a rectangle to the background.
    fn clear_rect(&mut self, rect: ScreenRect);
    /// Discard the current path and start a new one.
    fn begin_path(&mut self);
    /// Start a new subpath at `point`.
    fn move_to(&mut self, point: Vector2);
    /// Extend the current subpath with a straight segment to `point`.
    fn line_to(&mut self, point: Vector2);
    /// Stroke the current path with the current stroke style and line width.
    fn stroke(&mut self);
    /// Draw `text` with its top-left corner at `position`.
    fn fill_text(&mut self, text: &str, position: Vector2);
    /// Set the stroke color.
    fn set_stroke_style(&mut self, color: Color);
    /// Set the text fill color.
    fn set_fill_style(&mut self, color: Color);
    /// Set the stroke width in pixels.
    fn set_line_width(&mut self, width: f32);
    /// Set the font size and family.
    fn set_font(&mut self, size: f32, family: &str);

    /// Set stroke color and width together.
    fn set_line_style(&mut self, style: LineStyle) {
        self.set_stroke_style(style.color);
        self.set_line_width(style.width);
    }
}

/// A single path operation in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    /// Start a subpath.
    MoveTo(Vector2),
    /// Draw a segment from the previous point.
    LineTo(Vector2),
}

/// Recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clear a rectangle.
    Clear(ScreenRect),
    /// Stroke a path.
    Path {
        /// Path operations in order.
        ops: Vec<PathOp>,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw text.
    Text {
        /// Top-left text position.
        position: Vector2,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Recording [`DrawSurface`].
///
/// Non-finite coordinates are clipped away: a dropped point breaks the
/// current subpath, and the next `line_to` starts a new one instead.
#[derive(Debug, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
    path: Vec<PathOp>,
    broken: bool,
    stroke: LineStyle,
    text: TextStyle,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            path: Vec::new(),
            broken: true,
            stroke: LineStyle::default(),
            text: TextStyle::default(),
        }
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Iterate over recorded path commands.
    pub fn paths(&self) -> impl Iterator<Item = (&[PathOp], &LineStyle)> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Path { ops, style } => Some((ops.as_slice(), style)),
            _ => None,
        })
    }

    /// Iterate over recorded text commands.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Vector2)> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Text { text, position, .. } => Some((text.as_str(), *position)),
            _ => None,
        })
    }
}

impl Default for RenderList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RenderList {
    fn clear_rect(&mut self, rect: ScreenRect) {
        if rect.min.is_finite() && rect.max.is_finite() {
            self.commands.push(RenderCommand::Clear(rect));
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.broken = true;
    }

    fn move_to(&mut self, point: Vector2) {
        if !point.is_finite() {
            self.broken = true;
            return;
        }
        self.path.push(PathOp::MoveTo(point));
        self.broken = false;
    }

    fn line_to(&mut self, point: Vector2) {
        if !point.is_finite() {
            self.broken = true;
            return;
        }
        if self.broken {
            self.path.push(PathOp::MoveTo(point));
            self.broken = false;
        } else {
            self.path.push(PathOp::LineTo(point));
        }
    }

    fn stroke(&mut self) {
        if !self.path.iter().any(|op| matches!(op, PathOp::LineTo(_))) {
            return;
        }
        self.commands.push(RenderCommand::Path {
            ops: self.path.clone(),
            style: self.stroke,
        });
    }

    fn fill_text(&mut self, text: &str, position: Vector2) {
        if text.is_empty() || !position.is_finite() {
            return;
        }
        self.commands.push(RenderCommand::Text {
            position,
            text: text.to_string(),
            style: self.text.clone(),
        });
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke.color = color;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.text.color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.stroke.width = width;
    }

    fn set_font(&mut self, size: f32, family: &str) {
        self.text.size = size;
        if self.text.family != family {
            self.text.family = family.to_string();
        }
    }
}
