//! Grid lines, axes and their labels.

use std::sync::Arc;

use crate::geom::Vector2;
use crate::render::DrawSurface;
use crate::style::Theme;
use crate::transform::Transform;

/// Spacing between grid lines in math units.
pub const GRID_STEP: f64 = 1.0;

/// Formatter for grid labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Shortest decimal representation; integral values print without a
    /// fractional part.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Wrap a formatting callback.
    pub fn custom(formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(formatter))
    }

    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format!("{value}"),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// Draw one grid line per math unit on each axis, labelling every line
/// except the ones through the origin.
///
/// Labels sit next to the axis: X labels just below `zero.y`, Y labels just
/// right of `zero.x`, so they follow the axes while panning.
pub fn draw_grid<S: DrawSurface + ?Sized>(
    surface: &mut S,
    transform: &Transform<'_>,
    theme: &Theme,
    formatter: &AxisFormatter,
) {
    let size = transform.viewport().size;
    let extents = transform.extents();
    let zero = transform.origin();
    let offset = theme.label_offset;

    apply_label_style(surface, theme);
    surface.set_line_style(theme.grid);
    surface.begin_path();
    for x in extents.iter_x(GRID_STEP) {
        let pt = transform.math_to_screen(Vector2::new(x, 0.0));
        surface.move_to(Vector2::new(pt.x, 0.0));
        surface.line_to(Vector2::new(pt.x, size.y));
        if x != 0.0 {
            surface.fill_text(&formatter.format(x), Vector2::new(pt.x + offset, zero.y + offset));
        }
    }
    for y in extents.iter_y(GRID_STEP) {
        let ny = transform.math_to_screen(Vector2::new(0.0, y)).y;
        surface.move_to(Vector2::new(0.0, ny));
        surface.line_to(Vector2::new(size.x, ny));
        if y != 0.0 {
            surface.fill_text(&formatter.format(y), Vector2::new(zero.x + offset, ny + offset));
        }
    }
    surface.stroke();
}

/// Draw the two bold axes through the math origin and label it `0`.
pub fn draw_axes<S: DrawSurface + ?Sized>(surface: &mut S, transform: &Transform<'_>, theme: &Theme) {
    let size = transform.viewport().size;
    let zero = transform.origin();
    let offset = theme.label_offset;

    surface.set_line_style(theme.axis);
    surface.begin_path();
    // X axis
    surface.move_to(Vector2::new(0.0, zero.y));
    surface.line_to(Vector2::new(size.x, zero.y));
    // Y axis
    surface.move_to(Vector2::new(zero.x, 0.0));
    surface.line_to(Vector2::new(zero.x, size.y));
    surface.stroke();

    apply_label_style(surface, theme);
    surface.fill_text("0", Vector2::new(zero.x + offset, zero.y + offset));
}

fn apply_label_style<S: DrawSurface + ?Sized>(surface: &mut S, theme: &Theme) {
    surface.set_fill_style(theme.label.color);
    surface.set_font(theme.label.size, &theme.label.family);
}
