//! Style and theming.

use crate::render::{Color, LineStyle, TextStyle};

/// Visual theme for the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Background color painted by backends behind cleared areas.
    pub background: Color,
    /// Grid line styling.
    pub grid: LineStyle,
    /// Axis line styling.
    pub axis: LineStyle,
    /// Label text styling.
    pub label: TextStyle,
    /// Label offset from its anchor, in pixels.
    pub label_offset: f64,
    /// Stroke width used for plotted functions.
    pub plot_width: f32,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Light theme: grey grid and black axes on white.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            grid: LineStyle::new(Color::GREY, 1.0),
            axis: LineStyle::new(Color::BLACK, 3.0),
            label: TextStyle::default(),
            label_offset: 4.0,
            plot_width: 2.0,
        }
    }

    /// Dark theme for low-light displays.
    pub fn dark() -> Self {
        let foreground = Color::rgb8(230, 230, 230);
        Self {
            background: Color::rgb8(24, 24, 28),
            grid: LineStyle::new(Color::rgb8(70, 70, 78), 1.0),
            axis: LineStyle::new(foreground, 3.0),
            label: TextStyle {
                color: foreground,
                ..TextStyle::default()
            },
            label_offset: 4.0,
            plot_width: 2.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
