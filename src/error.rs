//! Error types for plot configuration.

/// Error returned while configuring or starting a plot.
///
/// Everything here is fatal to startup. Per-frame numeric problems never
/// surface as errors; they are clipped away by the drawing surface.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlotError {
    /// No drawing surface was available at startup.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    /// The drawing surface reported an unusable size.
    #[error("invalid surface size {width}x{height}")]
    InvalidSurfaceSize {
        /// Reported width in pixels.
        width: f64,
        /// Reported height in pixels.
        height: f64,
    },
    /// The configured extents have a zero or non-finite size.
    #[error("invalid extents: pos ({x}, {y}) size ({width}, {height})")]
    InvalidExtents {
        /// Lower-left X.
        x: f64,
        /// Lower-left Y.
        y: f64,
        /// Width in math units.
        width: f64,
        /// Height in math units.
        height: f64,
    },
    /// A style string could not be parsed as a color.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

/// Result alias for plot configuration.
pub type Result<T> = std::result::Result<T, PlotError>;
