//! gpui_planeplot renders a pannable Cartesian plane with function plots.
//!
//! The core maps between three coordinate spaces: surface pixels, a
//! normalized `[0,1]²` pivot space, and the math space of the plotted
//! functions. Rendering goes through the backend-agnostic [`DrawSurface`]
//! trait; enable the `gpui` feature for a ready-made GPUI view.

#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod frame;
pub mod geom;
pub mod interaction;
pub mod plot;
pub mod render;
pub mod series;
pub mod style;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
mod gpui_backend;

pub use axis::{AxisFormatter, GRID_STEP, draw_axes, draw_grid};
pub use error::{PlotError, Result};
pub use frame::{FrameClock, FrameTime};
pub use geom::{NORMALIZED_TOLERANCE, Vector2};
pub use interaction::{DragController, DragState, PointerEvent};
pub use plot::{DEFAULT_SPAN, PlanePlot, PlanePlotBuilder, Scene, draw_plot, draw_plots, sample_plot};
pub use render::{
    Color, DrawSurface, LineStyle, PathOp, RenderCommand, RenderList, ScreenRect, TextStyle,
};
pub use series::{PlotFunction, PlotId, PlotRegistry};
pub use style::Theme;
pub use transform::Transform;
pub use view::{Extents, GridRange, MAX_GRID_STEPS, Viewport};

#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiPlaneView, PlaneHandle, PlotViewConfig};
