//! GPUI integration for gpui_planeplot.
//!
//! This module provides a GPUI view that renders a
//! [`PlanePlot`](crate::plot::PlanePlot) every animation frame and turns
//! left-button drags into pan input.

mod config;
mod paint;
mod state;
mod view;

pub use config::PlotViewConfig;
pub use view::{GpuiPlaneView, PlaneHandle};
