/// Configuration for the GPUI plane view.
#[derive(Debug, Clone)]
pub struct PlotViewConfig {
    /// Request a new animation frame after every paint.
    pub continuous_redraw: bool,
    /// Skip frames while the canvas is smaller than this on either axis.
    pub min_canvas_px: f32,
}

impl Default for PlotViewConfig {
    fn default() -> Self {
        Self {
            continuous_redraw: true,
            min_canvas_px: 1.0,
        }
    }
}
