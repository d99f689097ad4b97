use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing_subscriber::EnvFilter;

use gpui_planeplot::{GpuiPlaneView, PlanePlot, PlotFunction, Theme, Vector2};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    Application::new().run(|cx| {
        let (width, height) = (960.0, 640.0);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(width), px(height)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let square = PlotFunction::with_style("square", "blue", |x| x.powi(2))
                .expect("valid color");
            let decay = PlotFunction::with_style("decay", "red", |x| 1.0 - (-x).exp())
                .expect("valid color");

            let plot = PlanePlot::builder()
                .theme(Theme::light())
                .plot(square)
                .plot(decay)
                .build(Some(Vector2::new(width as f64, height as f64)))
                .expect("valid plot configuration");

            let view = GpuiPlaneView::new(plot);
            cx.new(|_| view)
        })
        .unwrap();
    });
}
