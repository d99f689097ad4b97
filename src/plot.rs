//! Plot entry points, builders and the per-frame pipeline.

use crate::axis::{AxisFormatter, draw_axes, draw_grid};
use crate::error::{PlotError, Result};
use crate::frame::FrameTime;
use crate::geom::Vector2;
use crate::interaction::{DragController, PointerEvent};
use crate::render::{DrawSurface, ScreenRect};
use crate::series::{PlotFunction, PlotId, PlotRegistry};
use crate::style::Theme;
use crate::transform::Transform;
use crate::view::{Extents, GridRange, Viewport};

/// Default height of the visible extents, in math units.
pub const DEFAULT_SPAN: f64 = 20.0;

/// Shared frame state read and written by the pipeline stages.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Surface size, resynced every frame.
    pub viewport: Viewport,
    /// Visible math rectangle, moved by panning.
    pub extents: Extents,
    /// Functions drawn over the plane.
    pub plots: PlotRegistry,
}

impl Scene {
    /// Transform for the current viewport and extents.
    pub fn transform(&self) -> Transform<'_> {
        Transform::new(&self.viewport, &self.extents)
    }
}

/// A pannable Cartesian plane with function plots.
///
/// Each call to [`PlanePlot::execute`] runs one frame: viewport resync, drag,
/// grid and axes, then plots.
#[derive(Debug, Clone)]
pub struct PlanePlot {
    scene: Scene,
    drag: DragController,
    theme: Theme,
    formatter: AxisFormatter,
    playing: bool,
    frames: u64,
}

impl PlanePlot {
    /// Start building a plot with custom configuration.
    pub fn builder() -> PlanePlotBuilder {
        PlanePlotBuilder::default()
    }

    /// Access the scene state.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Access the scene state mutably.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Access the current theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Access the drag controller.
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Add a plot, drawn after the existing ones.
    pub fn add_plot(&mut self, plot: PlotFunction) -> PlotId {
        self.scene.plots.add(plot)
    }

    /// Queue pointer input for the next frame.
    pub fn push_pointer(&mut self, event: PointerEvent) {
        self.drag.push(event);
    }

    /// Check whether frames are being rendered.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Start (or restart) playback with a zeroed drag accumulator.
    pub fn play(&mut self) {
        tracing::info!(plots = self.scene.plots.len(), "plane plot playing");
        self.drag.play();
        if !self.drag.is_attached() {
            self.drag.attach();
        }
        self.playing = true;
    }

    /// Stop playback and detach pointer input.
    pub fn stop(&mut self) {
        tracing::info!(frames = self.frames, "plane plot stopped");
        self.drag.detach();
        self.playing = false;
    }

    /// Render one frame onto `surface`, whose current size is `surface_size`.
    pub fn execute<S: DrawSurface + ?Sized>(
        &mut self,
        frame: FrameTime,
        surface_size: Vector2,
        surface: &mut S,
    ) {
        if !self.playing {
            return;
        }
        tracing::trace!(
            delta_ms = frame.delta_ms,
            elapsed_ms = frame.elapsed_ms,
            "frame"
        );
        self.frames += 1;

        let scene = &mut self.scene;
        scene.viewport.resync(surface_size);
        self.drag.execute(&scene.viewport, &mut scene.extents);

        let transform = scene.transform();
        surface.clear_rect(ScreenRect::from_origin_size(
            Vector2::zero(),
            scene.viewport.size,
        ));
        draw_grid(surface, &transform, &self.theme, &self.formatter);
        draw_axes(surface, &transform, &self.theme);
        draw_plots(surface, &transform, &scene.plots, self.theme.plot_width);
    }
}

/// Stroke every visible plot, in registration order.
pub fn draw_plots<S: DrawSurface + ?Sized>(
    surface: &mut S,
    transform: &Transform<'_>,
    plots: &PlotRegistry,
    width: f32,
) {
    for plot in plots.iter().filter(|plot| plot.is_visible()) {
        draw_plot(surface, transform, plot, width);
    }
}

/// Sample `plot` once per pixel column and stroke the result.
///
/// The first finite sample moves the pen; later ones draw segments. A
/// non-finite sample lifts the pen until the next finite one.
pub fn draw_plot<S: DrawSurface + ?Sized>(
    surface: &mut S,
    transform: &Transform<'_>,
    plot: &PlotFunction,
    width: f32,
) {
    surface.set_line_style(plot.line_style(width));
    surface.begin_path();

    let mut pen_down = false;
    let mut skipped = 0usize;
    for sample in sample_plot(transform, plot) {
        match sample {
            Some(point) if pen_down => surface.line_to(point),
            Some(point) => {
                surface.move_to(point);
                pen_down = true;
            }
            None => {
                pen_down = false;
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        tracing::trace!(plot = plot.name(), skipped, "non-finite samples skipped");
    }
    surface.stroke();
}

/// Pixel positions of `plot`, one per integer pixel column from zero up to
/// the viewport width. Non-finite samples are `None`.
pub fn sample_plot<'a>(
    transform: &'a Transform<'a>,
    plot: &'a PlotFunction,
) -> impl Iterator<Item = Option<Vector2>> + 'a {
    let width = transform.viewport().size.x;
    GridRange::new(0.0, width, 1.0).map(move |column| {
        let math_x = transform.screen_to_math(Vector2::new(column, 0.0)).x;
        let math_y = plot.evaluate(math_x);
        if !math_y.is_finite() {
            return None;
        }
        let point = transform.math_to_screen(Vector2::new(math_x, math_y));
        point.is_finite().then_some(point)
    })
}

/// Builder for configuring a plot before construction.
#[derive(Debug)]
pub struct PlanePlotBuilder {
    theme: Theme,
    formatter: AxisFormatter,
    extents: Option<Extents>,
    span: f64,
    plots: PlotRegistry,
}

impl Default for PlanePlotBuilder {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            formatter: AxisFormatter::default(),
            extents: None,
            span: DEFAULT_SPAN,
            plots: PlotRegistry::new(),
        }
    }
}

impl PlanePlotBuilder {
    /// Set the theme used by the plot.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the grid label formatter.
    pub fn formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Use explicit initial extents.
    pub fn extents(mut self, extents: Extents) -> Self {
        self.extents = Some(extents);
        self
    }

    /// Height of the default origin-centred extents; the width follows the
    /// surface aspect ratio. Ignored when explicit extents are set.
    pub fn span(mut self, span: f64) -> Self {
        self.span = span;
        self
    }

    /// Add a plot.
    pub fn plot(mut self, plot: PlotFunction) -> Self {
        self.plots.add(plot);
        self
    }

    /// Build the plot for a drawing surface of the given size.
    ///
    /// `None` means no drawing surface could be obtained.
    pub fn build(self, surface_size: Option<Vector2>) -> Result<PlanePlot> {
        let Some(size) = surface_size else {
            return Err(PlotError::SurfaceUnavailable(
                "no 2D drawing context".to_string(),
            ));
        };
        let viewport = Viewport::new(size);
        if !viewport.is_valid() {
            return Err(PlotError::InvalidSurfaceSize {
                width: size.x,
                height: size.y,
            });
        }
        let extents = self
            .extents
            .unwrap_or_else(|| Extents::centered(self.span, size));
        if !extents.is_valid() {
            return Err(PlotError::InvalidExtents {
                x: extents.pos.x,
                y: extents.pos.y,
                width: extents.size.x,
                height: extents.size.y,
            });
        }
        tracing::debug!(
            width = size.x,
            height = size.y,
            plots = self.plots.len(),
            "plane plot built"
        );
        Ok(PlanePlot {
            scene: Scene {
                viewport,
                extents,
                plots: self.plots,
            },
            drag: DragController::new(),
            theme: self.theme,
            formatter: self.formatter,
            playing: false,
            frames: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Color, PathOp, RenderCommand, RenderList};

    fn square_scene() -> (Viewport, Extents, PlotFunction) {
        (
            Viewport::new(Vector2::new(800.0, 600.0)),
            Extents::new(Vector2::new(-10.0, -10.0), Vector2::new(20.0, 20.0)),
            PlotFunction::new("square", Color::BLUE, |x| x * x),
        )
    }

    #[test]
    fn samples_one_point_per_column() {
        let (viewport, extents, plot) = square_scene();
        let transform = Transform::new(&viewport, &extents);
        let samples: Vec<_> = sample_plot(&transform, &plot).collect();
        assert_eq!(samples.len(), 800);

        let first = samples[0].expect("finite");
        let expected = viewport.map_to_global(extents.map_to_local(Vector2::new(-10.0, 100.0)));
        assert_eq!(first, expected);

        let origin = samples[400].expect("finite");
        assert!((origin.x - 400.0).abs() < 1e-9);
        assert!((origin.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn plot_path_moves_then_draws() {
        let (viewport, extents, plot) = square_scene();
        let transform = Transform::new(&viewport, &extents);
        let mut list = RenderList::new();
        draw_plot(&mut list, &transform, &plot, 2.0);

        let (ops, style) = list.paths().next().expect("plot path");
        assert_eq!(style.color, Color::BLUE);
        assert_eq!(style.width, 2.0);
        assert!(matches!(ops[0], PathOp::MoveTo(_)));
        assert!(ops[1..].iter().all(|op| matches!(op, PathOp::LineTo(_))));
        assert_eq!(ops.len(), 800);
    }

    #[test]
    fn non_finite_samples_lift_the_pen() {
        let viewport = Viewport::new(Vector2::new(800.0, 600.0));
        let extents = Extents::new(Vector2::new(-10.0, -10.0), Vector2::new(20.0, 20.0));
        let transform = Transform::new(&viewport, &extents);
        let plot = PlotFunction::new("reciprocal", Color::RED, |x| 1.0 / x);
        let mut list = RenderList::new();
        draw_plot(&mut list, &transform, &plot, 2.0);

        let (ops, _) = list.paths().next().expect("plot path");
        let moves: Vec<_> = ops
            .iter()
            .enumerate()
            .filter(|(_, op)| matches!(op, PathOp::MoveTo(_)))
            .map(|(index, _)| index)
            .collect();
        // One move at the start, one after the pole at x = 0.
        assert_eq!(moves, vec![0, 400]);
        assert_eq!(ops.len(), 799);
    }

    #[test]
    fn frame_draws_clear_grid_axes_then_plots() {
        let (_, extents, plot) = square_scene();
        let mut plane = PlanePlot::builder()
            .extents(extents)
            .plot(plot)
            .plot(PlotFunction::new("decay", Color::RED, |x| 1.0 - (-x).exp()))
            .build(Some(Vector2::new(800.0, 600.0)))
            .expect("valid plot");
        plane.play();

        let mut list = RenderList::new();
        plane.execute(FrameTime::default(), Vector2::new(800.0, 600.0), &mut list);

        assert!(matches!(list.commands()[0], RenderCommand::Clear(_)));
        let colors: Vec<Color> = list.paths().map(|(_, style)| style.color).collect();
        let theme = Theme::default();
        assert_eq!(
            colors,
            vec![theme.grid.color, theme.axis.color, Color::BLUE, Color::RED]
        );
        assert_eq!(plane.frame_count(), 1);
    }

    #[test]
    fn stopped_plot_draws_nothing() {
        let mut plane = PlanePlot::builder()
            .build(Some(Vector2::new(800.0, 600.0)))
            .expect("valid plot");
        let mut list = RenderList::new();
        plane.execute(FrameTime::default(), Vector2::new(800.0, 600.0), &mut list);
        assert!(list.commands().is_empty());

        plane.play();
        plane.stop();
        plane.execute(FrameTime::default(), Vector2::new(800.0, 600.0), &mut list);
        assert!(list.commands().is_empty());
        assert!(!plane.drag().is_attached());
    }

    #[test]
    fn build_rejects_bad_configuration() {
        assert!(matches!(
            PlanePlot::builder().build(None),
            Err(PlotError::SurfaceUnavailable(_))
        ));
        assert!(matches!(
            PlanePlot::builder().build(Some(Vector2::new(0.0, 600.0))),
            Err(PlotError::InvalidSurfaceSize { .. })
        ));
        assert!(matches!(
            PlanePlot::builder()
                .extents(Extents::new(Vector2::zero(), Vector2::new(0.0, 1.0)))
                .build(Some(Vector2::new(800.0, 600.0))),
            Err(PlotError::InvalidExtents { .. })
        ));
    }

    #[test]
    fn default_extents_are_aspect_corrected() {
        let plane = PlanePlot::builder()
            .build(Some(Vector2::new(800.0, 400.0)))
            .expect("valid plot");
        let extents = plane.scene().extents;
        assert_eq!(extents.size, Vector2::new(40.0, 20.0));
        assert_eq!(extents.pos, Vector2::new(-20.0, -10.0));
    }
}
