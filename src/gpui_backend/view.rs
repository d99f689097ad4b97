use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, Window, canvas, div,
};

use crate::geom::Vector2;
use crate::interaction::{DragState, PointerEvent};
use crate::plot::PlanePlot;
use crate::render::RenderList;

use super::config::PlotViewConfig;
use super::paint::{PlaneFrame, paint_frame, to_hsla};
use super::state::{PlaneUiState, read_lock, write_lock};

/// A GPUI view that renders a [`PlanePlot`] every animation frame.
///
/// Dragging with the left button pans the plane. The plot starts playing
/// when the view is created.
#[derive(Clone)]
pub struct GpuiPlaneView {
    plot: Arc<RwLock<PlanePlot>>,
    state: Arc<RwLock<PlaneUiState>>,
    config: PlotViewConfig,
}

impl GpuiPlaneView {
    /// Create a new GPUI view for the given plot.
    ///
    /// Uses the default [`PlotViewConfig`].
    pub fn new(plot: PlanePlot) -> Self {
        Self::with_config(plot, PlotViewConfig::default())
    }

    /// Create a new GPUI view with a custom configuration.
    pub fn with_config(mut plot: PlanePlot, config: PlotViewConfig) -> Self {
        plot.play();
        Self {
            plot: Arc::new(RwLock::new(plot)),
            state: Arc::new(RwLock::new(PlaneUiState::default())),
            config,
        }
    }

    /// Get a handle for mutating the underlying plot.
    pub fn plot_handle(&self) -> PlaneHandle {
        PlaneHandle {
            plot: Arc::clone(&self.plot),
        }
    }

    fn push(&self, event: PointerEvent) {
        write_lock(&self.plot).push_pointer(event);
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let mut state = write_lock(&self.state);
        state.last_cursor = Some(screen_point(ev.position));
        self.push(PointerEvent::Press);
        cx.notify();
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let mut state = write_lock(&self.state);
        let Some(delta) = state.cursor_delta(screen_point(ev.position)) else {
            return;
        };
        if ev.pressed_button == Some(MouseButton::Left) {
            self.push(PointerEvent::Move { delta });
            cx.notify();
        } else if self.drag_active() {
            // The button came up outside the canvas.
            self.push(PointerEvent::Release);
        }
    }

    fn drag_active(&self) -> bool {
        read_lock(&self.plot).drag().state() == DragState::Dragging
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let mut state = write_lock(&self.state);
        state.last_cursor = Some(screen_point(ev.position));
        self.push(PointerEvent::Release);
        cx.notify();
    }
}

impl Render for GpuiPlaneView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let plot = Arc::clone(&self.plot);
        let state = Arc::clone(&self.state);
        let config = self.config.clone();
        let background = read_lock(&plot).theme().background;

        div()
            .size_full()
            .bg(to_hsla(background))
            .child(
                canvas(
                    move |bounds, window, _| {
                        let mut render = RenderList::new();
                        let width = f32::from(bounds.size.width);
                        let height = f32::from(bounds.size.height);
                        let origin = screen_point(bounds.origin);
                        if width >= config.min_canvas_px && height >= config.min_canvas_px {
                            let frame = write_lock(&state).clock.tick();
                            let size = Vector2::new(width as f64, height as f64);
                            write_lock(&plot).execute(frame, size, &mut render);
                        }
                        if config.continuous_redraw {
                            window.request_animation_frame();
                        }
                        PlaneFrame {
                            render,
                            origin,
                            background,
                        }
                    },
                    move |_, frame, window, cx| {
                        paint_frame(&frame, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
    }
}

/// A handle for mutating a [`PlanePlot`] held inside a `GpuiPlaneView`.
///
/// The handle clones cheaply and can be moved into async tasks.
#[derive(Clone)]
pub struct PlaneHandle {
    plot: Arc<RwLock<PlanePlot>>,
}

impl PlaneHandle {
    /// Read the plot state.
    ///
    /// The plot is locked for the duration of the callback. A lock poisoned
    /// by a panicking plot function is recovered.
    pub fn read<R>(&self, f: impl FnOnce(&PlanePlot) -> R) -> R {
        let plot = read_lock(&self.plot);
        f(&plot)
    }

    /// Mutate the plot state.
    ///
    /// The plot is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut PlanePlot) -> R) -> R {
        let mut plot = write_lock(&self.plot);
        f(&mut plot)
    }
}

fn screen_point(point: Point<Pixels>) -> Vector2 {
    Vector2::new(f32::from(point.x) as f64, f32::from(point.y) as f64)
}
