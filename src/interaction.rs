//! Drag-to-pan interaction.
//!
//! Pointer input is queued as [`PointerEvent`]s by the host and drained by
//! [`DragController::execute`] once per frame, so the frame sees all input
//! that arrived since the previous one, in order.

use std::collections::VecDeque;

use crate::geom::Vector2;
use crate::view::{Extents, Viewport};

/// Pointer input relevant to panning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Press,
    /// Primary button released.
    Release,
    /// Pointer moved by `delta` screen pixels.
    Move {
        /// Movement since the previous move event.
        delta: Vector2,
    },
}

/// Drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// Button held; moves accumulate.
    Dragging,
}

/// Accumulates drag deltas and pans [`Extents`] once per frame.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
    pending: Vector2,
    queue: VecDeque<PointerEvent>,
    attached: bool,
}

impl DragController {
    /// Create a detached controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Pixel delta accumulated but not yet applied.
    pub fn pending(&self) -> Vector2 {
        self.pending
    }

    /// Check whether pointer events are accepted.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Start accepting pointer events from a zeroed accumulator.
    ///
    /// Moves queued before attaching are discarded.
    pub fn attach(&mut self) {
        tracing::info!("drag controller attached");
        self.attached = true;
        self.reset_accumulator();
    }

    /// Stop accepting pointer events and drop any queued ones.
    ///
    /// A drag in progress ends here, since its release can no longer arrive.
    pub fn detach(&mut self) {
        tracing::info!(dropped = self.queue.len(), "drag controller detached");
        self.attached = false;
        self.queue.clear();
        self.state = DragState::Idle;
        self.pending = Vector2::zero();
    }

    /// Reset the accumulator when playback (re)starts.
    ///
    /// Queued presses and releases still update the drag state. Queued moves
    /// are dropped.
    pub fn play(&mut self) {
        self.reset_accumulator();
    }

    /// Queue a pointer event for the next frame.
    ///
    /// Ignored while detached.
    pub fn push(&mut self, event: PointerEvent) {
        if !self.attached {
            tracing::trace!(?event, "pointer event ignored while detached");
            return;
        }
        self.queue.push_back(event);
    }

    /// Drain queued input and apply the accumulated pan to `extents`.
    ///
    /// Returns the math-space shift applied, if any.
    pub fn execute(&mut self, viewport: &Viewport, extents: &mut Extents) -> Option<Vector2> {
        while let Some(event) = self.queue.pop_front() {
            self.handle(event);
        }
        if self.state == DragState::Idle {
            return None;
        }
        let shift = Vector2::scale_vec(viewport.map_delta_to_local(self.pending), extents.size);
        self.pending = Vector2::zero();
        if !shift.is_finite() {
            tracing::trace!(?shift, "non-finite pan dropped");
            return None;
        }
        if shift == Vector2::zero() {
            return None;
        }
        extents.pos += shift;
        tracing::debug!(dx = shift.x, dy = shift.y, "extents panned");
        Some(shift)
    }

    fn reset_accumulator(&mut self) {
        let mut dropped = 0usize;
        while let Some(event) = self.queue.pop_front() {
            match event {
                PointerEvent::Move { .. } => dropped += 1,
                button => self.handle(button),
            }
        }
        self.pending = Vector2::zero();
        if dropped > 0 {
            tracing::debug!(dropped, "queued pointer moves discarded");
        }
    }

    fn handle(&mut self, event: PointerEvent) {
        match (self.state, event) {
            (DragState::Idle, PointerEvent::Press) => {
                self.state = DragState::Dragging;
            }
            (DragState::Dragging, PointerEvent::Release) => {
                self.state = DragState::Idle;
                self.pending = Vector2::zero();
            }
            (DragState::Dragging, PointerEvent::Move { delta }) => {
                if delta.is_finite() {
                    // Inverted so the content follows the cursor.
                    self.pending += -delta;
                } else {
                    tracing::trace!(?delta, "non-finite pointer delta dropped");
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Viewport, Extents, DragController) {
        let mut drag = DragController::new();
        drag.attach();
        (
            Viewport::new(Vector2::new(800.0, 600.0)),
            Extents::new(Vector2::new(-10.0, -10.0), Vector2::new(20.0, 20.0)),
            drag,
        )
    }

    #[test]
    fn drag_shifts_extents_by_scaled_delta() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Press);
        drag.push(PointerEvent::Move {
            delta: Vector2::new(100.0, 0.0),
        });
        let shift = drag.execute(&viewport, &mut extents).expect("panned");
        assert!((shift.x + 2.5).abs() < 1e-12);
        assert_eq!(shift.y, 0.0);
        assert!((extents.pos.x - (-12.5)).abs() < 1e-12);
        assert_eq!(extents.pos.y, -10.0);
        assert_eq!(extents.size, Vector2::new(20.0, 20.0));

        // The accumulator was consumed: an empty frame pans nothing.
        assert!(drag.execute(&viewport, &mut extents).is_none());
        assert!((extents.pos.x - (-12.5)).abs() < 1e-12);
    }

    #[test]
    fn vertical_drag_follows_cursor() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Press);
        drag.push(PointerEvent::Move {
            delta: Vector2::new(0.0, 30.0),
        });
        drag.execute(&viewport, &mut extents);
        // Dragging down reveals content above: the extents move up.
        assert!((extents.pos.y - (-9.0)).abs() < 1e-12);
    }

    #[test]
    fn moves_accumulate_across_events() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Press);
        for _ in 0..4 {
            drag.push(PointerEvent::Move {
                delta: Vector2::new(25.0, 0.0),
            });
        }
        drag.execute(&viewport, &mut extents);
        assert!((extents.pos.x - (-12.5)).abs() < 1e-12);
    }

    #[test]
    fn idle_moves_are_ignored() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Move {
            delta: Vector2::new(100.0, 100.0),
        });
        assert!(drag.execute(&viewport, &mut extents).is_none());
        assert_eq!(extents.pos, Vector2::new(-10.0, -10.0));
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn release_discards_pending() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Press);
        drag.push(PointerEvent::Move {
            delta: Vector2::new(100.0, 0.0),
        });
        drag.push(PointerEvent::Release);
        assert!(drag.execute(&viewport, &mut extents).is_none());
        assert_eq!(drag.pending(), Vector2::zero());

        drag.push(PointerEvent::Press);
        assert!(drag.execute(&viewport, &mut extents).is_none());
        assert_eq!(extents.pos, Vector2::new(-10.0, -10.0));
    }

    #[test]
    fn detached_controller_ignores_input() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Press);
        drag.detach();
        drag.push(PointerEvent::Press);
        drag.push(PointerEvent::Move {
            delta: Vector2::new(50.0, 0.0),
        });
        assert!(drag.execute(&viewport, &mut extents).is_none());
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn non_finite_delta_is_dropped() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Press);
        drag.push(PointerEvent::Move {
            delta: Vector2::new(f64::NAN, 1.0),
        });
        drag.push(PointerEvent::Move {
            delta: Vector2::new(8.0, 0.0),
        });
        drag.execute(&viewport, &mut extents);
        assert!((extents.pos.x - (-10.2)).abs() < 1e-12);
    }

    #[test]
    fn dragging_state_persists_across_frames() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Press);
        drag.execute(&viewport, &mut extents);
        assert_eq!(drag.state(), DragState::Dragging);
        drag.push(PointerEvent::Move {
            delta: Vector2::new(-80.0, 0.0),
        });
        drag.execute(&viewport, &mut extents);
        assert!((extents.pos.x - (-8.0)).abs() < 1e-12);
    }

    #[test]
    fn play_discards_queued_moves() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Press);
        drag.execute(&viewport, &mut extents);
        drag.push(PointerEvent::Move {
            delta: Vector2::new(100.0, 0.0),
        });
        drag.play();
        assert!(drag.execute(&viewport, &mut extents).is_none());
        assert_eq!(extents.pos, Vector2::new(-10.0, -10.0));
        // The button is still held.
        assert_eq!(drag.state(), DragState::Dragging);
    }

    #[test]
    fn play_keeps_queued_button_changes() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Press);
        drag.push(PointerEvent::Move {
            delta: Vector2::new(40.0, 0.0),
        });
        drag.play();
        assert_eq!(drag.state(), DragState::Dragging);
        drag.push(PointerEvent::Release);
        drag.play();
        assert_eq!(drag.state(), DragState::Idle);
        assert!(drag.execute(&viewport, &mut extents).is_none());
        assert_eq!(extents.pos, Vector2::new(-10.0, -10.0));
    }

    #[test]
    fn detach_ends_drag_in_progress() {
        let (viewport, mut extents, mut drag) = setup();
        drag.push(PointerEvent::Press);
        drag.execute(&viewport, &mut extents);
        assert_eq!(drag.state(), DragState::Dragging);

        drag.detach();
        assert_eq!(drag.state(), DragState::Idle);
        drag.push(PointerEvent::Release);
        drag.attach();
        drag.push(PointerEvent::Move {
            delta: Vector2::new(100.0, 0.0),
        });
        assert!(drag.execute(&viewport, &mut extents).is_none());
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(extents.pos, Vector2::new(-10.0, -10.0));
    }
}
