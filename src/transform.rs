//! Coordinate transforms between math and pixel space.

use crate::geom::Vector2;
use crate::view::{Extents, Viewport};

/// Math/pixel transform for one frame.
///
/// Routes every conversion through normalized space, so it stays consistent
/// with the individual [`Viewport`] and [`Extents`] mappings.
#[derive(Debug, Clone, Copy)]
pub struct Transform<'a> {
    viewport: &'a Viewport,
    extents: &'a Extents,
}

impl<'a> Transform<'a> {
    /// Create a transform for the given viewport and extents.
    pub fn new(viewport: &'a Viewport, extents: &'a Extents) -> Self {
        Self { viewport, extents }
    }

    /// Access the viewport.
    pub fn viewport(&self) -> &'a Viewport {
        self.viewport
    }

    /// Access the extents.
    pub fn extents(&self) -> &'a Extents {
        self.extents
    }

    /// Map a math point into pixel space.
    pub fn math_to_screen(&self, point: Vector2) -> Vector2 {
        self.viewport
            .map_to_global(self.extents.map_to_local(point))
    }

    /// Map a pixel point into math space.
    pub fn screen_to_math(&self, point: Vector2) -> Vector2 {
        self.extents
            .map_to_global(self.viewport.map_to_local(point))
    }

    /// Pixel location of the math origin.
    pub fn origin(&self) -> Vector2 {
        self.math_to_screen(Vector2::zero())
    }
}
