//! View models: the pixel viewport and the visible math extents.
//!
//! Both types map into a shared normalized space, `[0,1]²` with the origin at
//! the bottom-left and Y pointing up. Composing one type's `map_to_local` with
//! the other's `map_to_global` converts between pixel and math coordinates.

use crate::geom::Vector2;

/// The drawing surface size in pixels.
///
/// Pixel space has its origin at the top-left with Y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface size in pixels.
    pub size: Vector2,
}

impl Viewport {
    /// Create a viewport of the given pixel size.
    pub fn new(size: Vector2) -> Self {
        Self { size }
    }

    /// Check whether the size is finite and positive on both axes.
    pub fn is_valid(&self) -> bool {
        self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Replace the size with the live surface size.
    ///
    /// Returns true if the size changed.
    pub fn resync(&mut self, size: Vector2) -> bool {
        if self.size == size {
            return false;
        }
        tracing::debug!(
            from_w = self.size.x,
            from_h = self.size.y,
            to_w = size.x,
            to_h = size.y,
            "viewport resized"
        );
        self.size = size;
        true
    }

    /// Check whether a pixel point lies strictly inside the surface.
    pub fn contains(&self, pt: Vector2) -> bool {
        in_range(pt.x, 0.0, self.size.x) && in_range(pt.y, 0.0, self.size.y)
    }

    /// Map a pixel point into normalized space.
    pub fn map_to_local(&self, global: Vector2) -> Vector2 {
        Vector2::new(global.x / self.size.x, 1.0 - global.y / self.size.y)
    }

    /// Map a normalized point into pixel space.
    pub fn map_to_global(&self, local: Vector2) -> Vector2 {
        Vector2::scale_vec(Vector2::flip_y(local) + Vector2::new(0.0, 1.0), self.size)
    }

    /// Map a pixel displacement into a normalized displacement.
    ///
    /// Only the linear part of [`Viewport::map_to_local`] applies to deltas.
    pub fn map_delta_to_local(&self, delta: Vector2) -> Vector2 {
        Vector2::scale_vec(Vector2::flip_y(delta), Vector2::inverse(self.size))
    }
}

/// The visible rectangle of math space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    /// Lower-left corner in math units.
    pub pos: Vector2,
    /// Width and height in math units.
    pub size: Vector2,
}

impl Extents {
    /// Create extents from a lower-left corner and a size.
    pub fn new(pos: Vector2, size: Vector2) -> Self {
        Self { pos, size }
    }

    /// Square extents of `span` units centred on the origin, widened by the
    /// aspect ratio of `viewport_size` so that one unit covers the same number
    /// of pixels on both axes.
    pub fn centered(span: f64, viewport_size: Vector2) -> Self {
        let ratio = viewport_size.x / viewport_size.y;
        let ratio_scale = Vector2::new(ratio, 1.0);
        let half = span * 0.5;
        Self {
            pos: Vector2::scale_vec(Vector2::new(-half, -half), ratio_scale),
            size: Vector2::scale_vec(Vector2::new(span, span), ratio_scale),
        }
    }

    /// Check whether both size components are finite and non-zero.
    pub fn is_valid(&self) -> bool {
        self.pos.is_finite() && self.size.is_finite() && self.size.x != 0.0 && self.size.y != 0.0
    }

    /// Upper-right corner in math units.
    pub fn bottom_right(&self) -> Vector2 {
        self.pos + self.size
    }

    /// Open-interval containment check.
    ///
    /// The upper bound on each axis is the size component, not
    /// [`Extents::bottom_right`]: a point is contained iff
    /// `pos.x < pt.x < size.x` and `pos.y < pt.y < size.y`.
    pub fn contains(&self, pt: Vector2) -> bool {
        in_range(pt.x, self.pos.x, self.size.x) && in_range(pt.y, self.pos.y, self.size.y)
    }

    /// Map a math point into normalized space.
    pub fn map_to_local(&self, global: Vector2) -> Vector2 {
        Vector2::scale_vec(global - self.pos, Vector2::inverse(self.size))
    }

    /// Map a normalized point into math space.
    pub fn map_to_global(&self, local: Vector2) -> Vector2 {
        self.pos + Vector2::scale_vec(local, self.size)
    }

    /// Grid positions along X, from `floor(pos.x)` up to `bottom_right().x`.
    pub fn iter_x(&self, step: f64) -> GridRange {
        GridRange::new(self.pos.x.floor(), self.bottom_right().x, step)
    }

    /// Grid positions along Y, from `floor(pos.y)` up to `bottom_right().y`.
    pub fn iter_y(&self, step: f64) -> GridRange {
        GridRange::new(self.pos.y.floor(), self.bottom_right().y, step)
    }
}

/// Upper limit on the number of steps a [`GridRange`] takes.
pub const MAX_GRID_STEPS: u64 = 65_536;

/// Arithmetic sequence `start, start + step, ...` strictly below `bound`.
///
/// Values are computed as `start + i * step` and are strictly increasing.
/// Steps that round to a value not above the previous one are skipped, and
/// the sequence ends after [`MAX_GRID_STEPS`] steps. Clone the range to
/// restart it. A step that is not finite and positive yields nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRange {
    start: f64,
    bound: f64,
    step: f64,
    index: u64,
    last: Option<f64>,
}

impl GridRange {
    /// Create a range from explicit parameters.
    pub fn new(start: f64, bound: f64, step: f64) -> Self {
        Self {
            start,
            bound,
            step,
            index: 0,
            last: None,
        }
    }

    /// A fresh copy positioned at the start.
    pub fn restarted(&self) -> Self {
        Self::new(self.start, self.bound, self.step)
    }
}

impl Iterator for GridRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if !(self.step.is_finite() && self.step > 0.0) || !self.start.is_finite() {
            return None;
        }
        while self.index < MAX_GRID_STEPS {
            let value = self.start + self.index as f64 * self.step;
            if !(value < self.bound) {
                self.index = MAX_GRID_STEPS;
                return None;
            }
            self.index += 1;
            if self.last.is_some_and(|last| value <= last) {
                continue;
            }
            self.last = Some(value);
            return Some(value);
        }
        None
    }
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value > min && value < max
}
