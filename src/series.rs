//! Plotted functions and their registry.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::PlotError;
use crate::render::{Color, LineStyle};

static PLOT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a plotted function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlotId(u64);

impl PlotId {
    fn next() -> Self {
        Self(PLOT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

type Evaluate = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A function `y = f(x)` drawn over the plane.
///
/// The function should be pure; it is sampled once per pixel column on
/// every frame.
#[derive(Clone)]
pub struct PlotFunction {
    id: PlotId,
    name: String,
    evaluate: Evaluate,
    color: Color,
    visible: bool,
}

impl PlotFunction {
    /// Create a plot drawn in `color`.
    pub fn new(
        name: impl Into<String>,
        color: Color,
        evaluate: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: PlotId::next(),
            name: name.into(),
            evaluate: Arc::new(evaluate),
            color,
            visible: true,
        }
    }

    /// Create a plot from a CSS-style color string such as `"blue"`.
    pub fn with_style(
        name: impl Into<String>,
        style: &str,
        evaluate: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Result<Self, PlotError> {
        Ok(Self::new(name, Color::parse(style)?, evaluate))
    }

    /// Access the plot identifier.
    pub fn id(&self) -> PlotId {
        self.id
    }

    /// Access the plot name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stroke style for the given line width.
    pub fn line_style(&self, width: f32) -> LineStyle {
        LineStyle::new(self.color, width)
    }

    /// Evaluate the function at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.evaluate)(x)
    }

    /// Check if the plot is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Toggle plot visibility.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl std::fmt::Debug for PlotFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotFunction")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("color", &self.color)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of plots. Rendering follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct PlotRegistry {
    plots: Vec<PlotFunction>,
}

impl PlotRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plot and return its identifier.
    pub fn add(&mut self, plot: PlotFunction) -> PlotId {
        let id = plot.id();
        tracing::debug!(?id, name = plot.name(), "plot registered");
        self.plots.push(plot);
        id
    }

    /// Remove a plot, keeping the order of the rest.
    pub fn remove(&mut self, id: PlotId) -> Option<PlotFunction> {
        let index = self.plots.iter().position(|plot| plot.id() == id)?;
        Some(self.plots.remove(index))
    }

    /// Find a plot by identifier.
    pub fn get(&self, id: PlotId) -> Option<&PlotFunction> {
        self.plots.iter().find(|plot| plot.id() == id)
    }

    /// Find a plot by identifier, mutably.
    pub fn get_mut(&mut self, id: PlotId) -> Option<&mut PlotFunction> {
        self.plots.iter_mut().find(|plot| plot.id() == id)
    }

    /// Iterate over plots in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlotFunction> {
        self.plots.iter()
    }

    /// Number of registered plots.
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    /// Check whether no plots are registered.
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlotRegistry {
    type Item = &'a PlotFunction;
    type IntoIter = std::slice::Iter<'a, PlotFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
