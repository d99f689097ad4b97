use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::frame::FrameClock;
use crate::geom::Vector2;

#[derive(Debug, Clone, Default)]
pub(crate) struct PlaneUiState {
    pub(crate) clock: FrameClock,
    pub(crate) last_cursor: Option<Vector2>,
}

impl PlaneUiState {
    /// Record the cursor and return the movement since the previous event.
    pub(crate) fn cursor_delta(&mut self, pos: Vector2) -> Option<Vector2> {
        let delta = self.last_cursor.map(|last| pos - last);
        self.last_cursor = Some(pos);
        delta
    }
}

/// Acquire a read guard, recovering the data if a previous holder panicked.
pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| {
        tracing::warn!("recovering poisoned lock");
        poisoned.into_inner()
    })
}

/// Acquire a write guard, recovering the data if a previous holder panicked.
pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| {
        tracing::warn!("recovering poisoned lock");
        poisoned.into_inner()
    })
}
