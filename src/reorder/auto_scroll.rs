//! Edge auto-scroll while dragging.

use super::host::{IntervalTimer, TimerHandle};
use crate::config::ReorderConfig;

/// Compute the auto-scroll step for a pointer position.
///
/// Returns a positive increment when the pointer is within the proximity
/// cutoff of the right edge, a negative one near the left edge, and `None`
/// when auto-scroll should stop. The step grows linearly from 0 at the cutoff
/// to `speed_factor` at the edge itself.
pub fn edge_increment(
    config: &ReorderConfig,
    latest_x: f64,
    grid_left: f64,
    width: f64,
    viewport_width: f64,
) -> Option<f64> {
    let cutoff = config.proximity_cutoff(viewport_width);
    let right_proximity = (grid_left + width - latest_x).max(0.0);
    if right_proximity < cutoff {
        let weight = cutoff - right_proximity;
        return Some(weight / cutoff * config.speed_factor);
    }
    let left_proximity = (latest_x - grid_left).max(0.0);
    if left_proximity < cutoff {
        let weight = -(cutoff - left_proximity);
        return Some(weight / cutoff * config.speed_factor);
    }
    None
}

/// Owner of the auto-scroll timer.
///
/// At most one timer handle exists at a time; the driver is running exactly
/// when it holds one.
#[derive(Debug, Default)]
pub struct AutoScrollDriver {
    handle: Option<TimerHandle>,
}

impl AutoScrollDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start ticking `tick` every `period_ms`. No-op if already running.
    ///
    /// Returns `true` if a new timer was scheduled.
    pub fn start(
        &mut self,
        timer: &dyn IntervalTimer,
        period_ms: u32,
        tick: impl FnMut() + 'static,
    ) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = timer.set_interval(period_ms, Box::new(tick));
        if self.handle.is_some() {
            tracing::debug!(period_ms, "auto-scroll started");
        }
        self.handle.is_some()
    }

    /// Cancel the timer. Safe to call when not running.
    pub fn stop(&mut self, timer: &dyn IntervalTimer) {
        if let Some(handle) = self.handle.take() {
            timer.clear_interval(handle);
            tracing::debug!("auto-scroll stopped");
        }
    }
}
