//! Smooth in-page scrolling
//!
//! The host measures the page and drives the animation frames; this module
//! only decides where to go and where the viewport should be at each instant.

use folio_core::NavTarget;

/// Request emitted when a navigation link is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NavTarget,
    /// Total animation time, already clamped to sub-second
    pub duration_ms: u32,
    /// Fixed header height kept clear above the section
    pub offset_px: u32,
}

impl ScrollRequest {
    /// Build the animation plan once the host knows the current position and
    /// the target's document offset (`None` for [`NavTarget::Home`] or a
    /// missing element, which both scroll to the top).
    pub fn plan(&self, current_y: f64, target_top: Option<f64>) -> ScrollPlan {
        let destination = match target_top {
            Some(top) => (top - f64::from(self.offset_px)).max(0.0),
            None => 0.0,
        };
        ScrollPlan::new(current_y, destination, self.duration_ms)
    }
}

/// Eased movement from one vertical offset to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPlan {
    from: f64,
    to: f64,
    duration_ms: f64,
}

impl ScrollPlan {
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms: f64::from(duration_ms),
        }
    }

    pub fn destination(&self) -> f64 {
        self.to
    }

    /// Viewport offset `elapsed_ms` after the animation started
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out_quad(progress)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Quadratic ease-in-out over `t` in `[0, 1]`
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
