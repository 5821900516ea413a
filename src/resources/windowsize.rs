//! Window size resource.
//!
//! Tracks the host window's inner dimensions in pixels, which usually differ
//! from the render surface size. Updated whenever the host reports a resize or
//! readiness, and read by the autoscaler at the moment a resize is applied.

use bevy_ecs::prelude::Resource;

/// Current window inner size in pixels.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl WindowSize {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// True when either axis is zero (minimized or collapsed window).
    pub fn is_degenerate(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}
