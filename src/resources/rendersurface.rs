//! Render surface handle.
//!
//! Wraps the host's [`SurfaceResizer`] so systems and observers can reach it.
//!
//! # Note
//! This is a NonSend resource: host resizers typically hold window or GPU
//! handles that must stay on the main thread.

use crate::host::SurfaceResizer;

/// The host render surface, as seen by the autoscaler.
pub struct RenderSurface {
    resizer: Box<dyn SurfaceResizer>,
}

impl RenderSurface {
    pub fn new(resizer: impl SurfaceResizer + 'static) -> Self {
        Self {
            resizer: Box::new(resizer),
        }
    }

    /// Forward a resize request to the host.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.resizer.resize_surface(width, height);
    }
}
