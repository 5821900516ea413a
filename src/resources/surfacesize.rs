//! Surface size resource.
//!
//! Stores the render surface dimensions most recently handed to the host's
//! [`SurfaceResizer`](crate::host::SurfaceResizer). `None` until the first
//! resize is applied.

use bevy_ecs::prelude::Resource;

/// Last applied render surface size in pixels.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize(pub Option<(u32, u32)>);

impl SurfaceSize {
    /// Last applied `(width, height)`, if any.
    pub fn get(&self) -> Option<(u32, u32)> {
        self.0
    }
}
