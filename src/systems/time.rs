//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick.
use bevy_ecs::prelude::*;
use std::time::Duration;

use crate::resources::worldtime::WorldTime;

/// Advance `elapsed` by `dt`.
pub fn update_world_time(world: &mut World, dt: Duration) {
    world.resource_mut::<WorldTime>().elapsed += dt;
}
