//! World clock resource.
//!
//! Advanced once per tick by [`update_world_time`](crate::systems::time::update_world_time).
//! Timers compare against `elapsed` instead of accumulating their own deltas,
//! so a timer armed mid-tick never counts time that passed before it existed.

use bevy_ecs::prelude::Resource;
use std::time::Duration;

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldTime {
    /// Total time since the autoscaler was created.
    pub elapsed: Duration,
}
