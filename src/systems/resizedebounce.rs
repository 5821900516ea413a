//! Debounce timer system.
//!
//! Checks the [`ResizeDebounce`] deadline against the world clock and
//! requests a resize when it is reached. Must run after
//! [`pump_host_notifications`](crate::systems::hostevents::pump_host_notifications)
//! so a zero delay fires on the tick the notification arrived.

use bevy_ecs::prelude::*;
use log::debug;

use crate::events::window::{ApplyResizeEvent, ResizeCause};
use crate::resources::resizedebounce::ResizeDebounce;
use crate::resources::worldtime::WorldTime;

pub fn update_resize_debounce(
    world_time: Res<WorldTime>,
    mut debounce: ResMut<ResizeDebounce>,
    mut commands: Commands,
) {
    // Avoid flagging the resource as changed every tick while idle.
    if !debounce.is_pending() {
        return;
    }
    if debounce.poll(world_time.elapsed) {
        debug!("Resize timer fired at {:?}", world_time.elapsed);
        commands.trigger(ApplyResizeEvent {
            cause: ResizeCause::Debounced,
        });
    }
}
