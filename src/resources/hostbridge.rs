//! Channel between host event handlers and the ECS world.
//!
//! Handlers registered on a [`WindowEventSource`](crate::host::WindowEventSource)
//! hold a clone of [`HostBridge::tx`] and only ever send. The world drains
//! [`HostBridge::rx`] once per tick, so all state changes happen on the tick
//! and in arrival order.

use crate::events::window::HostNotification;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

#[derive(Resource)]
pub struct HostBridge {
    /// Sender for [`HostNotification`] messages (host handlers -> world).
    pub tx: Sender<HostNotification>,
    /// Receiver drained by the notification pump.
    pub rx: Receiver<HostNotification>,
}

/// Create the notification channel and insert the [`HostBridge`] resource.
pub fn setup_host_bridge(world: &mut World) {
    let (tx, rx) = unbounded::<HostNotification>();
    world.insert_resource(HostBridge { tx, rx });
}
