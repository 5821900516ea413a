//! Host notification pump.
//!
//! Drains the [`HostBridge`] channel, records the reported window size and
//! triggers the matching window event for each notification, in arrival
//! order.

use bevy_ecs::prelude::*;
use log::trace;

use crate::events::window::{DocumentReadyEvent, HostNotification, WindowResizedEvent};
use crate::resources::hostbridge::HostBridge;
use crate::resources::windowsize::WindowSize;

pub fn pump_host_notifications(
    bridge: Res<HostBridge>,
    mut window_size: ResMut<WindowSize>,
    mut commands: Commands,
) {
    for notification in bridge.rx.try_iter() {
        trace!("Host notification: {:?}", notification);
        match notification {
            HostNotification::Resized { width, height } => {
                *window_size = WindowSize::new(width, height);
                commands.trigger(WindowResizedEvent { width, height });
            }
            HostNotification::Ready { width, height } => {
                *window_size = WindowSize::new(width, height);
                commands.trigger(DocumentReadyEvent {});
            }
        }
    }
}
