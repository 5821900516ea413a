//! Window notifications and the events they turn into.
//!
//! Host handlers cannot touch the ECS world, so they push a
//! [`HostNotification`] onto the [`HostBridge`](crate::resources::hostbridge::HostBridge)
//! channel. Once per tick
//! [`pump_host_notifications`](crate::systems::hostevents::pump_host_notifications)
//! drains the channel and triggers:
//!
//! - [`WindowResizedEvent`] – handled by [`window_resized_observer`], which
//!   (re)arms the debounce timer;
//! - [`DocumentReadyEvent`] – handled by [`document_ready_observer`], which
//!   requests an immediate resize.
//!
//! Both paths end in an [`ApplyResizeEvent`], handled by
//! [`apply_resize_observer`](crate::systems::autoscale::apply_resize_observer).

use crate::resources::resizedebounce::ResizeDebounce;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Message sent from host handlers to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostNotification {
    /// The window was resized; carries the new inner size.
    Resized { width: u32, height: u32 },
    /// The host finished loading; carries the inner size at that moment.
    Ready { width: u32, height: u32 },
}

/// The host window changed size. `WindowSize` is already updated.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResizedEvent {
    pub width: u32,
    pub height: u32,
}

/// The host is ready. Fires once.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentReadyEvent {}

/// Why a resize is being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeCause {
    /// Initial fit on host readiness.
    Ready,
    /// The debounce timer fired after a burst of resizes.
    Debounced,
}

/// Request to recompute the surface size from the current window size and
/// hand it to the host.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyResizeEvent {
    pub cause: ResizeCause,
}

/// Cancel any pending resize and schedule a new one `delay` from now.
pub fn window_resized_observer(
    trigger: On<WindowResizedEvent>,
    world_time: Res<WorldTime>,
    mut debounce: ResMut<ResizeDebounce>,
) {
    let event = trigger.event();
    let replaced = debounce.schedule(world_time.elapsed);
    debug!(
        "Window resized to {}x{}, resize scheduled in {}ms{}",
        event.width,
        event.height,
        debounce.delay().as_millis(),
        if replaced { " (superseded pending)" } else { "" }
    );
}

/// Request an immediate resize. Leaves the debounce timer untouched.
pub fn document_ready_observer(_trigger: On<DocumentReadyEvent>, mut commands: Commands) {
    debug!("Host ready, applying initial resize");
    commands.trigger(ApplyResizeEvent {
        cause: ResizeCause::Ready,
    });
}
