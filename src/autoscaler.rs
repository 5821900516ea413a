//! The viewport autoscaler.
//!
//! [`Autoscaler`] owns an ECS [`World`] holding the configuration, window and
//! surface sizes, the debounce timer and the host's render surface, plus the
//! per-tick [`Schedule`]. The host constructs exactly one, attaches it to its
//! window event source and calls [`Autoscaler::tick`] once per frame.
//!
//! # Tick
//!
//! 1. Advance [`WorldTime`] by the frame delta
//! 2. `pump_host_notifications` drains queued notifications:
//!    - resize: update [`WindowSize`], re-arm the debounce timer
//!    - ready: update [`WindowSize`], resize the surface immediately
//! 3. `update_resize_debounce` fires the timer once its deadline is reached,
//!    resizing the surface from the window size current at that moment
//!
//! # Example
//!
//! ```
//! use dynamicresize::autoscaler::Autoscaler;
//! use dynamicresize::host::WindowEvents;
//! use dynamicresize::resources::autoscaleconfig::AutoscaleConfig;
//! use std::time::Duration;
//!
//! let mut window = WindowEvents::new();
//! let mut autoscaler = Autoscaler::new(AutoscaleConfig::new(), |w: u32, h: u32| {
//!     println!("resize surface to {w}x{h}");
//! });
//! autoscaler.attach(&mut window);
//!
//! window.emit_ready(1920, 1080);
//! autoscaler.tick(Duration::ZERO);
//! assert_eq!(autoscaler.surface_size(), Some((1412, 1080)));
//! ```

use bevy_ecs::prelude::*;
use log::{debug, trace, warn};
use std::time::Duration;

use crate::events::window::{
    HostNotification, document_ready_observer, window_resized_observer,
};
use crate::host::{SurfaceResizer, WindowEventSource};
use crate::resources::autoscaleconfig::AutoscaleConfig;
use crate::resources::hostbridge::{HostBridge, setup_host_bridge};
use crate::resources::rendersurface::RenderSurface;
use crate::resources::resizedebounce::ResizeDebounce;
use crate::resources::surfacesize::SurfaceSize;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::autoscale::apply_resize_observer;
use crate::systems::hostevents::pump_host_notifications;
use crate::systems::resizedebounce::update_resize_debounce;
use crate::systems::time::update_world_time;

pub struct Autoscaler {
    world: World,
    schedule: Schedule,
    attached: bool,
}

impl Autoscaler {
    /// Build the autoscaler world around `config` and the host's resizer.
    pub fn new(config: AutoscaleConfig, resizer: impl SurfaceResizer + 'static) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(WindowSize::default());
        world.insert_resource(SurfaceSize::default());
        world.insert_resource(ResizeDebounce::new(config.resize_delay));
        world.insert_resource(config);
        world.insert_non_send_resource(RenderSurface::new(resizer));
        setup_host_bridge(&mut world);

        world.add_observer(window_resized_observer);
        world.add_observer(document_ready_observer);
        world.add_observer(apply_resize_observer);
        // Ensure the observers are registered before any notification is pumped.
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems(pump_host_notifications);
        schedule.add_systems(update_resize_debounce.after(pump_host_notifications));

        debug!(
            "Autoscaler ready: base {}x{}, maintain_aspect={}, delay={}ms",
            config.base_width,
            config.base_height,
            config.maintain_aspect,
            config.resize_delay.as_millis()
        );

        Self {
            world,
            schedule,
            attached: false,
        }
    }

    /// Subscribe to the host's resize and ready notifications.
    ///
    /// Handlers only queue the notification; it is processed on the next
    /// [`tick`](Self::tick). Only the first call subscribes; later calls are
    /// ignored so one notification never resizes the surface twice.
    pub fn attach(&mut self, source: &mut dyn WindowEventSource) {
        if self.attached {
            warn!("Autoscaler already attached to a window event source, ignoring");
            return;
        }
        self.attached = true;

        let tx = self.world.resource::<HostBridge>().tx.clone();
        source.on_resize(Box::new(move |width, height| {
            trace!("Queue resize {}x{}", width, height);
            // Ignore send errors once the autoscaler is gone.
            let _ = tx.send(HostNotification::Resized { width, height });
        }));

        let tx = self.world.resource::<HostBridge>().tx.clone();
        source.on_ready(Box::new(move |width, height| {
            trace!("Queue ready {}x{}", width, height);
            let _ = tx.send(HostNotification::Ready { width, height });
        }));
    }

    /// Advance the clock by `dt` and process everything that became due.
    pub fn tick(&mut self, dt: Duration) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    pub fn config(&self) -> AutoscaleConfig {
        *self.world.resource::<AutoscaleConfig>()
    }

    /// Last window size reported by the host.
    pub fn window_size(&self) -> WindowSize {
        *self.world.resource::<WindowSize>()
    }

    /// Last size handed to the host's resizer.
    pub fn surface_size(&self) -> Option<(u32, u32)> {
        self.world.resource::<SurfaceSize>().get()
    }

    /// True while a debounced resize is scheduled.
    pub fn is_pending(&self) -> bool {
        self.world.resource::<ResizeDebounce>().is_pending()
    }

    /// Time since construction, as seen by the timers.
    pub fn elapsed(&self) -> Duration {
        self.world.resource::<WorldTime>().elapsed
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
