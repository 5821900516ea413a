//! Seams between the autoscaler and the host engine.
//!
//! The autoscaler never talks to a window or a renderer directly. A host
//! provides:
//!
//! - a [`SurfaceResizer`]: the one outbound capability, "resize the render
//!   surface to (width, height)";
//! - a [`WindowEventSource`]: somewhere to register resize and ready handlers.
//!
//! [`WindowEvents`] is a plain handler registry implementing
//! [`WindowEventSource`]. Hosts keep one around and call
//! [`WindowEvents::emit_resize`] / [`WindowEvents::emit_ready`] from their own
//! event loop; tests drive it by hand.
//!
//! Submodules:
//! - [`parameters`] – the plugin parameter mapping and its loaders
//! - `raylib` – a raylib window host (feature `raylib`)

pub mod parameters;
#[cfg(feature = "raylib")]
pub mod raylib;

use log::debug;

/// Handler receiving the window's current inner `(width, height)`.
pub type WindowHandler = Box<dyn FnMut(u32, u32)>;

/// Outbound host capability: resize the active render surface.
///
/// What happens to the drawn content (clipping, letterboxing, redraw) is up
/// to the host.
pub trait SurfaceResizer {
    fn resize_surface(&mut self, width: u32, height: u32);
}

impl<F> SurfaceResizer for F
where
    F: FnMut(u32, u32),
{
    fn resize_surface(&mut self, width: u32, height: u32) {
        self(width, height)
    }
}

/// Inbound host notifications.
pub trait WindowEventSource {
    /// Register a handler called on every window resize.
    fn on_resize(&mut self, handler: WindowHandler);
    /// Register a handler called once when the host is ready.
    fn on_ready(&mut self, handler: WindowHandler);
}

/// Handler registry driven by the host's event loop.
#[derive(Default)]
pub struct WindowEvents {
    resize_handlers: Vec<WindowHandler>,
    ready_handlers: Vec<WindowHandler>,
    ready_fired: bool,
}

impl WindowEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify every resize handler of the new inner size.
    pub fn emit_resize(&mut self, width: u32, height: u32) {
        for handler in self.resize_handlers.iter_mut() {
            handler(width, height);
        }
    }

    /// Notify every ready handler. Only the first call has an effect.
    pub fn emit_ready(&mut self, width: u32, height: u32) {
        if self.ready_fired {
            debug!("Ready already emitted, ignoring");
            return;
        }
        self.ready_fired = true;
        for handler in self.ready_handlers.iter_mut() {
            handler(width, height);
        }
    }
}

impl WindowEventSource for WindowEvents {
    fn on_resize(&mut self, handler: WindowHandler) {
        self.resize_handlers.push(handler);
    }

    fn on_ready(&mut self, handler: WindowHandler) {
        self.ready_handlers.push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_window_events_dispatch_to_all_handlers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut events = WindowEvents::new();
        for tag in ["a", "b"] {
            let seen = seen.clone();
            events.on_resize(Box::new(move |w, h| seen.borrow_mut().push((tag, w, h))));
        }

        events.emit_resize(640, 480);

        assert_eq!(*seen.borrow(), vec![("a", 640, 480), ("b", 640, 480)]);
    }

    #[test]
    fn test_ready_fires_once() {
        let count = Rc::new(RefCell::new(0));
        let mut events = WindowEvents::new();
        {
            let count = count.clone();
            events.on_ready(Box::new(move |_, _| *count.borrow_mut() += 1));
        }

        events.emit_ready(800, 600);
        events.emit_ready(800, 600);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_closure_is_a_surface_resizer() {
        let mut applied = Vec::new();
        {
            let mut resizer = |w: u32, h: u32| applied.push((w, h));
            resizer.resize_surface(10, 20);
        }
        assert_eq!(applied, vec![(10, 20)]);
    }
}
