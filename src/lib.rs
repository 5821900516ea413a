//! Dynamic resize library.
//!
//! Keeps a game's render surface fitted to its window: listens for window
//! resize notifications, debounces them, and resizes the surface to the window
//! size, optionally preserving the design aspect ratio.
//!
//! - [`autoscaler`] – the [`Autoscaler`](autoscaler::Autoscaler) runtime
//! - [`events`] – window notifications and observers
//! - [`host`] – traits and helpers a host engine implements or drives
//! - [`resources`] – ECS resources (configuration, sizes, timer)
//! - [`systems`] – ECS systems (notification pump, timer, surface fitting)

pub mod autoscaler;
pub mod events;
pub mod host;
pub mod resources;
pub mod systems;
