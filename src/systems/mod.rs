//! ECS systems and observers driving the autoscaler.
//!
//! - `autoscale` – target size computation and the resize observer
//! - `hostevents` – drains host notifications into window events
//! - `resizedebounce` – fires the debounce timer
//! - `time` – advances the world clock
pub mod autoscale;
pub mod hostevents;
pub mod resizedebounce;
pub mod time;
