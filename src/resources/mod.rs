//! ECS resources held by the autoscaler world.
//!
//! Overview
//! - `autoscaleconfig` – base resolution, aspect flag and debounce delay
//! - `hostbridge` – channel carrying host notifications into the world
//! - `rendersurface` – the host's surface resizer (non-send)
//! - `resizedebounce` – single-slot debounce timer
//! - `surfacesize` – last size applied to the render surface
//! - `windowsize` – last window inner size reported by the host
//! - `worldtime` – tick clock
pub mod autoscaleconfig;
pub mod hostbridge;
pub mod rendersurface;
pub mod resizedebounce;
pub mod surfacesize;
pub mod windowsize;
pub mod worldtime;
