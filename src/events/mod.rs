//! Event types and observers used by the autoscaler.
//!
//! Submodules:
//! - [`window`] – host notifications, window events and their observers
pub mod window;
