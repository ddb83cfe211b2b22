//! View-state controller and host plumbing for splatview
//!
//! The controller owns the two renderings of a scene, a polygonal mesh and a
//! Gaussian-splat model, materializes each at most once, and toggles which
//! one is attached to the scene graph. Everything asynchronous is delivered
//! through the host: loader events and one-shot timers are pumped into the
//! controller on a single execution stream.

pub mod camera;
pub mod controller;
pub mod progress;
pub mod scene_graph;
pub mod scenes;
pub mod scheduler;
pub mod viewer;

#[cfg(test)]
mod tests;

pub use camera::*;
pub use controller::*;
pub use progress::*;
pub use scene_graph::*;
pub use scenes::*;
pub use scheduler::*;
pub use viewer::*;
