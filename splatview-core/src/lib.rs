//! Core data structures and traits for splatview
//!
//! This crate provides the data model for a dual-representation scene viewer:
//! scene transforms, triangle meshes, representation handles and states, and
//! the traits through which the view-state controller talks to the wrapped
//! scene graph, loaders, and progress UI.

pub mod config;
pub mod error;
pub mod mesh;
pub mod representation;
pub mod traits;
pub mod transform;

pub use config::*;
pub use error::*;
pub use mesh::*;
pub use representation::*;
pub use traits::*;
pub use transform::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;
