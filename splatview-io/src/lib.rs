//! Concrete loaders for splatview
//!
//! This crate provides the file-backed implementations of the loader seams:
//! a PLY mesh loader that reports byte progress while it reads, and a splat
//! constructor that validates the header and defers the payload to the
//! wrapped splat renderer.

pub mod mesh_loader;
pub mod ply;
pub mod splat;

pub use mesh_loader::*;
pub use ply::*;
pub use splat::*;
