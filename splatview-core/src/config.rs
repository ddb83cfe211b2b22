//! Per-scene configuration records
//!
//! A `SceneConfig` carries the static numeric presets for one named scene:
//! rotation and position shifts, the uniform scale factor, and the initial
//! camera distance. Records are plain serde data so preset tables can live
//! in configuration files.

use crate::transform::SceneTransform;
use crate::Vector3f;
use serde::{Deserialize, Serialize};

fn default_scale_factor() -> f32 {
    1.0
}

fn default_camera_position_z() -> f32 {
    10.0
}

/// Static configuration for a named scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    #[serde(default)]
    pub rotation_x_shift: f32,
    #[serde(default)]
    pub rotation_y_shift: f32,
    #[serde(default)]
    pub rotation_z_shift: f32,
    #[serde(default)]
    pub position_x_shift: f32,
    #[serde(default)]
    pub position_y_shift: f32,
    #[serde(default)]
    pub position_z_shift: f32,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    #[serde(default = "default_camera_position_z")]
    pub camera_position_z: f32,
}

impl SceneConfig {
    /// Create a config with neutral presets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rotation_x_shift: 0.0,
            rotation_y_shift: 0.0,
            rotation_z_shift: 0.0,
            position_x_shift: 0.0,
            position_y_shift: 0.0,
            position_z_shift: 0.0,
            scale_factor: default_scale_factor(),
            camera_position_z: default_camera_position_z(),
        }
    }

    /// The scene transform described by this record
    pub fn transform(&self) -> SceneTransform {
        SceneTransform {
            rotation_shift: Vector3f::new(
                self.rotation_x_shift,
                self.rotation_y_shift,
                self.rotation_z_shift,
            ),
            position_shift: Vector3f::new(
                self.position_x_shift,
                self.position_y_shift,
                self.position_z_shift,
            ),
            scale_factor: self.scale_factor,
            camera_distance: self.camera_position_z,
        }
    }

    /// Location of the scene's mesh asset under a base location
    pub fn mesh_location(&self, base: &str) -> String {
        format!("{}/{}/mesh.ply", base.trim_end_matches('/'), self.name)
    }

    /// Location of the scene's Gaussian-splat asset under a base location
    pub fn splat_location(&self, base: &str) -> String {
        format!("{}/{}/gs.ply", base.trim_end_matches('/'), self.name)
    }
}
