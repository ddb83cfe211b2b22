//! Camera placement for a scene
//!
//! Only the initial placement is owned here: the camera starts on the z
//! axis at the scene's configured distance, looking at the origin. Orbit
//! interaction belongs to the wrapped camera controller.

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};
use splatview_core::SceneTransform;

const DEFAULT_FOV: f32 = 75.0 * std::f32::consts::PI / 180.0;
const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 1000.0;

/// A perspective camera for viewing a scene
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Initial placement for a scene: on the z axis at the configured
    /// distance, looking at the origin.
    pub fn for_scene(transform: &SceneTransform, aspect_ratio: f32) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, transform.camera_distance),
            target: Point3::origin(),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: DEFAULT_FOV,
            aspect_ratio,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let perspective = Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far);
        perspective.into_inner()
    }
}
