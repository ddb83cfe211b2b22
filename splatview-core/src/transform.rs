//! Scene placement and per-scene transform presets

use crate::Vector3f;
use serde::{Deserialize, Serialize};

/// Placement of a render object: Euler rotation (radians), position, and a
/// uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub rotation: Vector3f,
    pub position: Vector3f,
    pub scale: f32,
}

impl Pose {
    /// Create an identity pose
    pub fn identity() -> Self {
        Self {
            rotation: Vector3f::zeros(),
            position: Vector3f::zeros(),
            scale: 1.0,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Static per-scene transform: additive rotation and position shifts, a
/// multiplicative uniform scale, and the initial camera distance.
///
/// Supplied once per scene and never mutated. The caller applies it exactly
/// once per materialized object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneTransform {
    pub rotation_shift: Vector3f,
    pub position_shift: Vector3f,
    pub scale_factor: f32,
    pub camera_distance: f32,
}

impl SceneTransform {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            rotation_shift: Vector3f::zeros(),
            position_shift: Vector3f::zeros(),
            scale_factor: 1.0,
            camera_distance: 10.0,
        }
    }

    /// Apply the transform to a pose: shifts are added, scale is multiplied.
    pub fn apply(&self, pose: &mut Pose) {
        pose.rotation += self.rotation_shift;
        pose.position += self.position_shift;
        pose.scale *= self.scale_factor;
    }
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_apply_adds_shifts_and_multiplies_scale() {
        let transform = SceneTransform {
            rotation_shift: Vector3f::new(0.5, 0.0, -0.25),
            position_shift: Vector3f::new(1.0, 2.5, 5.0),
            scale_factor: 2.0,
            camera_distance: 10.0,
        };

        let mut pose = Pose::identity();
        transform.apply(&mut pose);

        assert_relative_eq!(pose.rotation.x, 0.5);
        assert_relative_eq!(pose.rotation.z, -0.25);
        assert_relative_eq!(pose.position.y, 2.5);
        assert_relative_eq!(pose.scale, 2.0);
    }

    #[test]
    fn test_identity_leaves_pose_unchanged() {
        let mut pose = Pose {
            rotation: Vector3f::new(0.1, 0.2, 0.3),
            position: Vector3f::new(1.0, 2.0, 3.0),
            scale: 1.5,
        };
        let before = pose;

        SceneTransform::identity().apply(&mut pose);
        assert_eq!(pose, before);
    }
}
