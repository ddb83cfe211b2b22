//! Built-in per-scene presets
//!
//! One record per scene of the original gallery. The offsets re-orient each
//! reconstruction into the viewer's frame; they were tuned by hand, per
//! scene, and are treated as opaque constants here.

use splatview_core::SceneConfig;
use std::f32::consts::PI;

/// Names of all built-in scenes
pub const SCENE_NAMES: [&str; 9] = [
    "shinegrey0",
    "risingfreedom1",
    "garden",
    "bicycle",
    "stump",
    "knight",
    "buzz",
    "ignatius",
    "kitchen",
];

/// Look up a built-in scene preset by name
pub fn preset(name: &str) -> Option<SceneConfig> {
    let config = match name {
        "shinegrey0" => SceneConfig {
            rotation_x_shift: PI * 0.9,
            position_y_shift: 2.5,
            position_z_shift: 5.0,
            scale_factor: 2.0,
            camera_position_z: 10.0,
            ..SceneConfig::new("shinegrey0")
        },
        "risingfreedom1" => SceneConfig {
            rotation_x_shift: PI,
            position_x_shift: -0.5,
            position_y_shift: 2.5,
            position_z_shift: 5.0,
            scale_factor: 2.0,
            camera_position_z: 6.0,
            ..SceneConfig::new("risingfreedom1")
        },
        "garden" => SceneConfig {
            rotation_x_shift: PI,
            position_x_shift: -1.0,
            position_y_shift: 3.5,
            position_z_shift: 5.0,
            scale_factor: 2.0,
            camera_position_z: 10.0,
            ..SceneConfig::new("garden")
        },
        "bicycle" => SceneConfig {
            rotation_x_shift: PI * 1.1,
            rotation_y_shift: PI * -0.5,
            position_x_shift: 1.0,
            position_y_shift: 1.5,
            position_z_shift: 4.0,
            scale_factor: 2.0,
            camera_position_z: 8.0,
            ..SceneConfig::new("bicycle")
        },
        "stump" => SceneConfig {
            rotation_x_shift: PI * 0.85,
            position_y_shift: 4.0,
            position_z_shift: 3.0,
            scale_factor: 2.0,
            camera_position_z: 7.0,
            ..SceneConfig::new("stump")
        },
        "knight" => SceneConfig {
            rotation_x_shift: PI,
            position_x_shift: -1.0,
            position_y_shift: 2.5,
            position_z_shift: 3.0,
            scale_factor: 2.0,
            camera_position_z: 5.0,
            ..SceneConfig::new("knight")
        },
        "buzz" => SceneConfig {
            rotation_x_shift: PI * 1.1,
            rotation_y_shift: -PI * 0.1,
            rotation_z_shift: PI * 0.05,
            position_x_shift: -1.0,
            position_y_shift: 2.5,
            position_z_shift: 4.0,
            scale_factor: 2.0,
            camera_position_z: 5.0,
            ..SceneConfig::new("buzz")
        },
        "ignatius" => SceneConfig {
            rotation_x_shift: PI * 1.05,
            rotation_y_shift: PI * -0.1,
            position_x_shift: -1.0,
            position_y_shift: 0.5,
            position_z_shift: 3.0,
            scale_factor: 2.0,
            camera_position_z: 8.0,
            ..SceneConfig::new("ignatius")
        },
        "kitchen" => SceneConfig {
            rotation_x_shift: PI * 1.02,
            position_x_shift: 0.5,
            position_y_shift: 3.0,
            position_z_shift: 2.0,
            scale_factor: 2.0,
            camera_position_z: 4.0,
            ..SceneConfig::new("kitchen")
        },
        _ => return None,
    };
    Some(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_every_name_has_a_preset() {
        for name in SCENE_NAMES {
            let config = preset(name).unwrap();
            assert_eq!(config.name, name);
        }
    }

    #[test]
    fn test_unknown_scene_has_none() {
        assert!(preset("attic").is_none());
    }

    #[test]
    fn test_garden_preset_values() {
        let garden = preset("garden").unwrap();
        assert_relative_eq!(garden.rotation_x_shift, PI);
        assert_relative_eq!(garden.position_x_shift, -1.0);
        assert_relative_eq!(garden.scale_factor, 2.0);
        assert_relative_eq!(garden.camera_position_z, 10.0);
    }
}
