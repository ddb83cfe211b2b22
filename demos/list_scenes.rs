//! Prints the built-in scene presets and their camera placement.

use anyhow::Result;
use splatview_viewer::{preset, Camera, SCENE_NAMES};

fn main() -> Result<()> {
    env_logger::init();

    for name in SCENE_NAMES {
        let config = preset(name).expect("built-in preset");
        let transform = config.transform();
        let camera = Camera::for_scene(&transform, 16.0 / 9.0);

        println!(
            "{:<16} scale {:>4.1}  camera z {:>5.1}  rotation x {:>6.3} rad",
            config.name, transform.scale_factor, camera.position.z, transform.rotation_shift.x,
        );
    }

    Ok(())
}
