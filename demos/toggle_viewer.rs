//! End-to-end viewer drive: loads the splat view of a scene, toggles to the
//! mesh, then toggles back to the cached splat.
//!
//! Usage: `toggle_viewer [scene] [asset_base]`, with assets laid out as
//! `<asset_base>/<scene>/mesh.ply` and `<asset_base>/<scene>/gs.ply`.

use anyhow::Result;
use splatview_viewer::Viewer;
use std::time::Duration;

fn settle(viewer: &mut Viewer) {
    while viewer.busy() {
        viewer.pump();
        std::thread::sleep(Duration::from_millis(20));
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scene = args.next().unwrap_or_else(|| "garden".to_string());
    let asset_base = args.next().unwrap_or_else(|| "assets".to_string());

    let mut viewer = Viewer::from_preset(&scene, &asset_base)?;

    // Boots into the Gaussian-splat view, like the gallery does.
    viewer.init();
    settle(&mut viewer);
    println!("visible: {}", viewer.controller().visible());

    // First toggle triggers the mesh load.
    viewer.toggle();
    settle(&mut viewer);
    println!("visible: {}", viewer.controller().visible());

    // Second toggle switches instantly; both representations are cached.
    viewer.toggle();
    settle(&mut viewer);
    println!("visible: {}", viewer.controller().visible());

    Ok(())
}
