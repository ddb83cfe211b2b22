//! Viewer facade
//!
//! Wires a [`ViewStateController`] from a scene configuration and the
//! file-backed loaders, and pumps the host side: due timers and queued
//! loader events are delivered into the controller on each `pump`.

use crate::camera::Camera;
use crate::controller::ViewStateController;
use crate::progress::ConsoleProgress;
use crate::scene_graph::BasicSceneGraph;
use crate::scenes;
use crate::scheduler::TimerQueue;
use instant::Instant;
use splatview_core::{Error, MeshEventQueue, RepKind, Result, SceneConfig};
use splatview_io::{FileMeshLoader, FileSplatLoader};

const DEFAULT_ASPECT_RATIO: f32 = 16.0 / 9.0;

/// A viewer for one scene: controller, camera, and the host plumbing
pub struct Viewer {
    controller: ViewStateController,
    timers: TimerQueue,
    mesh_events: MeshEventQueue,
    camera: Camera,
}

impl Viewer {
    /// Build a viewer for a scene configuration, loading assets from
    /// `<asset_base>/<scene>/{mesh.ply,gs.ply}`.
    pub fn from_scene(config: &SceneConfig, asset_base: &str) -> Self {
        let timers = TimerQueue::new();
        let mesh_loader = FileMeshLoader::new();
        let mesh_events = mesh_loader.events();
        let transform = config.transform();

        let controller = ViewStateController::new(
            Box::new(BasicSceneGraph::new()),
            Box::new(ConsoleProgress::new()),
            Box::new(mesh_loader),
            Box::new(FileSplatLoader::new()),
            Box::new(timers.clone()),
            transform,
            config.mesh_location(asset_base),
            config.splat_location(asset_base),
        );
        let camera = Camera::for_scene(&transform, DEFAULT_ASPECT_RATIO);

        log::info!("viewer initialized for scene: {}", config.name);

        Self {
            controller,
            timers,
            mesh_events,
            camera,
        }
    }

    /// Build a viewer for a built-in scene preset
    pub fn from_preset(name: &str, asset_base: &str) -> Result<Self> {
        let config =
            scenes::preset(name).ok_or_else(|| Error::UnknownScene(name.to_string()))?;
        Ok(Self::from_scene(&config, asset_base))
    }

    /// Start on the Gaussian-splat view
    pub fn init(&mut self) {
        self.controller.request_show(RepKind::Splat);
    }

    /// Switch between the mesh and splat views
    pub fn toggle(&mut self) {
        self.controller.toggle();
    }

    /// Deliver due timers and queued loader events into the controller
    pub fn pump(&mut self) {
        for timer in self.timers.poll_due(Instant::now()) {
            self.controller.on_timer(timer);
        }
        for event in self.mesh_events.drain() {
            self.controller.on_mesh_event(event);
        }
    }

    /// Whether a load is in flight or timers are still pending
    pub fn busy(&self) -> bool {
        self.controller.is_loading() || self.timers.pending_count() > 0
    }

    pub fn controller(&self) -> &ViewStateController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ViewStateController {
        &mut self.controller
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}
