//! Dual-representation view-state controller
//!
//! Mediates between a caller's intent ("show mesh", "show splat", "toggle")
//! and the scene graph plus loaders. Each representation is materialized at
//! most once, the scene transform is applied exactly once per object, and at
//! most one representation is attached to the scene graph at any instant.
//!
//! Loads are fire-and-forget: `request_show` returns immediately and the
//! host delivers loader events and timer firings back into the controller.

use rand::{rngs::StdRng, Rng, SeedableRng};
use splatview_core::{
    Error, MeshLoadEvent, MeshLoader, MeshObject, ObjectId, Pose, ProgressSink, RenderObject, RepKind,
    RepState, SceneGraph, SceneTransform, Scheduler, ShadingMode, SplatLoader, SplatModel,
    SplatObject, TimerId, TriangleMesh,
};
use std::time::Duration;

/// Share of the bar covered by byte progress; the rest is reserved for
/// post-processing (normals, shading) before 100 is emitted.
pub const MESH_BYTE_PORTION: f32 = 85.0;

/// Synthetic splat progress never exceeds this before the settle timer fires.
pub const SPLAT_PROGRESS_CAP: f32 = 80.0;

/// Emitted right before the transform is applied.
const PROCESSING_PCT: f32 = 90.0;

/// Polling interval for synthetic splat progress.
pub const SPLAT_TICK_INTERVAL: Duration = Duration::from_millis(150);

/// How long the splat renderer is given to settle before the model counts
/// as loaded. Completion is timer-driven, not I/O-driven.
pub const SPLAT_SETTLE_DELAY: Duration = Duration::from_millis(3000);

/// How long an error message stays visible.
pub const ERROR_DISPLAY_DELAY: Duration = Duration::from_secs(3);

const MESH_LOADING_LABEL: &str = "Generating mesh...";
const SPLAT_LOADING_LABEL: &str = "Loading Gaussians...";

#[derive(Debug, Default)]
struct Slot {
    state: RepState,
    object: Option<RenderObject>,
}

/// The view-state controller; see the module docs.
pub struct ViewStateController {
    scene: Box<dyn SceneGraph>,
    progress: Box<dyn ProgressSink>,
    mesh_loader: Box<dyn MeshLoader>,
    splat_loader: Box<dyn SplatLoader>,
    scheduler: Box<dyn Scheduler>,

    transform: SceneTransform,
    mesh_location: String,
    splat_location: String,

    mesh_slot: Slot,
    splat_slot: Slot,
    /// Which representation is considered shown. Starts at `Splat`: the
    /// viewer boots into the Gaussian-splat view.
    visible: RepKind,

    /// Highest percentage emitted for the load in flight; emissions are
    /// clamped so the progress sink only ever sees a non-decreasing run.
    last_pct: f32,

    pending_splat: Option<SplatModel>,
    splat_pct: f32,
    splat_tick: Option<TimerId>,
    splat_settle: Option<TimerId>,
    error_hide: Option<TimerId>,

    rng: StdRng,
    next_object_id: u64,
}

impl ViewStateController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        scene: Box<dyn SceneGraph>,
        progress: Box<dyn ProgressSink>,
        mesh_loader: Box<dyn MeshLoader>,
        splat_loader: Box<dyn SplatLoader>,
        scheduler: Box<dyn Scheduler>,
        transform: SceneTransform,
        mesh_location: String,
        splat_location: String,
    ) -> Self {
        Self {
            scene,
            progress,
            mesh_loader,
            splat_loader,
            scheduler,
            transform,
            mesh_location,
            splat_location,
            mesh_slot: Slot::default(),
            splat_slot: Slot::default(),
            visible: RepKind::Splat,
            last_pct: 0.0,
            pending_splat: None,
            splat_pct: 0.0,
            splat_tick: None,
            splat_settle: None,
            error_hide: None,
            rng: StdRng::from_entropy(),
            next_object_id: 0,
        }
    }

    /// Seed the synthetic-progress RNG, for reproducible runs
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Which representation is currently shown
    pub fn visible(&self) -> RepKind {
        self.visible
    }

    /// Load state of a representation slot
    pub fn state(&self, kind: RepKind) -> RepState {
        self.slot(kind).state
    }

    /// Whether a representation has been materialized
    pub fn is_loaded(&self, kind: RepKind) -> bool {
        self.slot(kind).state == RepState::Loaded
    }

    /// The materialized object for a representation, if any
    pub fn object(&self, kind: RepKind) -> Option<&RenderObject> {
        self.slot(kind).object.as_ref()
    }

    /// Whether a load is currently in flight
    pub fn is_loading(&self) -> bool {
        self.mesh_slot.state == RepState::Loading || self.splat_slot.state == RepState::Loading
    }

    /// Show a representation, loading it first if it was never materialized.
    ///
    /// Idempotent; a request for a kind whose load is already in flight is
    /// ignored rather than triggering a redundant second load.
    pub fn request_show(&mut self, kind: RepKind) {
        match self.slot(kind).state {
            RepState::Loading => {
                log::debug!("{kind} load already in flight, ignoring request");
            }
            RepState::Loaded => self.show(kind),
            RepState::Unloaded => match kind {
                RepKind::Mesh => self.begin_mesh_load(),
                RepKind::Splat => self.begin_splat_load(),
            },
        }
    }

    /// Switch to the representation not currently shown
    pub fn toggle(&mut self) {
        self.request_show(self.visible.other());
    }

    /// Detach both representations from the scene graph. Cached objects
    /// stay cached; a later `request_show` re-attaches without reloading.
    pub fn clear_all(&mut self) {
        if let Some(object) = &self.mesh_slot.object {
            self.scene.detach(object.id());
        }
        if let Some(object) = &self.splat_slot.object {
            self.scene.detach(object.id());
        }
    }

    /// Deliver a mesh loader event. Events arriving outside a mesh load
    /// are stale and ignored.
    pub fn on_mesh_event(&mut self, event: MeshLoadEvent) {
        if self.mesh_slot.state != RepState::Loading {
            log::debug!("ignoring mesh loader event outside of a load");
            return;
        }
        match event {
            MeshLoadEvent::Progress { loaded, total } => {
                if let Some(total) = total.filter(|&total| total > 0) {
                    // Byte progress never crosses into the post-processing
                    // range, even when a loader over-reports `loaded`.
                    let pct =
                        ((loaded as f32 / total as f32) * MESH_BYTE_PORTION).min(MESH_BYTE_PORTION);
                    self.emit_progress(pct);
                }
            }
            MeshLoadEvent::Finished(geometry) => self.finish_mesh(geometry),
            MeshLoadEvent::Failed(message) => self.fail(RepKind::Mesh, &message),
        }
    }

    /// Deliver a timer firing. Unknown or cancelled ids are ignored.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.splat_tick == Some(id) {
            self.splat_tick = None;
            self.on_splat_tick();
        } else if self.splat_settle == Some(id) {
            self.splat_settle = None;
            self.finish_splat();
        } else if self.error_hide == Some(id) {
            self.error_hide = None;
            self.progress.hide_progress();
        } else {
            log::debug!("ignoring stale timer {id:?}");
        }
    }

    fn slot(&self, kind: RepKind) -> &Slot {
        match kind {
            RepKind::Mesh => &self.mesh_slot,
            RepKind::Splat => &self.splat_slot,
        }
    }

    /// Detach the other representation, attach this one, mark it visible.
    /// Clears first so no intermediate state can leave both attached.
    fn show(&mut self, kind: RepKind) {
        self.clear_all();
        let object = match kind {
            RepKind::Mesh => self.mesh_slot.object.as_ref(),
            RepKind::Splat => self.splat_slot.object.as_ref(),
        };
        if let Some(object) = object {
            self.scene.attach(object);
        }
        self.visible = kind;
        log::info!("showing {kind}");
    }

    fn begin_mesh_load(&mut self) {
        self.cancel_error_hide();
        self.mesh_slot.state = RepState::Loading;
        self.last_pct = 0.0;
        self.progress.show_progress(MESH_LOADING_LABEL, 0.0);

        let location = self.mesh_location.clone();
        self.mesh_loader.begin(&location);
    }

    fn finish_mesh(&mut self, mut geometry: TriangleMesh) {
        self.emit_progress(PROCESSING_PCT);

        if !geometry.has_normals() {
            geometry.compute_vertex_normals();
        }
        let shading = if geometry.has_colors() {
            ShadingMode::VertexColor
        } else {
            ShadingMode::Uniform
        };

        let mut pose = Pose::identity();
        self.transform.apply(&mut pose);

        let object = RenderObject::Mesh(MeshObject {
            id: self.alloc_object_id(),
            mesh: geometry,
            shading,
            pose,
        });
        self.mesh_slot.object = Some(object);
        self.mesh_slot.state = RepState::Loaded;

        self.emit_progress(100.0);
        self.show(RepKind::Mesh);
        self.progress.hide_progress();
        log::info!("mesh loaded and cached");
    }

    fn begin_splat_load(&mut self) {
        self.cancel_error_hide();
        self.progress.show_progress(SPLAT_LOADING_LABEL, 0.0);

        let location = self.splat_location.clone();
        match self.splat_loader.construct(&location) {
            Ok(model) => {
                self.splat_slot.state = RepState::Loading;
                self.pending_splat = Some(model);
                self.last_pct = 0.0;
                self.splat_pct = 0.0;
                self.splat_tick = Some(self.scheduler.schedule(SPLAT_TICK_INTERVAL));
                self.splat_settle = Some(self.scheduler.schedule(SPLAT_SETTLE_DELAY));
            }
            Err(err) => self.fail(RepKind::Splat, &err.to_string()),
        }
    }

    fn on_splat_tick(&mut self) {
        if self.splat_slot.state != RepState::Loading {
            return;
        }
        let increment: f32 = self.rng.gen_range(5.0..15.0);
        self.splat_pct = (self.splat_pct + increment).min(SPLAT_PROGRESS_CAP);
        self.emit_progress(self.splat_pct);
        self.splat_tick = Some(self.scheduler.schedule(SPLAT_TICK_INTERVAL));
    }

    fn finish_splat(&mut self) {
        if let Some(tick) = self.splat_tick.take() {
            self.scheduler.cancel(tick);
        }
        let Some(model) = self.pending_splat.take() else {
            return;
        };

        self.emit_progress(PROCESSING_PCT);

        let mut pose = Pose::identity();
        self.transform.apply(&mut pose);

        let object = RenderObject::Splat(SplatObject {
            id: self.alloc_object_id(),
            model,
            pose,
        });
        self.splat_slot.object = Some(object);
        self.splat_slot.state = RepState::Loaded;

        self.emit_progress(100.0);
        self.show(RepKind::Splat);
        self.progress.hide_progress();
        log::info!("gaussian splat loaded and cached");
    }

    /// The one error path: the failed slot falls back to `Unloaded`, the
    /// message reaches the progress sink, and whatever was visible before
    /// stays visible. Retry is a fresh `request_show`.
    fn fail(&mut self, kind: RepKind, cause: &str) {
        log::error!("failed to load {kind}: {cause}");
        match kind {
            RepKind::Mesh => {
                self.mesh_slot.state = RepState::Unloaded;
            }
            RepKind::Splat => {
                self.splat_slot.state = RepState::Unloaded;
                self.pending_splat = None;
                if let Some(tick) = self.splat_tick.take() {
                    self.scheduler.cancel(tick);
                }
                if let Some(settle) = self.splat_settle.take() {
                    self.scheduler.cancel(settle);
                }
            }
        }
        let error = Error::Load {
            kind,
            message: cause.to_string(),
        };
        self.progress.show_progress(&error.to_string(), 0.0);
        self.error_hide = Some(self.scheduler.schedule(ERROR_DISPLAY_DELAY));
    }

    /// A fresh load replaces any lingering error message, so the hide timer
    /// for it must not fire into the new progress display.
    fn cancel_error_hide(&mut self) {
        if let Some(hide) = self.error_hide.take() {
            self.scheduler.cancel(hide);
        }
    }

    fn emit_progress(&mut self, pct: f32) {
        let pct = pct.clamp(0.0, 100.0).max(self.last_pct);
        self.last_pct = pct;
        self.progress.update_progress(pct);
    }

    fn alloc_object_id(&mut self) -> ObjectId {
        self.next_object_id += 1;
        ObjectId(self.next_object_id)
    }
}
