//! Test support for the view-state controller
//!
//! Fake collaborators with shared-handle access: each fake is a cheap clone
//! over an `Rc`, so a test can hand one clone to the controller and keep
//! another to inspect. The fake scheduler carries a manual clock.


use crate::controller::ViewStateController;
use splatview_core::{
    Error, MeshLoader, ObjectId, Point3f, ProgressSink, RenderObject, RepKind, SceneGraph,
    SceneTransform, Scheduler, SplatLoader, SplatModel, TimerId, TriangleMesh, Vector3f,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressCall {
    Show(String, f32),
    Update(f32),
    Hide,
}

#[derive(Debug, Clone, Default)]
pub struct FakeProgress {
    calls: Rc<RefCell<Vec<ProgressCall>>>,
}

impl FakeProgress {
    pub fn calls(&self) -> Vec<ProgressCall> {
        self.calls.borrow().clone()
    }

    /// Percentages from `update_progress` calls, in order
    pub fn updates(&self) -> Vec<f32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ProgressCall::Update(pct) => Some(*pct),
                _ => None,
            })
            .collect()
    }

    pub fn show_messages(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ProgressCall::Show(message, _) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn hide_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ProgressCall::Hide))
            .count()
    }
}

impl ProgressSink for FakeProgress {
    fn show_progress(&mut self, message: &str, pct: f32) {
        self.calls
            .borrow_mut()
            .push(ProgressCall::Show(message.to_string(), pct));
    }

    fn update_progress(&mut self, pct: f32) {
        self.calls.borrow_mut().push(ProgressCall::Update(pct));
    }

    fn hide_progress(&mut self) {
        self.calls.borrow_mut().push(ProgressCall::Hide);
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeSceneGraph {
    attached: Rc<RefCell<Vec<(ObjectId, RepKind)>>>,
}

impl FakeSceneGraph {
    pub fn attached_count(&self) -> usize {
        self.attached.borrow().len()
    }

    pub fn attached_kinds(&self) -> Vec<RepKind> {
        self.attached.borrow().iter().map(|&(_, kind)| kind).collect()
    }
}

impl SceneGraph for FakeSceneGraph {
    fn attach(&mut self, object: &RenderObject) {
        let mut attached = self.attached.borrow_mut();
        if !attached.iter().any(|&(id, _)| id == object.id()) {
            attached.push((object.id(), object.kind()));
        }
    }

    fn detach(&mut self, id: ObjectId) {
        self.attached.borrow_mut().retain(|&(attached, _)| attached != id);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedMeshLoader {
    begins: Rc<RefCell<Vec<String>>>,
}

impl ScriptedMeshLoader {
    pub fn begin_count(&self) -> usize {
        self.begins.borrow().len()
    }
}

impl MeshLoader for ScriptedMeshLoader {
    fn begin(&mut self, location: &str) {
        self.begins.borrow_mut().push(location.to_string());
    }
}

#[derive(Debug, Default)]
struct FakeSplatState {
    constructs: usize,
    fail_with: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeSplatLoader {
    state: Rc<RefCell<FakeSplatState>>,
}

impl FakeSplatLoader {
    pub fn construct_count(&self) -> usize {
        self.state.borrow().constructs
    }

    pub fn fail_with(&self, message: &str) {
        self.state.borrow_mut().fail_with = Some(message.to_string());
    }

    pub fn succeed(&self) {
        self.state.borrow_mut().fail_with = None;
    }
}

impl SplatLoader for FakeSplatLoader {
    fn construct(&mut self, location: &str) -> splatview_core::Result<SplatModel> {
        let mut state = self.state.borrow_mut();
        state.constructs += 1;
        match &state.fail_with {
            Some(message) => Err(Error::InvalidData(message.clone())),
            None => Ok(SplatModel {
                source: location.to_string(),
                gaussian_count: Some(1000),
            }),
        }
    }
}

#[derive(Debug, Default)]
struct FakeSchedulerState {
    now_ms: u64,
    next_id: u64,
    pending: Vec<(u64, TimerId)>,
}

/// One-shot scheduler over a manual clock
#[derive(Debug, Clone, Default)]
pub struct FakeScheduler {
    state: Rc<RefCell<FakeSchedulerState>>,
}

impl FakeScheduler {
    /// Advance the clock and return timers now due, in firing order
    pub fn advance(&self, ms: u64) -> Vec<TimerId> {
        let mut state = self.state.borrow_mut();
        state.now_ms += ms;
        state.pending.sort_by_key(|&(deadline, _)| deadline);
        let now = state.now_ms;
        let due = state.pending.partition_point(|&(deadline, _)| deadline <= now);
        state.pending.drain(..due).map(|(_, id)| id).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }
}

impl Scheduler for FakeScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = TimerId(state.next_id);
        let deadline = state.now_ms + delay.as_millis() as u64;
        state.pending.push((deadline, id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.state
            .borrow_mut()
            .pending
            .retain(|&(_, pending)| pending != id);
    }
}

/// A controller wired to fakes, with handles kept for inspection
pub struct Harness {
    pub controller: ViewStateController,
    pub scene: FakeSceneGraph,
    pub progress: FakeProgress,
    pub mesh_loader: ScriptedMeshLoader,
    pub splat_loader: FakeSplatLoader,
    pub scheduler: FakeScheduler,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_transform(SceneTransform {
            rotation_shift: Vector3f::new(std::f32::consts::PI * 0.9, 0.0, 0.0),
            position_shift: Vector3f::new(0.0, 2.5, 5.0),
            scale_factor: 2.0,
            camera_distance: 10.0,
        })
    }

    pub fn with_transform(transform: SceneTransform) -> Self {
        let scene = FakeSceneGraph::default();
        let progress = FakeProgress::default();
        let mesh_loader = ScriptedMeshLoader::default();
        let splat_loader = FakeSplatLoader::default();
        let scheduler = FakeScheduler::default();

        let controller = ViewStateController::new(
            Box::new(scene.clone()),
            Box::new(progress.clone()),
            Box::new(mesh_loader.clone()),
            Box::new(splat_loader.clone()),
            Box::new(scheduler.clone()),
            transform,
            "scene/mesh.ply".to_string(),
            "scene/gs.ply".to_string(),
        )
        .with_rng_seed(7);

        Self {
            controller,
            scene,
            progress,
            mesh_loader,
            splat_loader,
            scheduler,
        }
    }

    /// Advance the fake clock, firing due timers into the controller
    pub fn advance(&mut self, ms: u64) {
        for timer in self.scheduler.advance(ms) {
            self.controller.on_timer(timer);
        }
    }

    /// Run the synthetic splat progress to completion (settle at 3000 ms)
    pub fn run_splat_to_completion(&mut self) {
        for _ in 0..20 {
            self.advance(150);
        }
    }

    /// Feed a successful mesh load into the controller
    pub fn feed_mesh_success(&mut self) {
        use splatview_core::MeshLoadEvent;
        self.controller.on_mesh_event(MeshLoadEvent::Progress {
            loaded: 50,
            total: Some(100),
        });
        self.controller
            .on_mesh_event(MeshLoadEvent::Finished(triangle_mesh()));
    }
}

/// A minimal mesh without normals or colors
pub fn triangle_mesh() -> TriangleMesh {
    TriangleMesh::from_vertices_and_faces(
        vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2]],
    )
}
