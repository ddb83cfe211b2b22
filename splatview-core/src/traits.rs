//! Seams to the wrapped rendering and loading libraries
//!
//! The view-state controller only ever talks to its collaborators through
//! these traits; the real scene graph, loaders, and progress UI live behind
//! them. Everything here assumes the single callback-ordered execution
//! stream of the host: no trait is `Send`, and events are delivered by the
//! host pumping them into the controller.

use crate::mesh::TriangleMesh;
use crate::representation::{ObjectId, RenderObject, SplatModel};
use crate::Result;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// The renderable-object container. Attach and detach are idempotent;
/// detaching an object that is not attached is a no-op.
pub trait SceneGraph {
    fn attach(&mut self, object: &RenderObject);
    fn detach(&mut self, id: ObjectId);
}

/// Presentation-only progress reporting; no return value is consumed.
/// Percentages are in `[0, 100]`.
pub trait ProgressSink {
    fn show_progress(&mut self, message: &str, pct: f32);
    fn update_progress(&mut self, pct: f32);
    fn hide_progress(&mut self);
}

/// Events a mesh loader reports back to the controller
#[derive(Debug, Clone)]
pub enum MeshLoadEvent {
    /// Byte progress; `total` is absent when the source length is unknown
    Progress { loaded: u64, total: Option<u64> },
    Finished(TriangleMesh),
    Failed(String),
}

/// Asynchronous mesh loader. `begin` is fire-and-forget; completion and
/// progress arrive as [`MeshLoadEvent`]s delivered by the host.
pub trait MeshLoader {
    fn begin(&mut self, location: &str);
}

/// Synchronous splat-handle constructor. The splat renderer has no native
/// progress signal, so the controller synthesizes one.
pub trait SplatLoader {
    fn construct(&mut self, location: &str) -> Result<SplatModel>;
}

/// Handle to a scheduled one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// One-shot timer scheduling; repetition is re-arming. Firing is delivered
/// by the host calling back into the controller with the `TimerId`.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

/// Shared queue a mesh loader pushes events into and the host drains.
///
/// Cheap to clone; all clones view the same queue. Single-threaded by
/// design, matching the host's one execution stream.
#[derive(Debug, Clone, Default)]
pub struct MeshEventQueue {
    events: Rc<RefCell<VecDeque<MeshLoadEvent>>>,
}

impl MeshEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(&self, event: MeshLoadEvent) {
        self.events.borrow_mut().push_back(event);
    }

    /// Take all queued events, oldest first
    pub fn drain(&self) -> Vec<MeshLoadEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue_is_shared_across_clones() {
        let queue = MeshEventQueue::new();
        let writer = queue.clone();

        writer.push(MeshLoadEvent::Progress {
            loaded: 10,
            total: Some(100),
        });
        assert!(!queue.is_empty());

        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert!(queue.is_empty() && writer.is_empty());
    }
}
