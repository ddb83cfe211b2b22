//! In-memory scene graph
//!
//! Tracks which objects are attached, nothing more. Stands in for the
//! wrapped renderer's scene graph wherever no real rendering is wired up.

use splatview_core::{ObjectId, RenderObject, SceneGraph};
use std::collections::BTreeSet;

/// Attach/detach bookkeeping over object ids
#[derive(Debug, Default)]
pub struct BasicSceneGraph {
    attached: BTreeSet<ObjectId>,
}

impl BasicSceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently attached objects
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Whether the object is currently attached
    pub fn is_attached(&self, id: ObjectId) -> bool {
        self.attached.contains(&id)
    }
}

impl SceneGraph for BasicSceneGraph {
    fn attach(&mut self, object: &RenderObject) {
        self.attached.insert(object.id());
    }

    fn detach(&mut self, id: ObjectId) {
        self.attached.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splatview_core::{Pose, RepKind, SplatModel, SplatObject};

    fn splat_object(id: u64) -> RenderObject {
        RenderObject::Splat(SplatObject {
            id: ObjectId(id),
            model: SplatModel {
                source: "gs.ply".to_string(),
                gaussian_count: None,
            },
            pose: Pose::identity(),
        })
    }

    #[test]
    fn test_attach_and_detach_are_idempotent() {
        let mut scene = BasicSceneGraph::new();
        let object = splat_object(7);
        assert_eq!(object.kind(), RepKind::Splat);

        scene.attach(&object);
        scene.attach(&object);
        assert_eq!(scene.attached_count(), 1);

        scene.detach(ObjectId(7));
        scene.detach(ObjectId(7));
        assert_eq!(scene.attached_count(), 0);
    }
}
