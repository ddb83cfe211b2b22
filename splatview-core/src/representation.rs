//! Representation kinds, per-slot load states, and render-object handles

use crate::mesh::TriangleMesh;
use crate::transform::Pose;
use std::fmt;

/// The two renderable forms of a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepKind {
    Mesh,
    Splat,
}

impl RepKind {
    /// The other representation
    pub fn other(self) -> Self {
        match self {
            RepKind::Mesh => RepKind::Splat,
            RepKind::Splat => RepKind::Mesh,
        }
    }
}

impl fmt::Display for RepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepKind::Mesh => write!(f, "mesh"),
            RepKind::Splat => write!(f, "gaussian splat"),
        }
    }
}

/// Load state of one representation slot.
///
/// `Unloaded -> Loading -> Loaded`; a failed load falls back to `Unloaded`,
/// and `Loaded` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
}

/// Identity of a render object within the scene graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// Shading picked from the vertex attributes a loaded mesh carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// Per-vertex colors were present in the source geometry
    VertexColor,
    /// No colors; a single uniform material
    Uniform,
}

/// A Gaussian-splat model handle.
///
/// The payload is owned by the wrapped splat renderer; this records only the
/// source location and what little the header reveals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplatModel {
    pub source: String,
    pub gaussian_count: Option<usize>,
}

/// A mesh materialized for display
#[derive(Debug, Clone)]
pub struct MeshObject {
    pub id: ObjectId,
    pub mesh: TriangleMesh,
    pub shading: ShadingMode,
    pub pose: Pose,
}

/// A splat model materialized for display
#[derive(Debug, Clone)]
pub struct SplatObject {
    pub id: ObjectId,
    pub model: SplatModel,
    pub pose: Pose,
}

/// Either materialized representation, attachable to a scene graph
#[derive(Debug, Clone)]
pub enum RenderObject {
    Mesh(MeshObject),
    Splat(SplatObject),
}

impl RenderObject {
    /// Scene-graph identity of the object
    pub fn id(&self) -> ObjectId {
        match self {
            RenderObject::Mesh(mesh) => mesh.id,
            RenderObject::Splat(splat) => splat.id,
        }
    }

    /// Which representation this object is
    pub fn kind(&self) -> RepKind {
        match self {
            RenderObject::Mesh(_) => RepKind::Mesh,
            RenderObject::Splat(_) => RepKind::Splat,
        }
    }

    /// Current placement
    pub fn pose(&self) -> &Pose {
        match self {
            RenderObject::Mesh(mesh) => &mesh.pose,
            RenderObject::Splat(splat) => &splat.pose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_kind() {
        assert_eq!(RepKind::Mesh.other(), RepKind::Splat);
        assert_eq!(RepKind::Splat.other(), RepKind::Mesh);
    }

    #[test]
    fn test_render_object_kind() {
        let splat = RenderObject::Splat(SplatObject {
            id: ObjectId(1),
            model: SplatModel {
                source: "scene/gs.ply".to_string(),
                gaussian_count: None,
            },
            pose: Pose::identity(),
        });
        assert_eq!(splat.kind(), RepKind::Splat);
        assert_eq!(splat.id(), ObjectId(1));
    }
}
