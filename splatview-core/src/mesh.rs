//! Mesh data structures and functionality

use crate::{Point3f, Vector3f};
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and faces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[usize; 3]>,
    pub normals: Option<Vec<Vector3f>>,
    pub colors: Option<Vec<[u8; 3]>>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: None,
            colors: None,
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            normals: None,
            colors: None,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Whether the mesh carries per-vertex normals
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Whether the mesh carries per-vertex colors
    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    /// Set vertex normals
    pub fn set_normals(&mut self, normals: Vec<Vector3f>) {
        if normals.len() == self.vertices.len() {
            self.normals = Some(normals);
        }
    }

    /// Set vertex colors
    pub fn set_colors(&mut self, colors: Vec<[u8; 3]>) {
        if colors.len() == self.vertices.len() {
            self.colors = Some(colors);
        }
    }

    /// Calculate face normals
    pub fn calculate_face_normals(&self) -> Vec<Vector3f> {
        self.faces
            .iter()
            .map(|face| {
                let v0 = self.vertices[face[0]];
                let v1 = self.vertices[face[1]];
                let v2 = self.vertices[face[2]];

                let edge1 = v1 - v0;
                let edge2 = v2 - v0;

                edge1.cross(&edge2).normalize()
            })
            .collect()
    }

    /// Compute per-vertex normals by area-weighted accumulation of the
    /// adjacent face normals. Used when a loaded mesh carries none.
    pub fn compute_vertex_normals(&mut self) {
        let mut accumulated = vec![Vector3f::zeros(); self.vertices.len()];

        for face in &self.faces {
            let v0 = self.vertices[face[0]];
            let v1 = self.vertices[face[1]];
            let v2 = self.vertices[face[2]];

            // Unnormalized cross product weights by triangle area
            let face_normal = (v1 - v0).cross(&(v2 - v0));

            for &index in face {
                accumulated[index] += face_normal;
            }
        }

        let normals = accumulated
            .into_iter()
            .map(|normal| {
                let length = normal.norm();
                if length > f32::EPSILON {
                    normal / length
                } else {
                    Vector3f::new(0.0, 0.0, 1.0)
                }
            })
            .collect();

        self.normals = Some(normals);
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
