//! PLY mesh parsing
//!
//! Parses triangle meshes from PLY data, extracting vertex positions, face
//! indices, and per-vertex normals and colors when the file carries them.
//! Whether normals/colors were present is visible on the returned mesh so
//! the consumer can pick a compatible shading mode.

use ply_rs::{
    parser::Parser,
    ply::{DefaultElement, Property},
};
use splatview_core::{Error, Point3f, Result, TriangleMesh, Vector3f};
use std::io::Read;

/// Parse a triangle mesh from PLY data
pub fn read_mesh<R: Read>(reader: &mut R) -> Result<TriangleMesh> {
    let parser = Parser::<DefaultElement>::new();
    let ply = parser.read_ply(reader)?;

    // Extract vertices
    let mut vertices = Vec::new();
    if let Some(vertex_element) = ply.payload.get("vertex") {
        for vertex in vertex_element {
            let x = extract_property_value(vertex, "x")?;
            let y = extract_property_value(vertex, "y")?;
            let z = extract_property_value(vertex, "z")?;

            vertices.push(Point3f::new(x, y, z));
        }
    }

    // Extract faces, rejecting indices that point outside the vertex list
    let mut faces = Vec::new();
    if let Some(face_element) = ply.payload.get("face") {
        for face in face_element {
            let indices = extract_face_indices(face)?;
            if indices.len() >= 3 {
                let face = [indices[0], indices[1], indices[2]];
                if let Some(&bad) = face.iter().find(|&&index| index >= vertices.len()) {
                    return Err(Error::InvalidData(format!(
                        "face references vertex {} but the mesh has only {} vertices",
                        bad,
                        vertices.len()
                    )));
                }
                faces.push(face);
            }
        }
    }

    // Extract normals if available
    let normals = if let Some(vertex_element) = ply.payload.get("vertex") {
        let mut normals = Vec::new();
        let mut has_normals = true;

        for vertex in vertex_element {
            if let (Ok(nx), Ok(ny), Ok(nz)) = (
                extract_property_value(vertex, "nx"),
                extract_property_value(vertex, "ny"),
                extract_property_value(vertex, "nz"),
            ) {
                normals.push(Vector3f::new(nx, ny, nz));
            } else {
                has_normals = false;
                break;
            }
        }

        if has_normals && !normals.is_empty() {
            Some(normals)
        } else {
            None
        }
    } else {
        None
    };

    // Extract colors if available
    let colors = if let Some(vertex_element) = ply.payload.get("vertex") {
        let mut colors = Vec::new();
        let mut has_colors = true;

        for vertex in vertex_element {
            if let (Ok(r), Ok(g), Ok(b)) = (
                extract_color_value(vertex, "red"),
                extract_color_value(vertex, "green"),
                extract_color_value(vertex, "blue"),
            ) {
                colors.push([r, g, b]);
            } else {
                has_colors = false;
                break;
            }
        }

        if has_colors && !colors.is_empty() {
            Some(colors)
        } else {
            None
        }
    } else {
        None
    };

    if vertices.is_empty() {
        return Err(Error::InvalidData("PLY contains no vertices".to_string()));
    }

    let mut mesh = TriangleMesh::from_vertices_and_faces(vertices, faces);
    if let Some(normals) = normals {
        mesh.set_normals(normals);
    }
    if let Some(colors) = colors {
        mesh.set_colors(colors);
    }

    Ok(mesh)
}

/// Extract a property value as f32 from a PLY element
fn extract_property_value(element: &DefaultElement, name: &str) -> Result<f32> {
    match element.get(name) {
        Some(Property::Float(val)) => Ok(*val),
        Some(Property::Double(val)) => Ok(*val as f32),
        Some(Property::Int(val)) => Ok(*val as f32),
        Some(Property::UInt(val)) => Ok(*val as f32),
        _ => Err(Error::InvalidData(format!(
            "Property '{}' not found or invalid type",
            name
        ))),
    }
}

/// Extract a color channel as u8 from a PLY element
fn extract_color_value(element: &DefaultElement, name: &str) -> Result<u8> {
    match element.get(name) {
        Some(Property::UChar(val)) => Ok(*val),
        Some(Property::Int(val)) => Ok((*val).clamp(0, 255) as u8),
        Some(Property::UInt(val)) => Ok((*val).min(255) as u8),
        Some(Property::Float(val)) => Ok((val.clamp(0.0, 1.0) * 255.0) as u8),
        _ => Err(Error::InvalidData(format!(
            "Color property '{}' not found or invalid type",
            name
        ))),
    }
}

/// Extract face indices from a PLY face element
fn extract_face_indices(element: &DefaultElement) -> Result<Vec<usize>> {
    match element
        .get("vertex_indices")
        .or_else(|| element.get("vertex_index"))
    {
        Some(Property::ListInt(indices)) => indices
            .iter()
            .map(|&idx| {
                usize::try_from(idx)
                    .map_err(|_| Error::InvalidData(format!("negative face index: {}", idx)))
            })
            .collect(),
        Some(Property::ListUInt(indices)) => {
            Ok(indices.iter().map(|&idx| idx as usize).collect())
        }
        _ => Err(Error::InvalidData("Face indices not found".to_string())),
    }
}
