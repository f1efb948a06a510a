//! STL export of the whole scene, in binary and ASCII formats.
//!
//! Vertices are written in world space: each object's mesh is transformed
//! by its world matrix before output, so the file matches what the user
//! sees. Facet normals are recomputed from the triangle winding; stored
//! vertex normals are a rendering concern and never exported.

use std::fmt::Write as _;

use editor_core::EditorSession;
use mesh_engine::TriMesh;

use crate::errors::ExportError;

/// World-space triangle soup of every object in the scene.
fn world_triangles(session: &EditorSession) -> Vec<[f64; 9]> {
    let mut triangles = Vec::new();
    for object in session.objects() {
        let mut mesh: TriMesh = object.mesh().clone();
        mesh.transform(&object.world_matrix());
        for tri in mesh.indices.chunks(3) {
            let mut t = [0.0; 9];
            for (k, &idx) in tri.iter().enumerate() {
                let vi = idx as usize * 3;
                t[k * 3] = mesh.positions[vi];
                t[k * 3 + 1] = mesh.positions[vi + 1];
                t[k * 3 + 2] = mesh.positions[vi + 2];
            }
            triangles.push(t);
        }
    }
    triangles
}

/// Facet normal from the cross product of the triangle edges, with a safe
/// fallback for degenerate triangles.
fn facet_normal(t: &[f64; 9]) -> (f64, f64, f64) {
    let (ax, ay, az) = (t[3] - t[0], t[4] - t[1], t[5] - t[2]);
    let (bx, by, bz) = (t[6] - t[0], t[7] - t[1], t[8] - t[2]);
    let nx = ay * bz - az * by;
    let ny = az * bx - ax * bz;
    let nz = ax * by - ay * bx;
    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1e-12 {
        (nx / len, ny / len, nz / len)
    } else {
        (0.0, 0.0, 1.0)
    }
}

/// Export the scene as an ASCII STL string.
pub fn export_ascii_stl(session: &EditorSession, name: &str) -> Result<String, ExportError> {
    let triangles = world_triangles(session);
    if triangles.is_empty() {
        return Err(ExportError::EmptyScene);
    }

    let mut out = String::with_capacity(triangles.len() * 300);
    let _ = writeln!(out, "solid {name}");
    for t in &triangles {
        let (nx, ny, nz) = facet_normal(t);
        let _ = writeln!(out, "  facet normal {nx:.6} {ny:.6} {nz:.6}");
        out.push_str("    outer loop\n");
        for k in 0..3 {
            let _ = writeln!(
                out,
                "      vertex {:.6} {:.6} {:.6}",
                t[k * 3],
                t[k * 3 + 1],
                t[k * 3 + 2]
            );
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    let _ = writeln!(out, "endsolid {name}");
    Ok(out)
}

/// Export the scene as a binary STL file.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - For each triangle: 3xf32 normal + 3x(3xf32 vertex) + u16 attribute = 50 bytes
pub fn export_binary_stl(session: &EditorSession, name: &str) -> Result<Vec<u8>, ExportError> {
    let triangles = world_triangles(session);
    if triangles.is_empty() {
        return Err(ExportError::EmptyScene);
    }

    let mut buf = Vec::with_capacity(80 + 4 + triangles.len() * 50);
    let header = format!("binary STL: {name}");
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);
    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

    for t in &triangles {
        let (nx, ny, nz) = facet_normal(t);
        for component in [nx, ny, nz] {
            buf.extend_from_slice(&(component as f32).to_le_bytes());
        }
        for value in t {
            buf.extend_from_slice(&(*value as f32).to_le_bytes());
        }
        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }
    Ok(buf)
}
