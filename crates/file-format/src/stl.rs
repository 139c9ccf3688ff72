//! STL encoders for the generated relief mesh — ASCII and binary.

use mesh_extrude::{facet_normal, TriangleMesh};

use crate::errors::ExportError;

/// Solid name written into the ASCII header and footer lines.
pub const SOLID_NAME: &str = "logo";

/// Fixed download filename used by hosts.
pub const STL_FILENAME: &str = "logo.stl";

/// Encode a mesh as ASCII STL.
///
/// One facet block per triangle, in iteration order, no skips or
/// merges. Coordinates and normals are written with Rust's default
/// float formatting (shortest decimal that round-trips). Facet normals
/// are computed from the winding; degenerate triangles get the zero
/// vector, which the format permits.
pub fn write_ascii_stl(mesh: &TriangleMesh) -> Result<String, ExportError> {
    validate_indices(mesh)?;

    let tri_count = mesh.triangle_count();
    let mut out = String::with_capacity(64 + tri_count * 200);
    out.push_str(&format!("solid {}\n", SOLID_NAME));

    for t in 0..tri_count {
        let [v0, v1, v2] = mesh.triangle(t);
        let n = facet_normal(v0, v1, v2);

        out.push_str(&format!("  facet normal {} {} {}\n", n[0], n[1], n[2]));
        out.push_str("    outer loop\n");
        for v in [v0, v1, v2] {
            out.push_str(&format!("      vertex {} {} {}\n", v[0], v[1], v[2]));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {}\n", SOLID_NAME));
    Ok(out)
}

/// Encode a mesh as binary STL.
///
/// Layout: 80-byte header, u32 LE triangle count, then 50 bytes per
/// triangle (normal, three vertices, zero attribute count). Shares the
/// facet-normal convention of the ASCII encoder.
pub fn write_binary_stl(mesh: &TriangleMesh) -> Result<Vec<u8>, ExportError> {
    validate_indices(mesh)?;

    let tri_count = mesh.triangle_count();
    let mut buf = Vec::with_capacity(84 + tri_count * 50);

    let header = format!("binary STL: {}", SOLID_NAME);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for t in 0..tri_count {
        let [v0, v1, v2] = mesh.triangle(t);
        let n = facet_normal(v0, v1, v2);

        for c in n {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        for v in [v0, v1, v2] {
            for c in v {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

fn validate_indices(mesh: &TriangleMesh) -> Result<(), ExportError> {
    let vertex_count = mesh.vertex_count();
    for &index in &mesh.indices {
        if index as usize >= vertex_count {
            return Err(ExportError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}
