//! Helper functions: error type, image and mask constructors, mesh math.

use mesh_extrude::TriangleMesh;
use relief_types::BinaryMask;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("STL parse error at line {line}: {detail}")]
    StlParse { line: usize, detail: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },
}

// ── Input Constructors ──────────────────────────────────────────────────────

/// RGBA image filled with a single pixel value.
pub fn solid_image(rgba: [u8; 4], width: u32, height: u32) -> Vec<u8> {
    rgba.iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect()
}

/// Opaque image whose left half is black and right half is white.
pub fn half_and_half_image(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for _y in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { 0 } else { 255 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    data
}

/// Build a mask from rows of '0'/'1' characters.
pub fn mask_from_rows(rows: &[&str]) -> BinaryMask {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let values = rows
        .iter()
        .flat_map(|row| row.bytes().map(|b| b - b'0'))
        .collect();
    BinaryMask::from_values(values, width, height)
}

// ── Mesh Math ───────────────────────────────────────────────────────────────

/// Axis-aligned bounding box over all vertex positions.
pub fn mesh_bounding_box(mesh: &TriangleMesh) -> ([f32; 3], [f32; 3]) {
    assert!(
        mesh.positions.len() >= 3,
        "Mesh must have at least one vertex"
    );
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for chunk in mesh.positions.chunks(3) {
        for i in 0..3 {
            min[i] = min[i].min(chunk[i]);
            max[i] = max[i].max(chunk[i]);
        }
    }
    (min, max)
}
