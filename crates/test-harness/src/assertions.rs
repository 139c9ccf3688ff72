//! Assertion helpers with diagnostic output.
//!
//! Every failure includes expected vs actual values so a failing suite
//! reads without re-running under a debugger.

use mesh_extrude::TriangleMesh;
use relief_types::BinaryMask;

use crate::helpers::{mesh_bounding_box, HarnessError};

/// Assert the mesh bounding box matches expected values within tolerance.
pub fn assert_bounding_box(
    mesh: &TriangleMesh,
    expected_min: [f32; 3],
    expected_max: [f32; 3],
    tol: f32,
    ctx: &str,
) -> Result<(), HarnessError> {
    let (actual_min, actual_max) = mesh_bounding_box(mesh);

    for i in 0..3 {
        if (actual_min[i] - expected_min[i]).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] bounding box min[{}]: expected {:.3}, got {:.3} (tol={})",
                    ctx, i, expected_min[i], actual_min[i], tol,
                ),
            });
        }
        if (actual_max[i] - expected_max[i]).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] bounding box max[{}]: expected {:.3}, got {:.3} (tol={})",
                    ctx, i, expected_max[i], actual_max[i], tol,
                ),
            });
        }
    }
    Ok(())
}

/// Assert that a mask contains only 0/1 values and has the stated shape.
pub fn assert_mask_well_formed(
    mask: &BinaryMask,
    width: u32,
    height: u32,
    ctx: &str,
) -> Result<(), HarnessError> {
    let expected = width as usize * height as usize;
    if mask.values().len() != expected {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] mask length: expected {}, got {}",
                ctx,
                expected,
                mask.values().len(),
            ),
        });
    }
    if let Some(&bad) = mask.values().iter().find(|&&v| v > 1) {
        return Err(HarnessError::AssertionFailed {
            detail: format!("[{}] mask contains non-binary value {}", ctx, bad),
        });
    }
    Ok(())
}

/// Assert that every corner of the listed triangles sits at the given
/// elevation. Callers pass the indices of the top-surface triangles.
pub fn assert_top_elevation(
    mesh: &TriangleMesh,
    triangles: &[usize],
    expected: f32,
    ctx: &str,
) -> Result<(), HarnessError> {
    for &t in triangles {
        for (c, corner) in mesh.triangle(t).iter().enumerate() {
            if corner[1] != expected {
                return Err(HarnessError::AssertionFailed {
                    detail: format!(
                        "[{}] triangle {} corner {}: elevation {} != {}",
                        ctx, t, c, corner[1], expected,
                    ),
                });
            }
        }
    }
    Ok(())
}
