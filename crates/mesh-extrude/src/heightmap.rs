use raster_ops::{smooth_mask, threshold_mask};
use relief_types::{BinaryMask, InputError, PixelBuffer, Settings};

use crate::mesh::TriangleMesh;

/// Run the full image-to-mesh pipeline on a raw RGBA buffer.
///
/// Threshold, smooth, and build are strictly sequential and share no
/// state, so independent invocations may run concurrently. Fails only
/// on malformed input (buffer shape or out-of-range settings); every
/// valid input yields a complete mesh.
pub fn generate_mesh(
    data: &[u8],
    width: u32,
    height: u32,
    settings: &Settings,
) -> Result<TriangleMesh, InputError> {
    settings.validate()?;
    let pixels = PixelBuffer::new(data, width, height)?;
    let mask = threshold_mask(&pixels, settings);
    let mask = smooth_mask(&mask, settings.smoothing);
    Ok(build_relief_mesh(&mask, settings))
}

/// Extrude a binary mask into a triangle soup: top surface, perimeter
/// and transition walls, and a bottom plate.
///
/// The model is centered at the origin in the XZ ground plane with
/// elevation along +Y. Grid step is `scale / max(W, H)` on both planar
/// axes, so `scale` is the longer dimension of the nominal footprint.
///
/// Walls along the left and front borders are emitted only where the
/// mask transitions between raised and base (and unconditionally at the
/// image border itself), while the right and back borders always get a
/// full-height wall. That asymmetry is part of the algorithm's output
/// contract; do not symmetrize it. The result is not guaranteed
/// watertight or manifold, which downstream slicers tolerate.
pub fn build_relief_mesh(mask: &BinaryMask, settings: &Settings) -> TriangleMesh {
    let (w, h) = (mask.width(), mask.height());
    let builder = ReliefGrid::new(w, h, settings);
    let mut mesh = TriangleMesh::new();

    for y in 0..h.saturating_sub(1) {
        for x in 0..w.saturating_sub(1) {
            builder.emit_cell(mask, x, y, &mut mesh);
        }
    }

    builder.emit_base(&mut mesh);
    mesh
}

/// Precomputed grid-to-world mapping for one generation run.
struct ReliefGrid {
    scale_xy: f32,
    offset_x: f32,
    offset_y: f32,
    extrude_height: f32,
    base_height: f32,
    width: u32,
    height: u32,
}

impl ReliefGrid {
    fn new(width: u32, height: u32, settings: &Settings) -> Self {
        let scale_xy = settings.scale / width.max(height) as f32;
        Self {
            scale_xy,
            offset_x: -(width as f32) * scale_xy / 2.0,
            offset_y: -(height as f32) * scale_xy / 2.0,
            extrude_height: settings.extrude_height,
            base_height: settings.base_height,
            width,
            height,
        }
    }

    fn world_x(&self, x: u32) -> f32 {
        x as f32 * self.scale_xy + self.offset_x
    }

    fn world_y(&self, y: u32) -> f32 {
        y as f32 * self.scale_xy + self.offset_y
    }

    fn elevation(&self, raised: u8) -> f32 {
        if raised != 0 {
            self.extrude_height
        } else {
            self.base_height
        }
    }

    /// Top quad plus any left/front walls for the cell whose top-left
    /// grid corner is (x, y).
    fn emit_cell(&self, mask: &BinaryMask, x: u32, y: u32, mesh: &mut TriangleMesh) {
        let v00 = mask.get(x, y);
        let h00 = self.elevation(v00);
        let h10 = self.elevation(mask.get(x + 1, y));
        let h01 = self.elevation(mask.get(x, y + 1));
        let h11 = self.elevation(mask.get(x + 1, y + 1));

        let x0 = self.world_x(x);
        let x1 = self.world_x(x + 1);
        let z0 = self.world_y(y);
        let z1 = self.world_y(y + 1);

        // Top surface, split along the top-right/bottom-left diagonal
        push_quad(
            mesh,
            [x0, h00, z0],
            [x1, h10, z0],
            [x0, h01, z1],
            [x1, h11, z1],
        );

        // Left wall at a raised/base transition along X, or at the border
        if x == 0 || mask.get(x - 1, y) != v00 {
            push_quad(
                mesh,
                [x0, h00, z0],
                [x0, h01, z1],
                [x0, 0.0, z0],
                [x0, 0.0, z1],
            );
        }

        // Front wall at a transition along Y, or at the border
        if y == 0 || mask.get(x, y - 1) != v00 {
            push_quad(
                mesh,
                [x0, h00, z0],
                [x1, h10, z0],
                [x0, 0.0, z0],
                [x1, 0.0, z0],
            );
        }
    }

    /// Bottom plate plus the unconditional right and back walls over the
    /// full nominal footprint. These close the model on two of its four
    /// outer sides even where no mask transition would trigger a wall.
    fn emit_base(&self, mesh: &mut TriangleMesh) {
        let x0 = self.offset_x;
        let x1 = self.offset_x + self.width as f32 * self.scale_xy;
        let z0 = self.offset_y;
        let z1 = self.offset_y + self.height as f32 * self.scale_xy;
        let top = self.extrude_height;

        // Bottom plate at ground level
        push_quad(
            mesh,
            [x0, 0.0, z0],
            [x1, 0.0, z0],
            [x0, 0.0, z1],
            [x1, 0.0, z1],
        );

        // Right wall
        push_quad(
            mesh,
            [x1, top, z0],
            [x1, top, z1],
            [x1, 0.0, z0],
            [x1, 0.0, z1],
        );

        // Back wall
        push_quad(
            mesh,
            [x0, top, z1],
            [x1, top, z1],
            [x0, 0.0, z1],
            [x1, 0.0, z1],
        );
    }
}

/// Two triangles for the quad (tl, tr, bl, br), split tr-to-bl.
fn push_quad(mesh: &mut TriangleMesh, tl: [f32; 3], tr: [f32; 3], bl: [f32; 3], br: [f32; 3]) {
    mesh.push_triangle(tl, tr, bl);
    mesh.push_triangle(tr, br, bl);
}
