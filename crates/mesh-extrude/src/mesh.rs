use serde::{Deserialize, Serialize};

/// Triangle mesh in world millimeters.
///
/// Positions are a flat array and every 3 consecutive indices form one
/// triangle. The relief builder emits soup-style geometry (one vertex
/// record per triangle corner, no sharing), but consumers only rely on
/// the dereferenced triangle stream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Triangle indices [i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn add_vertex(&mut self, pos: [f32; 3]) -> u32 {
        let idx = self.vertex_count() as u32;
        self.positions.extend_from_slice(&pos);
        idx
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Append one triangle as three fresh (unshared) vertices.
    pub fn push_triangle(&mut self, a: [f32; 3], b: [f32; 3], c: [f32; 3]) {
        let i0 = self.add_vertex(a);
        let i1 = self.add_vertex(b);
        let i2 = self.add_vertex(c);
        self.add_triangle(i0, i1, i2);
    }

    /// Dereferenced corner positions of triangle `t`.
    pub fn triangle(&self, t: usize) -> [[f32; 3]; 3] {
        let i = t * 3;
        [
            self.vertex(self.indices[i]),
            self.vertex(self.indices[i + 1]),
            self.vertex(self.indices[i + 2]),
        ]
    }

    fn vertex(&self, index: u32) -> [f32; 3] {
        let i = index as usize * 3;
        [self.positions[i], self.positions[i + 1], self.positions[i + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_triangle_grows_soup() {
        let mut mesh = TriangleMesh::new();
        mesh.push_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        mesh.push_triangle([0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]);

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangle(1)[0], [0.0, 0.0, 1.0]);
        assert_eq!(mesh.triangle(1)[2], [0.0, 1.0, 1.0]);
    }
}
