pub mod heightmap;
pub mod mesh;
pub mod normal;

pub use heightmap::{build_relief_mesh, generate_mesh};
pub use mesh::TriangleMesh;
pub use normal::facet_normal;
