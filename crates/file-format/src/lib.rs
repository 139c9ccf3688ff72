pub mod errors;
pub mod stl;

pub use errors::ExportError;
pub use stl::{write_ascii_stl, write_binary_stl, SOLID_NAME, STL_FILENAME};
