/// Errors during STL export.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("index {index} out of range (vertex count = {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}
