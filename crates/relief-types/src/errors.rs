/// Errors raised while validating pipeline input.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InputError {
    #[error(
        "pixel buffer length {actual} does not match {width}x{height} RGBA ({expected} bytes)"
    )]
    BufferShape {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("image has zero area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("invalid setting {name}: {reason}")]
    Setting { name: &'static str, reason: String },
}
