pub mod resize;
pub mod smooth;
pub mod threshold;

pub use resize::{downsample_to_fit, DEFAULT_MAX_DIMENSION};
pub use smooth::smooth_mask;
pub use threshold::threshold_mask;
