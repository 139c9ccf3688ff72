pub mod errors;
pub mod raster;
pub mod settings;

pub use errors::*;
pub use raster::*;
pub use settings::*;
