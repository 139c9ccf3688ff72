use file_format::ExportError;
use mesh_extrude::{generate_mesh, TriangleMesh};
use raster_ops::{downsample_to_fit, DEFAULT_MAX_DIMENSION};
use relief_types::{InputError, PixelBuffer, Settings};

/// Errors surfaced to the UI as failure notices.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("no image loaded")]
    NoImage,

    #[error("no generated model to export")]
    NoMesh,

    #[error("failed to decode pixel payload: {0}")]
    Decode(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// RGBA image stored in the engine, already resolution-capped.
pub struct StoredImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Engine state held by the worker between messages.
///
/// Owns the current image, the active settings, and the last generated
/// mesh. Each generation run is a pure function of image + settings;
/// nothing here is shared across runs except as plain inputs.
pub struct EngineState {
    pub image: Option<StoredImage>,
    pub settings: Settings,
    pub mesh: Option<TriangleMesh>,
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            image: None,
            settings: Settings::default(),
            mesh: None,
        }
    }

    /// Validate and store an uploaded image, capping the longer
    /// dimension to keep generation cost bounded. Returns the stored
    /// (post-cap) dimensions.
    pub fn set_image(
        &mut self,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> Result<(u32, u32), BridgeError> {
        let pixels = PixelBuffer::new(rgba, width, height)?;
        let (rgba, width, height) = downsample_to_fit(&pixels, DEFAULT_MAX_DIMENSION)?;
        self.image = Some(StoredImage {
            width,
            height,
            rgba,
        });
        // A new image invalidates the previous model
        self.mesh = None;
        Ok((width, height))
    }

    /// Validate and store new settings.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), BridgeError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Run the pipeline on the stored image and settings. Returns the
    /// triangle count of the generated mesh.
    pub fn generate(&mut self) -> Result<usize, BridgeError> {
        let image = self.image.as_ref().ok_or(BridgeError::NoImage)?;
        let mesh = generate_mesh(&image.rgba, image.width, image.height, &self.settings)?;
        let count = mesh.triangle_count();
        self.mesh = Some(mesh);
        Ok(count)
    }

    /// Serialize the last generated mesh as STL bytes.
    pub fn export_stl(&self, ascii: bool) -> Result<Vec<u8>, BridgeError> {
        let mesh = self.mesh.as_ref().ok_or(BridgeError::NoMesh)?;
        let bytes = if ascii {
            file_format::write_ascii_stl(mesh)?.into_bytes()
        } else {
            file_format::write_binary_stl(mesh)?
        };
        Ok(bytes)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}
