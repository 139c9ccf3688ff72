use crate::errors::InputError;

/// Borrowed view over a caller-owned, already-decoded RGBA8 image.
///
/// The pipeline never owns pixel data; decoding compressed formats and
/// capping resolution happen on the caller's side of the boundary.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap a raw RGBA byte slice, validating its shape.
    ///
    /// Fails fast when the length is not `width * height * 4` or when
    /// either dimension is zero; this is the only failure mode of the
    /// whole generation pipeline.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, InputError> {
        if width == 0 || height == 0 {
            return Err(InputError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(InputError::BufferShape {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Channel values of the pixel at (x, y).
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// W x H grid of 0/1 occupancy values; 1 = raised, 0 = base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    values: Vec<u8>,
    width: u32,
    height: u32,
}

impl BinaryMask {
    /// All-zero mask of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            values: vec![0; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Build a mask from raw values. Length must be `width * height`.
    pub fn from_values(values: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);
        debug_assert!(values.iter().all(|&v| v <= 1));
        Self {
            values,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.values[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        debug_assert!(x < self.width && y < self.height);
        debug_assert!(value <= 1);
        self.values[y as usize * self.width as usize + x as usize] = value;
    }
}
