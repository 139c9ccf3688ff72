use relief_types::{InputError, PixelBuffer};

/// Longest image dimension the reference host allows into the pipeline.
pub const DEFAULT_MAX_DIMENSION: u32 = 256;

/// Nearest-neighbor downsample so the longer dimension is at most
/// `max_dim`, preserving aspect ratio.
///
/// Generation cost grows with pixel count, so hosts cap resolution
/// before invoking the pipeline. Returns an owned RGBA buffer plus the
/// new dimensions; images already within the cap are copied unchanged.
pub fn downsample_to_fit(pixels: &PixelBuffer, max_dim: u32) -> Result<(Vec<u8>, u32, u32), InputError> {
    if max_dim == 0 {
        return Err(InputError::Setting {
            name: "max_dim",
            reason: "must be positive".to_string(),
        });
    }

    let (w, h) = (pixels.width(), pixels.height());
    let longest = w.max(h);
    if longest <= max_dim {
        return Ok((pixels.data().to_vec(), w, h));
    }

    let (new_w, new_h) = if w >= h {
        (max_dim, ((h as u64 * max_dim as u64) / w as u64).max(1) as u32)
    } else {
        (((w as u64 * max_dim as u64) / h as u64).max(1) as u32, max_dim)
    };

    let mut out = Vec::with_capacity(new_w as usize * new_h as usize * 4);
    for y in 0..new_h {
        let src_y = (y as u64 * h as u64 / new_h as u64) as u32;
        for x in 0..new_w {
            let src_x = (x as u64 * w as u64 / new_w as u64) as u32;
            out.extend_from_slice(&pixels.rgba(src_x, src_y));
        }
    }

    Ok((out, new_w, new_h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_pass_through() {
        let data = vec![7u8; 4 * 4 * 4];
        let pixels = PixelBuffer::new(&data, 4, 4).unwrap();
        let (out, w, h) = downsample_to_fit(&pixels, DEFAULT_MAX_DIMENSION).unwrap();
        assert_eq!((w, h), (4, 4));
        assert_eq!(out, data);
    }

    #[test]
    fn wide_image_is_capped_on_width() {
        let data = vec![0u8; 512 * 128 * 4];
        let pixels = PixelBuffer::new(&data, 512, 128).unwrap();
        let (out, w, h) = downsample_to_fit(&pixels, 256).unwrap();
        assert_eq!((w, h), (256, 64));
        assert_eq!(out.len(), 256 * 64 * 4);
    }

    #[test]
    fn tall_image_is_capped_on_height() {
        let data = vec![0u8; 100 * 400 * 4];
        let pixels = PixelBuffer::new(&data, 100, 400).unwrap();
        let (_, w, h) = downsample_to_fit(&pixels, 200).unwrap();
        assert_eq!((w, h), (50, 200));
    }

    #[test]
    fn extreme_aspect_ratio_never_collapses_to_zero() {
        let data = vec![0u8; 1000 * 1 * 4];
        let pixels = PixelBuffer::new(&data, 1000, 1).unwrap();
        let (_, w, h) = downsample_to_fit(&pixels, 64).unwrap();
        assert_eq!((w, h), (64, 1));
    }

    #[test]
    fn downsample_samples_source_pixels() {
        // 4x1 image with distinct red channels; halving keeps pixels 0 and 2
        let data: Vec<u8> = [[10u8, 0, 0, 255], [20, 0, 0, 255], [30, 0, 0, 255], [40, 0, 0, 255]]
            .concat();
        let pixels = PixelBuffer::new(&data, 4, 1).unwrap();
        let (out, w, h) = downsample_to_fit(&pixels, 2).unwrap();
        assert_eq!((w, h), (2, 1));
        assert_eq!(out[0], 10);
        assert_eq!(out[4], 30);
    }
}
