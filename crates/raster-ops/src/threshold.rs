use relief_types::{BinaryMask, PixelBuffer, Settings};

/// Convert an RGBA image into a raised/base occupancy mask.
///
/// Per-pixel luminance is the Rec. 601 weighted sum scaled by alpha, so
/// fully transparent pixels read as black no matter their color. A pixel
/// counts as "white" when its luminance exceeds `threshold` of full
/// white; non-white pixels become raised (1) unless `invert` flips the
/// polarity. Pure function of its inputs, never fails.
pub fn threshold_mask(pixels: &PixelBuffer, settings: &Settings) -> BinaryMask {
    let (w, h) = (pixels.width(), pixels.height());
    let cutoff = settings.threshold * 255.0;
    let mut mask = BinaryMask::new(w, h);

    for y in 0..h {
        for x in 0..w {
            let [r, g, b, a] = pixels.rgba(x, y);
            let luminance = (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32)
                * (a as f32 / 255.0);
            let is_white = luminance > cutoff;
            let raised = if settings.invert { is_white } else { !is_white };
            mask.set(x, y, raised as u8);
        }
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_pixel(rgba: [u8; 4], count: usize) -> Vec<u8> {
        rgba.iter().copied().cycle().take(count * 4).collect()
    }

    #[test]
    fn dark_pixels_are_raised_by_default() {
        let data = solid_pixel([10, 10, 10, 255], 4);
        let pixels = PixelBuffer::new(&data, 2, 2).unwrap();
        let mask = threshold_mask(&pixels, &Settings::default());
        assert!(mask.values().iter().all(|&v| v == 1));
    }

    #[test]
    fn white_pixels_are_flat_by_default() {
        let data = solid_pixel([255, 255, 255, 255], 4);
        let pixels = PixelBuffer::new(&data, 2, 2).unwrap();
        let mask = threshold_mask(&pixels, &Settings::default());
        assert!(mask.values().iter().all(|&v| v == 0));
    }

    #[test]
    fn transparent_white_reads_as_black() {
        // Alpha scales luminance to zero, so a transparent white pixel
        // lands below any positive threshold.
        let data = solid_pixel([255, 255, 255, 0], 1);
        let pixels = PixelBuffer::new(&data, 1, 1).unwrap();
        let mask = threshold_mask(&pixels, &Settings::default());
        assert_eq!(mask.get(0, 0), 1);
    }

    #[test]
    fn invert_complements_every_bit() {
        // Mixed image: one dark, one bright, one mid-gray, one transparent
        let data: Vec<u8> = [
            [0u8, 0, 0, 255],
            [255, 255, 255, 255],
            [128, 128, 128, 255],
            [200, 40, 90, 0],
        ]
        .concat();
        let pixels = PixelBuffer::new(&data, 2, 2).unwrap();
        let settings = Settings::default();
        let inverted = Settings {
            invert: true,
            ..settings.clone()
        };

        let a = threshold_mask(&pixels, &settings);
        let b = threshold_mask(&pixels, &inverted);
        for (&va, &vb) in a.values().iter().zip(b.values()) {
            assert_eq!(va, 1 - vb);
        }
    }

    #[test]
    fn threshold_zero_raises_only_pure_black() {
        // L > 0 counts as white at threshold 0, so anything with a lit
        // channel goes flat and pure black stays raised.
        let data: Vec<u8> = [[0u8, 0, 0, 255], [1, 0, 0, 255]].concat();
        let pixels = PixelBuffer::new(&data, 2, 1).unwrap();
        let settings = Settings {
            threshold: 0.0,
            ..Settings::default()
        };
        let mask = threshold_mask(&pixels, &settings);
        assert_eq!(mask.get(0, 0), 1);
        assert_eq!(mask.get(1, 0), 0);
    }
}
