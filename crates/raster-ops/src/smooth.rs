use relief_types::BinaryMask;

/// Majority/box filter over a square window of radius `ceil(smoothing)`.
///
/// Every output bit is recomputed from the original mask, never from
/// partially smoothed neighbors, so the result is independent of scan
/// order. Window cells outside the image are excluded from both the sum
/// and the count rather than clamped. A non-positive `smoothing` returns
/// the mask unchanged.
pub fn smooth_mask(mask: &BinaryMask, smoothing: f32) -> BinaryMask {
    if smoothing <= 0.0 {
        return mask.clone();
    }

    let radius = smoothing.ceil() as i64;
    let (w, h) = (mask.width(), mask.height());
    let mut out = BinaryMask::new(w, h);

    for y in 0..h {
        for x in 0..w {
            let mut sum: u32 = 0;
            let mut count: u32 = 0;
            for ny in y as i64 - radius..=y as i64 + radius {
                if ny < 0 || ny >= h as i64 {
                    continue;
                }
                for nx in x as i64 - radius..=x as i64 + radius {
                    if nx < 0 || nx >= w as i64 {
                        continue;
                    }
                    sum += mask.get(nx as u32, ny as u32) as u32;
                    count += 1;
                }
            }
            // average > 0.5, computed exactly in integers
            out.set(x, y, (2 * sum > count) as u8);
        }
    }

    out
}
