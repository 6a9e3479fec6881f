//! Pixel format conversion helpers for presentation adapters.

/// Copies RGBA pixel data to packed RGB, dropping the alpha channel.
///
/// # Panics
/// Panics if `src` is not a multiple of 4 bytes or if `dst.len()` is not
/// `src.len() / 4 * 3`.
pub fn copy_rgba_to_rgb(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    let expected_dst_len = (src.len() / 4) * 3;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)) {
        dst_pixel.copy_from_slice(&src_pixel[..3]);
    }
}

/// Packed RGB copy of an RGBA buffer.
#[must_use]
pub fn rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    let mut dst = vec![0; (src.len() / 4) * 3];
    copy_rgba_to_rgb(&src[..(src.len() / 4) * 4], &mut dst);

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgba_to_rgb_known_values() {
        let src = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 128, // green, half transparent
            0, 0, 255, 0, // blue, transparent
        ];
        let mut dst = vec![0; 9];

        copy_rgba_to_rgb(&src, &mut dst);

        assert_eq!(dst, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn test_copy_rgba_to_rgb_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        copy_rgba_to_rgb(&[], &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_rgba_to_rgb_rejects_short_destination() {
        let mut dst = vec![0; 2];

        copy_rgba_to_rgb(&[1, 2, 3, 4], &mut dst);
    }

    #[test]
    fn test_rgba_to_rgb_allocates() {
        assert_eq!(rgba_to_rgb(&[10, 20, 30, 255, 40, 50, 60, 255]), vec![10, 20, 30, 40, 50, 60]);
    }
}
