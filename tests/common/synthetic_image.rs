/// Generates a solid-color interleaved RGB buffer.
pub fn solid_rgb(width: usize, height: usize, color: [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    color.iter().copied().cycle().take(3 * width * height).collect()
}

/// Fills the half-open rectangle `[x0, x1) × [y0, y1)` with `color`.
pub fn fill_rect(
    buf: &mut [u8],
    width: usize,
    (x0, y0): (usize, usize),
    (x1, y1): (usize, usize),
    color: [u8; 3],
) {
    assert!(x1 > x0 && y1 > y0, "rectangle must be non-empty");
    for y in y0..y1 {
        for x in x0..x1 {
            let i = 3 * (y * width + x);
            buf[i..i + 3].copy_from_slice(&color);
        }
    }
}
