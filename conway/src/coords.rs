// coords.rs - Mapping between linear cell indices and (x, y) positions

/// Linear index of `(x, y)` in a row-major buffer whose rows are `stride` cells wide.
#[inline]
pub fn to_index(x: usize, y: usize, stride: usize) -> usize {
    y * stride + x
}

/// Inverse of [`to_index`]. `stride` must be non-zero.
#[inline]
pub fn to_coords(index: usize, stride: usize) -> (usize, usize) {
    (index % stride, index / stride)
}

/// Offsets of the 8 Moore neighbours as `(dx, dy)`.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Moves `(x, y)` by `(dx, dy)`, returning `None` when the result falls
/// outside `[0, width) x [0, height)`.
#[inline]
pub fn offset_within(
    x: usize,
    y: usize,
    (dx, dy): (isize, isize),
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < width && ny < height).then_some((nx, ny))
}
