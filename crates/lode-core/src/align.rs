//! Address alignment arithmetic.

/// Returns `true` if `align` is usable as an alignment: non-zero and a
/// power of two.
pub const fn is_valid_align(align: usize) -> bool {
    align.is_power_of_two()
}

/// Round `addr` up to the next multiple of `align`.
///
/// `align` must satisfy [`is_valid_align`]. Returns `None` if the rounded
/// address would overflow `usize` or if `align` is invalid.
pub const fn align_up(addr: usize, align: usize) -> Option<usize> {
    if !is_valid_align(align) {
        return None;
    }
    let mask = align - 1;
    match addr.checked_add(mask) {
        Some(bumped) => Some(bumped & !mask),
        None => None,
    }
}
