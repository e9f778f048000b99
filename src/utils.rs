use zerocopy::little_endian::U16;

/// Rounds `value` up to the next multiple of `boundary`, which must be a power of two.
///
/// Returns `None` if the rounded value does not fit in a `usize`.
#[inline]
pub const fn align(value: usize, boundary: usize) -> Option<usize> {
    debug_assert!(boundary.is_power_of_two());
    match value.checked_add(boundary - 1) {
        Some(padded) => Some(padded & !(boundary - 1)),
        None => None,
    }
}

/// Returns the number of UTF-16 code units before the first NUL, or `None` if `units` has no
/// terminator.
pub fn get_widestring_len(units: &[U16]) -> Option<usize> {
    units.iter().position(|unit| unit.get() == 0)
}

/// Returns true if the UTF-16 code units spell exactly `expected`.
pub fn widestring_eq(units: &[U16], expected: &str) -> bool {
    units.iter().map(|unit| unit.get()).eq(expected.encode_utf16())
}
