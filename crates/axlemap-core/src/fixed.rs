use fixed::types::I32F32;

/// Q32.32 fixed-point: 32 integer bits, 32 fractional bits.
///
/// World coordinates are stored in meters as `Fixed64` so two layouts built
/// from the same input compare bit-for-bit equal.
pub type Fixed64 = I32F32;

/// Convert an f64 to Fixed64. Use for configuration and tap input.
#[inline]
pub fn f64_to_fixed64(v: f64) -> Fixed64 {
    Fixed64::from_num(v)
}

/// Convert an f64 to Fixed64, or `None` when it is not finite or does not
/// fit the Q32.32 range.
#[inline]
pub fn checked_f64_to_fixed64(v: f64) -> Option<Fixed64> {
    Fixed64::checked_from_num(v)
}

/// Convert Fixed64 to f64. Use only for display and rendering.
#[inline]
pub fn fixed64_to_f64(v: Fixed64) -> f64 {
    v.to_num::<f64>()
}

/// Convert Fixed64 to f32, the precision most scene graphs consume.
#[inline]
pub fn fixed64_to_f32(v: Fixed64) -> f32 {
    v.to_num::<f32>()
}
