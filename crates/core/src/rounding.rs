//! Integer rounding used by every byte and text value the converters produce.
//!
//! This is not `f64::round`. The value is truncated toward zero, then bumped
//! by one when the first two decimals (read off `trunc(val * 100) % 100`)
//! reach 50. Golden outputs depend on the exact rule, so keep it literal.

/// Rounds `val` to an integer with the truncate-then-bump rule.
///
/// Positive values round half up. Negative values always truncate toward
/// zero because their remainder is never `>= 50`, so `round_to_int(-0.5)`
/// is `0` and `round_to_int(-1.7)` is `-1`. Out-of-range values saturate at
/// the `i32` bounds and NaN maps to `0`.
pub fn round_to_int(val: f64) -> i32 {
    let mut ret = val as i32;
    let temp = (val * 100.0) as i32;
    if temp % 100 >= 50 {
        ret += 1;
    }
    ret
}
