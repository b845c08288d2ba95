//! Exact wide-integer arithmetic for the sweep predicates.
//!
//! The predicates in [`crate::predicates`] need to compare products of
//! 32-bit deltas without ever rounding, which means every intermediate
//! value has to be carried at twice (or four times) the width of its
//! inputs. This module is the only place in the crate that reaches for
//! `i64`/`i128`; everything above it works in plain `i32` coordinates.
//!
//! Rust has native 64- and 128-bit integers on every platform this crate
//! targets, so there is no portable limb-based fallback here (unlike the
//! C original, which had to support compilers without a `long long`):
//! `i64`/`i128` arithmetic and a portable fallback would compute the same
//! bits, so carrying both is not worth the duplication.

/// `a * b` widened to 64 bits. Exact: the product of two `i32`s always
/// fits in `i64`.
#[inline]
pub fn mul32(a: i32, b: i32) -> i64 {
    (a as i64) * (b as i64)
}

/// `a * b` widened to 128 bits, where `a` is already a 64-bit intermediate
/// and `b` is a 32-bit delta. Used to build the 128-bit determinants in
/// [`crate::predicates::edges_cmp_x_at_y`].
#[inline]
pub fn mul64x32(a: i64, b: i32) -> i128 {
    (a as i128) * (b as i128)
}

/// `a * b` widened to 128 bits from two 64-bit operands.
#[inline]
pub fn mul64(a: i64, b: i64) -> i128 {
    (a as i128) * (b as i128)
}

/// Three-way comparison matching the sign convention used throughout the
/// predicates module: negative means `a < b`, zero means equal, positive
/// means `a > b`.
#[inline]
pub fn cmp64(a: i64, b: i64) -> i32 {
    match a.cmp(&b) {
        core::cmp::Ordering::Less => -1,
        core::cmp::Ordering::Equal => 0,
        core::cmp::Ordering::Greater => 1,
    }
}

#[inline]
pub fn cmp128(a: i128, b: i128) -> i32 {
    match a.cmp(&b) {
        core::cmp::Ordering::Less => -1,
        core::cmp::Ordering::Equal => 0,
        core::cmp::Ordering::Greater => 1,
    }
}

/// Sentinel remainder returned by [`div_96_64`] on overflow: "the quotient
/// does not fit in 32 bits". Mirrors borast's behaviour of returning the
/// divisor itself as an overflow flag in the remainder slot.
pub const DIVREM_OVERFLOW: i64 = i64::MAX;

/// A 96-bit-numerator-by-64-bit-denominator division producing a 32-bit
/// quotient and a 64-bit remainder, saturating on overflow.
///
/// This is the core of `fixed_mul_div_floor`: the numerator `num` is a
/// 128-bit value that is known (by construction, from the 32-bit-delta
/// precondition) to actually fit in about 96 meaningful bits, and `den`
/// is a nonzero 64-bit denominator. Returns `(quotient, remainder)`
/// rounded toward negative infinity (floor division), i.e. remainder is
/// always the same sign as `den` (non-negative here since every caller in
/// this crate passes a positive `den`).
///
/// On overflow (the true quotient does not fit in `i32`) the quotient
/// saturates to `i32::MAX` or `i32::MIN` and the remainder is set to
/// [`DIVREM_OVERFLOW`] so callers that care can detect it; callers that
/// don't care (because the precondition guarantees no overflow for
/// well-formed input) can ignore the remainder.
pub fn div_96_64_floor(num: i128, den: i64) -> (i32, i64) {
    debug_assert!(den > 0, "div_96_64_floor requires a positive denominator");

    let den128 = den as i128;
    // Floor division: round toward negative infinity, not toward zero.
    let mut quo = num.div_euclid(den128);
    let rem = num.rem_euclid(den128);

    if quo > i32::MAX as i128 {
        (i32::MAX, DIVREM_OVERFLOW)
    } else if quo < i32::MIN as i128 {
        (i32::MIN, DIVREM_OVERFLOW)
    } else {
        quo = quo.clamp(i32::MIN as i128, i32::MAX as i128);
        (quo as i32, rem as i64)
    }
}

/// Returns `floor(a * b / c)` using a 64-bit intermediate product, rounded
/// toward negative infinity (not truncated toward zero). `c` must be
/// strictly positive; this is the only shape the sweep ever needs (`c` is
/// always an edge's `dy`, and edges with `dy == 0` never enter the sweep).
///
/// Used to compute the x coordinate of an edge at a query y:
/// `x = p1.x + fixed_mul_div_floor(y - p1.y, p2.x - p1.x, p2.y - p1.y)`.
#[inline]
pub fn fixed_mul_div_floor(a: i32, b: i32, c: i32) -> i32 {
    debug_assert!(c > 0, "fixed_mul_div_floor requires a positive divisor");
    let num = mul32(a, b) as i128;
    let (quo, _rem) = div_96_64_floor(num, c as i64);
    quo
}
