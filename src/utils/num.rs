//! Numeric utilities: centralized integer conversions for timings and counts.

#[inline]
#[must_use]
pub fn usize_to_u64(v: usize) -> u64 {
    u64::try_from(v).unwrap_or(u64::MAX)
}

#[inline]
#[must_use]
pub fn u128_to_u64_saturating(v: u128) -> u64 {
    if v > u128::from(u64::MAX) { u64::MAX } else { v as u64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u128_saturates() {
        assert_eq!(u128_to_u64_saturating(0), 0);
        assert_eq!(u128_to_u64_saturating(1234), 1234);
        assert_eq!(u128_to_u64_saturating(u128::from(u64::MAX) + 1), u64::MAX);
    }

    #[test]
    fn usize_widens() {
        assert_eq!(usize_to_u64(50_000), 50_000);
    }
}
