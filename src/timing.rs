use crate::utils::num::u128_to_u64_saturating;
use std::time::Instant;

/// Runs `f` and returns its value with the elapsed wall-clock time in whole milliseconds.
pub fn measure_millis<T, F>(f: F) -> (T, u64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    let ms = u128_to_u64_saturating(start.elapsed().as_millis());
    (value, ms)
}
