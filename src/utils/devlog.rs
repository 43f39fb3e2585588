//! Bench lines for strategy runs. The comparison runner and the size sweep emit one
//! JSON line per strategy (`strategy`, `duration_ms`, `result_count`, `dataset_size`)
//! on the `seqbench::bench` target, which `--log-dir` routes to `bench.log`.
//! Tests capture the same lines through a per-thread sink.

use std::cell::RefCell;

/// Log target for bench lines.
pub const BENCH_TARGET: &str = "seqbench::bench";

thread_local! {
    static TL_SINK: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Guard that disables the thread-local sink on drop.
pub struct BenchSinkGuard;
impl Drop for BenchSinkGuard {
    fn drop(&mut self) {
        TL_SINK.with(|s| *s.borrow_mut() = None);
    }
}

/// Enable the thread-local sink for the current thread. Returns a guard that will disable it on drop.
pub fn enable_thread_sink() -> BenchSinkGuard {
    TL_SINK.with(|s| *s.borrow_mut() = Some(Vec::new()));
    BenchSinkGuard
}

/// Push a message into the thread-local sink if enabled.
pub fn write_str(msg: &str) {
    TL_SINK.with(|s| {
        if let Some(buf) = s.borrow_mut().as_mut() {
            buf.push(msg.to_owned());
        }
    });
}

/// Drain and return the captured messages for the current thread. If disabled, returns an empty vec.
pub fn drain() -> Vec<String> {
    TL_SINK.with(|s| match s.borrow_mut().as_mut() {
        Some(buf) => std::mem::take(buf),
        None => Vec::new(),
    })
}

/// Records a bench line in the thread sink and on the `seqbench::bench` target at TRACE.
#[macro_export]
macro_rules! bench_log {
    ($($arg:tt)*) => {{
        let __s = format!($($arg)*);
        $crate::utils::devlog::write_str(&__s);
        log::log!(target: $crate::utils::devlog::BENCH_TARGET, log::Level::Trace, "{}", __s);
    }};
}
