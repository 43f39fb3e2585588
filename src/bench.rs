//! Size sweep: one single-shot comparison per dataset size.

use crate::errors::BenchError;
use crate::pipeline::Strategy;
use crate::timing::measure_millis;
use crate::utils::num::usize_to_u64;
use crate::Workbench;
use serde::Serialize;
use std::io::Write;

pub const DEFAULT_SWEEP_SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub dataset_size: usize,
    pub strategy: Strategy,
    pub duration_ms: u64,
    pub result_count: usize,
}

/// Outcome of one size: a row per strategy plus whether their outputs agreed.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub rows: Vec<SweepRow>,
    pub results_match: bool,
}

#[must_use]
pub fn sweep_size(size: usize) -> SweepPoint {
    let bench = Workbench::with_size(size);
    let mut rows = Vec::with_capacity(Strategy::ALL.len());
    let mut outputs = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let (pairs, ms) = measure_millis(|| bench.process(strategy));
        crate::bench_log!(
            "{{\"bench\":\"sweep\",\"strategy\":\"{}\",\"duration_ms\":{},\"result_count\":{},\"dataset_size\":{}}}",
            strategy.label(),
            ms,
            usize_to_u64(pairs.len()),
            usize_to_u64(size)
        );
        rows.push(SweepRow { dataset_size: size, strategy, duration_ms: ms, result_count: pairs.len() });
        outputs.push(pairs);
    }
    let results_match = outputs.windows(2).all(|w| w[0] == w[1]);
    if !results_match {
        log::warn!("strategies disagree at dataset_size={size}");
    }
    SweepPoint { rows, results_match }
}

#[must_use]
pub fn sweep(sizes: &[usize]) -> Vec<SweepPoint> {
    sizes.iter().map(|&n| sweep_size(n)).collect()
}

/// Writes rows as CSV with header `dataset_size,strategy,duration_ms,result_count`.
///
/// # Errors
/// Returns an error if a record cannot be written.
pub fn write_csv<W: Write>(points: &[SweepPoint], w: W) -> Result<(), BenchError> {
    let mut wtr = csv::Writer::from_writer(w);
    for row in points.iter().flat_map(|p| p.rows.iter()) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_rows_per_strategy() {
        let points = sweep(&[0, 3, 10]);
        assert_eq!(points.len(), 3);
        for p in &points {
            assert!(p.results_match);
            assert_eq!(p.rows.len(), 2);
            assert_eq!(p.rows[0].strategy, Strategy::Lists);
            assert_eq!(p.rows[1].strategy, Strategy::Sequences);
        }
        assert_eq!(points[1].rows[0].result_count, 2);
        assert_eq!(points[2].rows[1].result_count, 5);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let points = sweep(&[4]);
        let mut buf = Vec::new();
        write_csv(&points, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "dataset_size,strategy,duration_ms,result_count");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("4,lists,"));
        assert!(lines[2].starts_with("4,sequences,"));
        assert!(lines[2].ends_with(",2"));
    }
}
