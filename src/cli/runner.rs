use crate::bench::{self, SweepPoint};
use crate::config::BenchConfig;
use crate::errors::BenchError;
use crate::pipeline::{PricePair, Strategy};
use crate::report;
use crate::timing::measure_millis;
use crate::utils::num::usize_to_u64;
use crate::Workbench;
use serde::Serialize;
use std::io::Write;

use super::command::Command;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyTiming {
    pub strategy: Strategy,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub dataset_size: usize,
    pub result_count: usize,
    pub results_match: bool,
    pub timings: Vec<StrategyTiming>,
}

impl RunReport {
    #[must_use]
    pub fn duration_ms(&self, strategy: Strategy) -> Option<u64> {
        self.timings.iter().find(|t| t.strategy == strategy).map(|t| t.duration_ms)
    }
}

/// Runs a command with the output mode taken from the config.
pub fn run<W: Write>(cfg: &BenchConfig, cmd: Command, out: &mut W) -> Result<(), BenchError> {
    let mode = cfg.output_mode();
    match cmd {
        Command::Compare => run_with_format(cfg, mode, out).map(|_| ()),
        Command::Sweep { sizes, csv } => {
            let sizes = if sizes.is_empty() { bench::DEFAULT_SWEEP_SIZES.to_vec() } else { sizes };
            let points = bench::sweep(&sizes);
            write_sweep(&points, mode, out)?;
            if let Some(path) = csv {
                let file = std::fs::File::create(&path)
                    .map_err(|e| BenchError::Io(format!("{}: {e}", path.display())))?;
                bench::write_csv(&points, file)?;
                log::info!("sweep results written to {}", path.display());
            }
            Ok(())
        }
    }
}

/// Generates the dataset, runs lists then sequences, and writes the report.
///
/// Each strategy's clock covers running the pipeline and writing its result line;
/// the lists run is printed and timed before the sequences run begins.
pub fn run_with_format<W: Write>(
    cfg: &BenchConfig,
    mode: OutputMode,
    out: &mut W,
) -> Result<RunReport, BenchError> {
    let bench = Workbench::with_size(cfg.dataset_size);
    let mut timings = Vec::with_capacity(Strategy::ALL.len());
    let mut outputs: Vec<Vec<PricePair>> = Vec::with_capacity(Strategy::ALL.len());

    for strategy in Strategy::ALL {
        let (res, ms) = measure_millis(|| -> Result<Vec<PricePair>, BenchError> {
            let pairs = bench.process(strategy);
            if mode == OutputMode::Human {
                writeln!(out, "{}", report::result_line(strategy, &pairs))?;
                out.flush()?;
            }
            Ok(pairs)
        });
        let pairs = res?;
        crate::bench_log!(
            "{{\"bench\":\"pipeline\",\"strategy\":\"{}\",\"duration_ms\":{},\"result_count\":{},\"dataset_size\":{}}}",
            strategy.label(),
            ms,
            usize_to_u64(pairs.len()),
            usize_to_u64(bench.len())
        );
        log::info!("strategy={strategy} duration_ms={ms} result_count={}", pairs.len());
        timings.push(StrategyTiming { strategy, duration_ms: ms });
        outputs.push(pairs);
    }

    let results_match = outputs.windows(2).all(|w| w[0] == w[1]);
    if !results_match {
        log::warn!("lists and sequences results differ");
    }
    let summary = RunReport {
        dataset_size: bench.len(),
        result_count: outputs.first().map_or(0, Vec::len),
        results_match,
        timings,
    };

    match mode {
        OutputMode::Human => {
            for t in &summary.timings {
                writeln!(out, "{}", report::timing_line(t.strategy, t.duration_ms))?;
            }
        }
        OutputMode::Plain => {
            for t in &summary.timings {
                writeln!(out, "{}={}", t.strategy.label(), t.duration_ms)?;
            }
            writeln!(out, "result_count={} match={}", summary.result_count, summary.results_match)?;
        }
        OutputMode::Json => {
            writeln!(out, "{}", serde_json::to_string(&summary)?)?;
        }
    }
    out.flush()?;
    Ok(summary)
}

fn write_sweep<W: Write>(points: &[SweepPoint], mode: OutputMode, out: &mut W) -> Result<(), BenchError> {
    match mode {
        OutputMode::Json => {
            let rows: Vec<_> = points.iter().flat_map(|p| p.rows.iter()).collect();
            writeln!(out, "{}", serde_json::to_string(&rows)?)?;
        }
        OutputMode::Human | OutputMode::Plain => {
            for p in points {
                let size = p.rows.first().map_or(0, |r| r.dataset_size);
                let cols: Vec<String> =
                    p.rows.iter().map(|r| format!("{}={}", r.strategy.label(), r.duration_ms)).collect();
                writeln!(out, "size={size} {} match={}", cols.join(" "), p.results_match)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
