// Run with: cargo run --release --bin benchmark_strategies
// Results saved to benchmarks/results/benchmark_strategies_{datetime}.csv

use std::fs::{File, create_dir_all};
use std::path::PathBuf;

use seqbench::bench::{self, DEFAULT_SWEEP_SIZES};
use seqbench::errors::BenchError;

fn main() -> Result<(), BenchError> {
    seqbench::logger::configure_logging(None, Some("info"), None)?;

    let points = bench::sweep(&DEFAULT_SWEEP_SIZES);
    for p in &points {
        assert!(p.results_match, "lists and sequences disagree");
        for row in &p.rows {
            println!(
                "size={} strategy={} duration_ms={} result_count={}",
                row.dataset_size, row.strategy, row.duration_ms, row.result_count
            );
        }
    }

    let mut root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.push("benchmarks/results");
    create_dir_all(&root)?;

    let datetime = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = root.join(format!("benchmark_strategies_{datetime}.csv"));
    bench::write_csv(&points, File::create(&path)?)?;
    println!("Results written to {}", path.display());
    Ok(())
}
