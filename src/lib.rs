pub mod bench;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod logger;
pub mod pipeline;
pub mod product;
pub mod report;
pub mod timing;
pub mod utils;

use crate::config::BenchConfig;
use crate::errors::BenchError;
use crate::pipeline::{PricePair, Strategy};
use crate::product::Product;

/// An in-memory product dataset shared read-only by both pipelines.
pub struct Workbench {
    products: Vec<Product>,
}

impl Workbench {
    /// Generates a dataset of `size` products.
    pub fn with_size(size: usize) -> Self {
        let products = dataset::generate_products(size);
        log::debug!("generated dataset size={}", products.len());
        Workbench { products }
    }

    /// Borrows the generated products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Runs one strategy over the dataset.
    pub fn process(&self, strategy: Strategy) -> Vec<PricePair> {
        strategy.process(&self.products)
    }

    /// Lazily iterates the (name, price) pairs of purchased products.
    pub fn prices(&self) -> pipeline::PriceSequence<'_> {
        pipeline::price_sequence(&self.products)
    }
}

/// Runs `cmd` with the given config, writing the report to stdout.
///
/// # Errors
/// Returns an error if stdout or the sweep CSV cannot be written, or the JSON report fails to serialize.
pub fn run(cfg: &BenchConfig, cmd: cli::Command) -> Result<(), BenchError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(cfg, cmd, &mut out)
}
