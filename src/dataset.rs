//! Deterministic synthetic product data.
//!
//! Every field is derived from the record's 0-based index, so two datasets of the
//! same size are always equal.

use crate::product::Product;

pub const DEFAULT_DATASET_SIZE: usize = 100_000;

/// Builds the record at a 0-based index.
#[must_use]
pub fn product_at(index: usize) -> Product {
    let n = index + 1;
    Product {
        name: format!("Product {n}"),
        description: format!("Description of product {n}"),
        purchased: index % 2 == 0,
        price: n as f64 * 10.0,
    }
}

/// Yields `product_at(i)` for `i` in `0..len`.
#[derive(Debug, Clone)]
pub struct ProductGenerator {
    pos: usize,
    len: usize,
}

impl ProductGenerator {
    #[must_use]
    pub fn new(len: usize) -> Self {
        ProductGenerator { pos: 0, len }
    }
}

impl Iterator for ProductGenerator {
    type Item = Product;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let p = product_at(self.pos);
        self.pos += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.len - self.pos;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for ProductGenerator {}

/// Generates `n` products in index order.
#[must_use]
pub fn generate_products(n: usize) -> Vec<Product> {
    ProductGenerator::new(n).collect()
}
