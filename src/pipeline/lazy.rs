use crate::product::Product;
use std::slice;

use super::types::PricePair;

/// Deferred filter-then-map over a borrowed product slice.
///
/// Nothing is evaluated until the sequence is advanced; each call to `next`
/// walks the input up to the next purchased record and yields its pair.
#[derive(Clone)]
pub struct PriceSequence<'a> {
    inner: slice::Iter<'a, Product>,
}

impl PriceSequence<'_> {
    pub fn advance(&mut self) -> Option<PricePair> {
        self.inner.by_ref().find(|p| p.purchased).map(Product::price_pair)
    }

    /// Materializes the remaining pairs.
    #[must_use]
    pub fn to_vec(self) -> Vec<PricePair> {
        self.collect()
    }
}

impl Iterator for PriceSequence<'_> {
    type Item = PricePair;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl std::iter::FusedIterator for PriceSequence<'_> {}

#[must_use]
pub fn price_sequence(products: &[Product]) -> PriceSequence<'_> {
    PriceSequence { inner: products.iter() }
}

/// Single-pass evaluation; only the final result is collected.
#[must_use]
pub fn process_with_sequences(products: &[Product]) -> Vec<PricePair> {
    price_sequence(products).to_vec()
}
