use crate::product::Product;

use super::types::PricePair;

/// Filters then maps, materializing the output of each stage.
#[must_use]
pub fn process_with_lists(products: &[Product]) -> Vec<PricePair> {
    let purchased: Vec<&Product> = products.iter().filter(|p| p.purchased).collect();
    purchased.into_iter().map(Product::price_pair).collect()
}
