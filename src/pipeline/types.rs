use crate::product::Product;
use serde::Serialize;

/// A purchased product's (name, price).
pub type PricePair = (String, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Eager: each stage materializes a full collection.
    Lists,
    /// Lazy: one deferred pass, only the final result materialized.
    Sequences,
}

impl Strategy {
    /// Execution order of a comparison run.
    pub const ALL: [Strategy; 2] = [Strategy::Lists, Strategy::Sequences];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Lists => "lists",
            Strategy::Sequences => "sequences",
        }
    }

    #[must_use]
    pub fn process(self, products: &[Product]) -> Vec<PricePair> {
        match self {
            Strategy::Lists => super::process_with_lists(products),
            Strategy::Sequences => super::process_with_sequences(products),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
