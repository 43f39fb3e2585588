use serde::Serialize;

/// A product record. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub purchased: bool,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, description: impl Into<String>, purchased: bool, price: f64) -> Self {
        Product { name: name.into(), description: description.into(), purchased, price }
    }

    /// The (name, price) projection used by both pipelines.
    #[must_use]
    pub fn price_pair(&self) -> (String, f64) {
        (self.name.clone(), self.price)
    }
}
