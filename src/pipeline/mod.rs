// Two evaluation strategies for the same filter-then-map pipeline
mod eager;
mod lazy;
mod types;

pub use eager::process_with_lists;
pub use lazy::{PriceSequence, price_sequence, process_with_sequences};
pub use types::{PricePair, Strategy};
