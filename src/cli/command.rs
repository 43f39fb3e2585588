use std::path::PathBuf;

pub enum Command {
    /// One lists-vs-sequences comparison over the configured dataset size.
    Compare,
    /// One comparison per size; optionally writes the rows as CSV.
    Sweep {
        sizes: Vec<usize>,
        csv: Option<PathBuf>,
    },
}
