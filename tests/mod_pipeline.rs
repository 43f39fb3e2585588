use seqbench::Workbench;
use seqbench::dataset::{DEFAULT_DATASET_SIZE, generate_products};
use seqbench::pipeline::{Strategy, price_sequence, process_with_lists, process_with_sequences};

fn pair(name: &str, price: f64) -> (String, f64) {
    (name.to_string(), price)
}

#[test]
fn default_dataset_yields_half_purchased() {
    let products = generate_products(DEFAULT_DATASET_SIZE);
    assert_eq!(products.len(), 100_000);
    let eager = process_with_lists(&products);
    let lazy = process_with_sequences(&products);
    assert_eq!(eager.len(), 50_000);
    assert_eq!(eager, lazy);
    assert_eq!(eager.first(), Some(&pair("Product 1", 10.0)));
    assert_eq!(eager.last(), Some(&pair("Product 99999", 999_990.0)));
}

#[test]
fn empty_dataset_gives_empty_results() {
    let products = generate_products(0);
    assert!(process_with_lists(&products).is_empty());
    assert!(process_with_sequences(&products).is_empty());
}

#[test]
fn single_record_dataset() {
    let products = generate_products(1);
    assert_eq!(process_with_lists(&products), vec![pair("Product 1", 10.0)]);
    assert_eq!(process_with_sequences(&products), vec![pair("Product 1", 10.0)]);
}

#[test]
fn four_record_scenario() {
    let products = generate_products(4);
    assert_eq!(products.iter().map(|p| p.purchased).collect::<Vec<_>>(), vec![true, false, true, false]);
    assert_eq!(products.iter().map(|p| p.price).collect::<Vec<_>>(), vec![10.0, 20.0, 30.0, 40.0]);
    let expected = vec![pair("Product 1", 10.0), pair("Product 3", 30.0)];
    for s in Strategy::ALL {
        assert_eq!(s.process(&products), expected, "strategy {s}");
    }
}

#[test]
fn pipelines_are_idempotent() {
    let bench = Workbench::with_size(1_001);
    for s in Strategy::ALL {
        let first = bench.process(s);
        let second = bench.process(s);
        assert_eq!(first, second);
        assert_eq!(first.len(), 501);
    }
    // the input is untouched by either run
    assert_eq!(bench.products(), generate_products(1_001).as_slice());
}

#[test]
fn lazy_sequence_matches_eager_prefix() {
    let bench = Workbench::with_size(50);
    let eager = bench.process(Strategy::Lists);
    let prefix: Vec<_> = bench.prices().take(5).collect();
    assert_eq!(prefix.as_slice(), &eager[..5]);
    assert_eq!(price_sequence(bench.products()).count(), eager.len());
}
