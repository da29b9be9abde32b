use ginitree::{DecisionTree, Table};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn main() {
    // Run with RUST_LOG=ginitree=trace to see the training diagnostics.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let table = Table::from_str_rows(
        &["Color", "Diameter", "Label"],
        &[
            &["Green", "3", "Apple"],
            &["Yellow", "3", "Apple"],
            &["Red", "1", "Grape"],
            &["Red", "1", "Grape"],
            &["Yellow", "3", "Lemon"],
        ],
    );

    let tree = DecisionTree::train(&table).expect("fruit table should train");

    println!(
        "Trained a tree with {} nodes ({} leaves), depth {}:\n",
        tree.node_count(),
        tree.leaf_count(),
        tree.depth()
    );
    println!("{}", tree.dump());

    let queries = [
        vec![("Color", "Red"), ("Diameter", "1")],
        vec![("Color", "Green"), ("Diameter", "3")],
        vec![("Color", "Yellow"), ("Diameter", "3")],
        vec![("Color", "Blue"), ("Diameter", "7")],
    ];

    for query in &queries {
        match tree.answer(&record(query)) {
            Ok(answer) => println!(
                "{:?} -> {} ({}% confidence)",
                query, answer.label, answer.confidence
            ),
            Err(err) => println!("{query:?} -> rejected: {err}"),
        }
    }

    // Malformed records come back as typed errors, not panics.
    let bad = record(&[("Color", "Red")]);
    if let Err(err) = tree.answer(&bad) {
        println!("\nIncomplete record rejected: {err}");
    }
}
