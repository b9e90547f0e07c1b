//! Ripple demo - runs the sequence helpers and the debouncer on sample data

use std::time::Duration;

use anyhow::Result;
use ripple_core::{debounce, filter_array, group_by};

#[derive(Debug, Clone)]
struct Item {
    category: &'static str,
    name: &'static str,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let numbers = [1, 2, 3, 4, 5, 6];
    let evens = filter_array(&numbers, |n, _| n % 2 == 0);
    println!("Even numbers: {:?}", evens);

    let items = [
        Item { category: "fruit", name: "apple" },
        Item { category: "vegetable", name: "carrot" },
        Item { category: "fruit", name: "banana" },
    ];
    let grouped = group_by(&items, |item| item.category);
    println!("Grouped items:");
    for (category, members) in &grouped {
        let names: Vec<_> = members.iter().map(|item| item.name).collect();
        println!("  {}: {:?}", category, names);
    }

    let delay = Duration::from_millis(1000);
    let log = debounce(|msg: &'static str| println!("{}", msg), delay);
    log("This call is superseded and never prints");
    log("This will be debounced");

    // Give the trailing invocation time to fire before the process exits.
    tokio::time::sleep(delay + Duration::from_millis(100)).await;

    Ok(())
}
