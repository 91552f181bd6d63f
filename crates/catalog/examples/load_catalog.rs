use catalog::{Catalog, HeaderMode};
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bourbonlouisville.csv"));

    println!("Loading bourbon catalog from {}...\n", path.display());

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&path, HeaderMode::Present)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let tagged = catalog
        .records()
        .iter()
        .filter(|record| !record.tags().is_empty())
        .count();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Bourbons: {}", catalog.len());
    println!("Distilleries: {}", catalog.distillery_names().len());
    println!("Bourbons with at least one tag: {}", tagged);
    if let Some((first, last)) = catalog.id_range() {
        println!("Id range: {}..={}", first, last);
    }
}
