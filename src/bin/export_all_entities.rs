//! Export the indicator table of every selectable entity as CSV, plus a JSON index.
//! Run from project root: cargo run --bin export_all_entities [-- out/indicators]

use std::fs;
use std::path::Path;

use defense_indicators::data::{ConfigCatalog, Entity};
use defense_indicators::engine::{generate_with, PriorityGroup, SimulationOptions, YearRange};
use defense_indicators::export::export_table_csv;
use serde::Serialize;

const DEFAULT_OUTPUT_DIR: &str = "out/indicators";

#[derive(Debug, Serialize)]
struct IndexEntry {
    entity: &'static str,
    file: String,
    columns: usize,
    groups: Vec<PriorityGroup>,
}

/// File-system friendly slug: ASCII alphanumerics kept, everything else collapsed to `_`.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    defense_indicators::logging::init()?;

    let dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
    let dir = Path::new(&dir);
    fs::create_dir_all(dir)?;

    let catalog = ConfigCatalog::from_env()?;
    let options = SimulationOptions::default();
    let mut index = Vec::new();

    for entity in Entity::all() {
        let dataset = generate_with(&catalog, entity.name(), YearRange::default(), &options)?;
        let file = format!("{}.csv", slug(entity.name()));
        export_table_csv(dir.join(&file), &dataset.table)?;
        index.push(IndexEntry {
            entity: entity.name(),
            file,
            columns: dataset.table.columns().len(),
            groups: dataset.groups,
        });
    }

    let index_path = dir.join("index.json");
    fs::write(&index_path, serde_json::to_string_pretty(&index)?)?;
    println!("Wrote {} tables and {}", index.len(), index_path.display());
    Ok(())
}
