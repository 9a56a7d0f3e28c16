use crate::analysis::StrategicSummary;
use crate::data::{
    ConfigCatalog, Entity, MISSILE_SYSTEMS, MODERNIZATION_LEVELS, NAVAL_ASSETS,
    RESPONSE_CAPACITIES, SANCTIONS_TIMELINE, THREAT_MATRIX,
};
use crate::engine::{
    generate_with, AdjustmentPolicy, Dataset, SimulationOptions, YearRange, YEAR_COLUMN,
};
use crate::export::{dataset_to_json, export_table_csv};

pub const DEFAULT_SELECTOR: &str = "Forces Armées de la RII";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Simulate,
    Summary,
    Resolve,
    Entities,
    Catalog,
    Export,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("simulate") => Some(Command::Simulate),
        Some("summary") => Some(Command::Summary),
        Some("resolve") => Some(Command::Resolve),
        Some("entities") => Some(Command::Entities),
        Some("catalog") => Some(Command::Catalog),
        Some("export") => Some(Command::Export),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let Some(command) = parse_command(args) else {
        eprintln!(
            "usage: defense-indicators <simulate|summary|resolve|entities|catalog|export>"
        );
        return 2;
    };

    let catalog = match ConfigCatalog::from_env() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("configuration overlay error: {err}");
            return 1;
        }
    };

    match command {
        Command::Simulate => handle_simulate(&catalog, args),
        Command::Summary => handle_summary(&catalog, args),
        Command::Resolve => handle_resolve(&catalog, args),
        Command::Entities => handle_entities(),
        Command::Catalog => handle_catalog(args),
        Command::Export => handle_export(&catalog, args),
    }
}

/// First positional argument after the command, skipping flags.
fn positional(args: &[String], position: usize) -> Option<&str> {
    args.iter()
        .skip(2)
        .filter(|arg| !arg.starts_with("--"))
        .nth(position)
        .map(String::as_str)
}

fn options_from_flags(args: &[String]) -> SimulationOptions {
    let adjustment_policy = if args.iter().any(|arg| arg == "--first-match") {
        AdjustmentPolicy::FirstMatch
    } else {
        AdjustmentPolicy::LastMatch
    };
    SimulationOptions { adjustment_policy }
}

fn run_generate(catalog: &ConfigCatalog, args: &[String]) -> Result<Dataset, i32> {
    let selector = positional(args, 0).unwrap_or(DEFAULT_SELECTOR);
    generate_with(
        catalog,
        selector,
        YearRange::default(),
        &options_from_flags(args),
    )
    .map_err(|err| {
        eprintln!("simulation failed: {err}");
        1
    })
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize {what}: {err}");
            1
        }
    }
}

fn handle_simulate(catalog: &ConfigCatalog, args: &[String]) -> i32 {
    let dataset = match run_generate(catalog, args) {
        Ok(dataset) => dataset,
        Err(code) => return code,
    };

    if args.iter().any(|arg| arg == "--table") {
        let names: Vec<&str> = dataset.table.column_names().collect();
        println!("{}", names.join("\t"));
        for year in dataset.table.years() {
            if let Some(row) = dataset.table.row(*year) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|(name, value)| {
                        if *name == YEAR_COLUMN {
                            year.to_string()
                        } else {
                            format!("{value:.3}")
                        }
                    })
                    .collect();
                println!("{}", cells.join("\t"));
            }
        }
        return 0;
    }

    match dataset_to_json(&dataset) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize dataset: {err}");
            1
        }
    }
}

fn handle_summary(catalog: &ConfigCatalog, args: &[String]) -> i32 {
    let dataset = match run_generate(catalog, args) {
        Ok(dataset) => dataset,
        Err(code) => return code,
    };
    match StrategicSummary::from_table(&dataset.table) {
        Some(summary) => print_json(&summary, "summary"),
        None => {
            eprintln!("no rows to summarize");
            1
        }
    }
}

fn handle_resolve(catalog: &ConfigCatalog, args: &[String]) -> i32 {
    let selector = positional(args, 0).unwrap_or(DEFAULT_SELECTOR);
    print_json(&catalog.resolve(selector), "configuration")
}

fn handle_entities() -> i32 {
    println!("branches:");
    for entity in Entity::BRANCHES {
        println!("  {entity}");
    }
    println!("programs:");
    for entity in Entity::PROGRAMS {
        println!("  {entity}");
    }
    0
}

fn handle_catalog(args: &[String]) -> i32 {
    match positional(args, 0) {
        Some("missiles") => print_json(&MISSILE_SYSTEMS, "missile catalog"),
        Some("naval") => print_json(&NAVAL_ASSETS, "naval catalog"),
        Some("sanctions") => print_json(&SANCTIONS_TIMELINE, "sanctions timeline"),
        Some("threats") => print_json(&THREAT_MATRIX, "threat matrix"),
        Some("responses") => print_json(&RESPONSE_CAPACITIES, "response capacities"),
        Some("modernization") => print_json(&MODERNIZATION_LEVELS, "modernization levels"),
        _ => {
            eprintln!(
                "usage: defense-indicators catalog \
                 <missiles|naval|sanctions|threats|responses|modernization>"
            );
            2
        }
    }
}

fn handle_export(catalog: &ConfigCatalog, args: &[String]) -> i32 {
    let (Some(selector), Some(path)) = (positional(args, 0), positional(args, 1)) else {
        eprintln!("usage: defense-indicators export <selector> <path.csv>");
        return 2;
    };

    let dataset = match generate_with(
        catalog,
        selector,
        YearRange::default(),
        &options_from_flags(args),
    ) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            return 1;
        }
    };

    match export_table_csv(path, &dataset.table) {
        Ok(()) => {
            println!(
                "export complete: rows={}, columns={}, path='{}'",
                dataset.table.len(),
                dataset.table.columns().len(),
                path
            );
            0
        }
        Err(err) => {
            eprintln!("export failed: {err}");
            1
        }
    }
}
