mod analyzer;
mod catalog;
mod config;
mod model;
mod normalizer;
mod storage;

use analyzer::Categorizer;
use catalog::{categorize_table, BatchOptions, ColumnMap, RunSummary};
use config::{load_config_or_default, AppConfig};
use std::error::Error;
use std::process::ExitCode;
use storage::{CatalogStore, CsvStore};
use tracing::{error, info, warn};

const CONFIG_PATH: &str = "config.json";

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config_or_default(CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let cli_path = std::env::args().nth(1);
    match run(&config, cli_path.as_deref()) {
        Ok(summary) => {
            report(&summary, config.thresholds.low_confidence);
            info!("Categorization completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Categorization failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads the catalog, backs it up, categorizes every row and saves it back.
fn run(config: &AppConfig, cli_path: Option<&str>) -> Result<RunSummary, Box<dyn Error>> {
    let catalog_path = config.resolve_catalog(cli_path)?;
    let store = CsvStore::new(
        &catalog_path,
        config.resolve_backup_dir(&catalog_path),
        config.max_backups,
    );

    info!("Reading catalog: {}", store.path().display());
    let mut table = store.load()?;

    let columns = ColumnMap::detect(&table.headers, &config.columns, &config.target_column)?;
    let column_name = |idx: Option<usize>| {
        idx.map(|i| table.headers[i].clone())
            .unwrap_or_else(|| "not found".to_string())
    };
    info!("Hint column: {}", column_name(columns.hint));
    info!("Description column: {}", column_name(Some(columns.description)));
    info!("Image URL column: {}", column_name(columns.image_url));

    let target = match table.column_index(&config.target_column) {
        Some(idx) => {
            let filled = (0..table.len()).filter(|&r| table.cell(r, idx).is_some()).count();
            info!(
                "Column '{}' already has {} values filled",
                config.target_column, filled
            );
            if filled > 0 && !config.overwrite {
                info!("Keeping existing values, only filling empty cells");
            }
            idx
        }
        None => {
            info!("Created new column: {}", config.target_column);
            table.ensure_column(&config.target_column)
        }
    };

    store.backup()?;

    let categorizer = Categorizer::new(config.thresholds.clone())?;
    let opts = BatchOptions {
        target,
        overwrite: config.overwrite,
        low_confidence: config.thresholds.low_confidence,
        checkpoint_every: config.checkpoint_every,
    };

    info!("Processing {} products...", table.len());
    let summary = categorize_table(&mut table, &columns, &categorizer, &opts, |t| store.save(t))?;

    info!("Saving final results...");
    store.save(&table)?;
    info!("Results saved to: {}", store.path().display());

    Ok(summary)
}

fn report(summary: &RunSummary, low_confidence: f64) {
    info!("Total rows: {}", summary.total_rows);
    info!("Products processed: {}", summary.processed);
    info!("Products skipped: {}", summary.skipped);
    info!("Products marked as not found: {}", summary.not_found);
    info!("Products left unclassified: {}", summary.unclassified);
    info!("Low confidence (<{:.0}%): {}", low_confidence, summary.low_confidence);

    if let (Some(avg), Some(min), Some(max)) = (
        summary.average_confidence(),
        summary.min_confidence(),
        summary.max_confidence(),
    ) {
        info!(
            "Confidence: avg {:.1}% | min {:.1}% | max {:.1}%",
            avg, min, max
        );
    }

    info!("Category distribution:");
    for (label, count) in &summary.distribution {
        info!("  {}: {}", label, count);
    }

    if summary.low_confidence > 0 {
        warn!(
            "{} products have low confidence; consider reviewing them manually",
            summary.low_confidence
        );
    }
    if summary.unclassified > 0 {
        warn!(
            "{} products did not match any category well enough",
            summary.unclassified
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn run_labels_the_catalog_and_keeps_a_backup() {
        let dir: PathBuf =
            std::env::temp_dir().join(format!("catalog-sorter-run-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("products.csv");
        fs::write(
            &path,
            "Item Number,Product Name,Description,Image URL\n\
             1,Computer Hardware,Laptop with SSD and keyboard,https://img/1.jpg\n\
             2,,Product not found,\n\
             3,,zebra,\n",
        )
        .unwrap();

        let config = AppConfig {
            backup_dir: Some(dir.join("Backups")),
            ..AppConfig::default()
        };
        let summary = run(&config, path.to_str()).unwrap();
        assert_eq!(summary.processed, 3);
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.unclassified, 1);

        let table = CsvStore::new(&path, dir.join("Backups"), 5).load().unwrap();
        let target = table.column_index("Category").unwrap();
        assert_eq!(target, 4);
        assert_eq!(table.cell(0, target), Some("Computer Hardware Solutions"));
        assert_eq!(table.cell(1, target), Some("Product not found"));
        assert_eq!(table.cell(2, target), Some("Unclassified"));

        let backups: Vec<_> = fs::read_dir(dir.join("Backups")).unwrap().collect();
        assert_eq!(backups.len(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }
}
