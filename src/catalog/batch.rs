use crate::analyzer::Classifier;
use crate::catalog::columns::ColumnMap;
use crate::catalog::table::CatalogTable;
use crate::model::{CatalogError, Category};
use std::collections::HashMap;
use tracing::{debug, info};

/// Upstream marker for products the scrape could not find.
pub const NOT_FOUND: &str = "Product not found";

const PROGRESS_EVERY: usize = 100;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub target: usize,
    pub overwrite: bool,
    pub low_confidence: f64,
    /// Processed rows between checkpoints; 0 disables.
    pub checkpoint_every: usize,
}

/// Counters and confidence figures of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub total_rows: usize,
    pub processed: usize,
    pub skipped: usize,
    pub not_found: usize,
    pub unclassified: usize,
    pub low_confidence: usize,
    pub confidences: Vec<f64>,
    /// Final target column values, most frequent first.
    pub distribution: Vec<(String, usize)>,
}

impl RunSummary {
    pub fn average_confidence(&self) -> Option<f64> {
        if self.confidences.is_empty() {
            return None;
        }
        Some(self.confidences.iter().sum::<f64>() / self.confidences.len() as f64)
    }

    pub fn min_confidence(&self) -> Option<f64> {
        self.confidences.iter().copied().reduce(f64::min)
    }

    pub fn max_confidence(&self) -> Option<f64> {
        self.confidences.iter().copied().reduce(f64::max)
    }
}

fn is_not_found(table: &CatalogTable, row: usize, columns: &ColumnMap) -> bool {
    [columns.hint, Some(columns.description), columns.image_url]
        .into_iter()
        .flatten()
        .any(|col| table.cell(row, col) == Some(NOT_FOUND))
}

/// Categorizes every row of `table` in place, writing labels into the
/// target column. `checkpoint` receives the table every
/// `checkpoint_every` processed rows.
pub fn categorize_table<C, F>(
    table: &mut CatalogTable,
    columns: &ColumnMap,
    classifier: &C,
    opts: &BatchOptions,
    mut checkpoint: F,
) -> Result<RunSummary, CatalogError>
where
    C: Classifier + ?Sized,
    F: FnMut(&CatalogTable) -> Result<(), CatalogError>,
{
    let mut summary = RunSummary {
        total_rows: table.len(),
        ..RunSummary::default()
    };

    for row in 0..table.len() {
        if !opts.overwrite && table.cell(row, opts.target).is_some() {
            summary.skipped += 1;
            continue;
        }

        if is_not_found(table, row, columns) {
            debug!("Row {}: source marked as not found", row + 1);
            table.set_cell(row, opts.target, NOT_FOUND);
            summary.not_found += 1;
        } else {
            let hint = columns.hint.and_then(|c| table.cell(row, c));
            let description = table.cell(row, columns.description);
            let result = classifier.categorize(hint, description);
            debug!(
                "Row {}: {} ({:.1}%)",
                row + 1,
                result.category,
                result.confidence
            );

            if result.category == Category::Unclassified {
                summary.unclassified += 1;
            } else if result.confidence < opts.low_confidence {
                summary.low_confidence += 1;
            }
            summary.confidences.push(result.confidence);
            table.set_cell(row, opts.target, result.category.label());
        }
        summary.processed += 1;

        if summary.processed % PROGRESS_EVERY == 0 {
            match summary.average_confidence() {
                Some(avg) => info!(
                    "Processed {} products... (avg confidence: {:.1}%)",
                    summary.processed, avg
                ),
                None => info!("Processed {} products...", summary.processed),
            }
        }

        if opts.checkpoint_every > 0 && summary.processed % opts.checkpoint_every == 0 {
            info!("Saving progress... ({} products processed)", summary.processed);
            checkpoint(table)?;
        }
    }

    summary.distribution = distribution(table, opts.target);
    Ok(summary)
}

fn distribution(table: &CatalogTable, col: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in 0..table.len() {
        if let Some(value) = table.cell(row, col) {
            *counts.entry(value).or_default() += 1;
        }
    }

    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}
