// Catalog module: in-memory table, column schema and the per-row driver.

pub mod batch;
pub mod columns;
pub mod table;

pub use batch::{categorize_table, BatchOptions, RunSummary};
pub use columns::ColumnMap;
pub use table::CatalogTable;
