use crate::catalog::CatalogTable;
use crate::model::CatalogError;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const BACKUP_PREFIX: &str = "categorization_backup_";

/// Trait defining the interface for a catalog persistence backend.
pub trait CatalogStore {
    fn load(&self) -> Result<CatalogTable, CatalogError>;
    fn save(&self, table: &CatalogTable) -> Result<(), CatalogError>;
    /// Copies the current catalog aside and returns the copy's path.
    fn backup(&self) -> Result<PathBuf, CatalogError>;
}

pub struct CsvStore {
    path: PathBuf,
    backup_dir: PathBuf,
    max_backups: usize,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>, max_backups: usize) -> Self {
        Self {
            path: path.into(),
            backup_dir: backup_dir.into(),
            max_backups,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fails early when another program holds the file.
    fn check_writable(&self) -> Result<(), CatalogError> {
        match OpenOptions::new().read(true).write(true).open(&self.path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(CatalogError::NotFound(self.path.display().to_string()))
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                Err(CatalogError::Locked(self.path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the oldest backups beyond `max_backups`.
    fn rotate_backups(&self) -> Result<(), CatalogError> {
        let mut backups: Vec<PathBuf> = fs::read_dir(&self.backup_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(BACKUP_PREFIX) && n.ends_with(".csv"))
            })
            .collect();

        // Timestamped names sort chronologically; newest first.
        backups.sort_by(|a, b| b.cmp(a));

        for old in backups.iter().skip(self.max_backups) {
            match fs::remove_file(old) {
                Ok(()) => info!("Deleted old backup: {}", old.display()),
                Err(e) => warn!("Failed to delete old backup {}: {}", old.display(), e),
            }
        }
        Ok(())
    }
}

/// Decodes each field as UTF-8, replacing invalid sequences.
fn decode_record(record: &csv::ByteRecord, lossy: &mut bool) -> Vec<String> {
    record
        .iter()
        .map(|field| match std::str::from_utf8(field) {
            Ok(text) => text.to_string(),
            Err(_) => {
                *lossy = true;
                String::from_utf8_lossy(field).into_owned()
            }
        })
        .collect()
}

impl CatalogStore for CsvStore {
    fn load(&self) -> Result<CatalogTable, CatalogError> {
        self.check_writable()?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let mut lossy = false;
        let headers = decode_record(reader.byte_headers()?, &mut lossy);
        let mut rows = Vec::new();
        for record in reader.byte_records() {
            rows.push(decode_record(&record?, &mut lossy));
        }
        if lossy {
            warn!(
                "{} is not valid UTF-8 (exported as CP-1252?); undecodable bytes were replaced",
                self.path.display()
            );
        }

        info!(
            "Loaded {} rows from {} (columns: {})",
            rows.len(),
            self.path.display(),
            headers.join(", ")
        );
        Ok(CatalogTable::new(headers, rows))
    }

    fn save(&self, table: &CatalogTable) -> Result<(), CatalogError> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn backup(&self) -> Result<PathBuf, CatalogError> {
        if !self.path.exists() {
            return Err(CatalogError::NotFound(self.path.display().to_string()));
        }
        fs::create_dir_all(&self.backup_dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let target = self
            .backup_dir
            .join(format!("{}{}.csv", BACKUP_PREFIX, timestamp));
        fs::copy(&self.path, &target)?;
        info!("Backup created: {}", target.display());

        self.rotate_backups()?;
        Ok(target)
    }
}
