use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use csv_async::AsyncWriterBuilder;
use tokio::fs::{self, File, OpenOptions};

use crate::models::PriceReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The store did not exist; it was created with a header row.
    Created,
    /// Rows were added to an existing store.
    Appended,
    /// Nothing to write; the store was left untouched.
    Skipped,
}

/// Appends readings to the CSV store, creating it with a header when absent.
///
/// Creation uses `create_new`, so deciding whether a header is needed and
/// creating the file are a single step. Rows are neither validated nor
/// deduplicated: appending the same batch twice stores it twice. The store is
/// not locked, so concurrent runs on the same file are not supported.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub async fn append_readings(path: &Path, readings: &[PriceReading]) -> Result<AppendOutcome> {
    if readings.is_empty() {
        return Ok(AppendOutcome::Skipped);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let (file, outcome) = open_store(path).await?;

    let mut serializer = AsyncWriterBuilder::new()
        .has_headers(outcome == AppendOutcome::Created)
        .create_serializer(file);

    for reading in readings {
        serializer
            .serialize(reading)
            .await
            .with_context(|| format!("Failed to write row to {}", path.display()))?;
    }

    serializer
        .flush()
        .await
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(outcome)
}

async fn open_store(path: &Path) -> Result<(File, AppendOutcome)> {
    match OpenOptions::new().write(true).create_new(true).open(path).await {
        Ok(file) => Ok((file, AppendOutcome::Created)),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            let file = OpenOptions::new()
                .append(true)
                .open(path)
                .await
                .with_context(|| format!("Failed to open {} for appending", path.display()))?;
            Ok((file, AppendOutcome::Appended))
        }
        Err(e) => Err(e).with_context(|| format!("Failed to create {}", path.display())),
    }
}
