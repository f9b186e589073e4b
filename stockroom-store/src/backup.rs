use csv::WriterBuilder;
use futures_util::TryStreamExt;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use stockroom_catalog::Product;
use stockroom_core::{ProductRepository, StoreError};
use tracing::info;

use crate::BACKUP_TIMESTAMP_FORMAT;

/// Header row of a backup file, mirroring the product fields
pub const BACKUP_HEADERS: [&str; 4] = ["name", "price", "quantity", "last_updated"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct BackupRecord<'a> {
    name: &'a str,
    price: i64,
    quantity: u32,
    last_updated: String,
}

impl<'a> From<&'a Product> for BackupRecord<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: &product.name,
            price: product.price.get(),
            quantity: product.quantity,
            last_updated: product.last_updated.format(BACKUP_TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Write the whole store to `path`, replacing any previous backup.
pub async fn export_backup(
    repo: &dyn ProductRepository,
    path: impl AsRef<Path>,
) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let written = write_backup(repo, file).await?;
    info!(path = %path.display(), rows = written, "Inventory backed up");
    Ok(written)
}

/// Stream every product into `writer` as CSV, header first. Returns the row count.
pub async fn write_backup<W: Write>(
    repo: &dyn ProductRepository,
    writer: W,
) -> Result<usize, ExportError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(BACKUP_HEADERS)?;

    let mut products = repo.list_all();
    let mut written = 0;
    while let Some(product) = products.try_next().await? {
        wtr.serialize(BackupRecord::from(&product))?;
        written += 1;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(written)
}
