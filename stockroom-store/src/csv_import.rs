//! Bulk import of inventory sheets into the record store.
//!
//! Two header layouts are understood: the inventory sheet
//! (`product_name, product_quantity, product_price, date_updated`, prices in
//! dollars, dates as `MM/DD/YYYY`) and the layout written by
//! [`crate::backup`] (`name, price, quantity, last_updated`, prices in cents).

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use stockroom_catalog::{parse_quantity, parse_stock_date, Cents, NewProduct, ProductError};
use stockroom_core::{upsert, ProductRepository, StoreError};
use tracing::info;

use crate::backup::BACKUP_HEADERS;
use crate::BACKUP_TIMESTAMP_FORMAT;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unrecognized header row: {0}")]
    UnknownLayout(String),

    #[error("Row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: ProductError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Counts reported after an import
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub rows: usize,
    pub created: usize,
    pub updated: usize,
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    product_name: String,
    product_quantity: String,
    product_price: String,
    date_updated: String,
}

impl SheetRow {
    fn parse(self) -> Result<NewProduct, ProductError> {
        Ok(NewProduct::new(
            self.product_name,
            parse_quantity(&self.product_quantity)?,
            Cents::parse_amount(&self.product_price)?,
            parse_stock_date(&self.date_updated)?,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct BackupRow {
    name: String,
    price: String,
    quantity: String,
    last_updated: String,
}

impl BackupRow {
    fn parse(self) -> Result<NewProduct, ProductError> {
        let price = self
            .price
            .parse::<i64>()
            .map_err(|_| ProductError::InvalidPrice(self.price.clone()))
            .and_then(Cents::from_cents)?;
        let last_updated =
            NaiveDateTime::parse_from_str(&self.last_updated, BACKUP_TIMESTAMP_FORMAT)
                .map_err(|_| ProductError::InvalidDate(self.last_updated.clone()))?;

        Ok(NewProduct::new(
            self.name,
            parse_quantity(&self.quantity)?,
            price,
            last_updated,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Sheet,
    Backup,
}

const SHEET_HEADERS: [&str; 4] = ["product_name", "product_quantity", "product_price", "date_updated"];

fn has_columns(headers: &StringRecord, wanted: &[&str]) -> bool {
    wanted.iter().all(|w| headers.iter().any(|h| h == *w))
}

impl Layout {
    fn detect(headers: &StringRecord) -> Option<Self> {
        if has_columns(headers, &SHEET_HEADERS) {
            Some(Layout::Sheet)
        } else if has_columns(headers, &BACKUP_HEADERS) {
            Some(Layout::Backup)
        } else {
            None
        }
    }
}

/// Import the CSV file at `path`.
pub async fn import_file(
    repo: &dyn ProductRepository,
    path: impl AsRef<Path>,
) -> Result<ImportSummary, ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "Importing inventory");
    import_reader(repo, BufReader::new(file)).await
}

/// Upsert every row of `reader` in file order; the last row for a name wins.
///
/// The first malformed row stops the import. Rows before it stay stored.
pub async fn import_reader<R: Read>(
    repo: &dyn ProductRepository,
    reader: R,
) -> Result<ImportSummary, ImportError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let layout = Layout::detect(&headers)
        .ok_or_else(|| ImportError::UnknownLayout(headers.iter().collect::<Vec<_>>().join(",")))?;

    let mut summary = ImportSummary::default();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        // +2 for 1-indexed and header row
        let row = idx + 2;

        let parsed = match layout {
            Layout::Sheet => record.deserialize::<SheetRow>(Some(&headers))?.parse(),
            Layout::Backup => record.deserialize::<BackupRow>(Some(&headers))?.parse(),
        };
        let product = parsed.map_err(|source| ImportError::Parse { row, source })?;

        let outcome = upsert(repo, &product).await?;
        summary.rows += 1;
        if outcome.was_created() {
            summary.created += 1;
        } else {
            summary.updated += 1;
        }
    }

    info!(
        rows = summary.rows,
        created = summary.created,
        updated = summary.updated,
        "Import finished"
    );
    Ok(summary)
}
