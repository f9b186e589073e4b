pub mod app_config;
pub mod backup;
pub mod catalog_repo;
pub mod csv_import;
pub mod database;

pub use backup::{export_backup, write_backup, ExportError};
pub use catalog_repo::SqliteProductRepository;
pub use csv_import::{import_file, import_reader, ImportError, ImportSummary};
pub use database::DbClient;

/// Timestamp layout written to and read back from backup files
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
