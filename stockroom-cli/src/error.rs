use std::io;
use stockroom_core::StoreError;
use stockroom_store::ExportError;

/// Errors a menu handler cannot recover from locally
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Backup failed: {0}")]
    Backup(#[from] ExportError),
}

pub type AppResult<T> = Result<T, AppError>;
