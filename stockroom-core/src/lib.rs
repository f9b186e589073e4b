pub mod repository;
pub mod upsert;

pub use repository::ProductRepository;
pub use upsert::{upsert, Upserted};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Record store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("A product named {0:?} already exists")]
    DuplicateKey(String),
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Record store failure: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    pub fn backend(err: impl Into<BoxError>) -> Self {
        StoreError::Backend(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
