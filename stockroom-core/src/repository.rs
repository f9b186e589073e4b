use async_trait::async_trait;
use futures_util::stream::BoxStream;
use stockroom_catalog::{NewProduct, Product};

use crate::StoreResult;

/// Repository trait for the product record store
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product. Fails with `DuplicateKey` when the name is taken.
    async fn create(&self, product: &NewProduct) -> StoreResult<Product>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Product>;

    async fn get_by_name(&self, name: &str) -> StoreResult<Product>;

    /// Persist the mutable fields of an existing product.
    async fn update(&self, product: &Product) -> StoreResult<()>;

    /// Stream every product in id order.
    ///
    /// Nothing is read until the stream is polled, and each call starts over
    /// from the first product.
    fn list_all(&self) -> BoxStream<'_, StoreResult<Product>>;

    async fn count(&self) -> StoreResult<u64>;
}
