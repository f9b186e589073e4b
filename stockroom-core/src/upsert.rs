use stockroom_catalog::{NewProduct, Product};
use tracing::debug;

use crate::{ProductRepository, StoreError, StoreResult};

/// Outcome of [`upsert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted {
    Created(Product),
    Updated(Product),
}

impl Upserted {
    pub fn product(&self) -> &Product {
        match self {
            Upserted::Created(product) | Upserted::Updated(product) => product,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Upserted::Created(_))
    }
}

/// Create the product, or overwrite quantity, price and timestamp of the
/// existing product with the same name.
pub async fn upsert(repo: &dyn ProductRepository, incoming: &NewProduct) -> StoreResult<Upserted> {
    match repo.create(incoming).await {
        Ok(product) => {
            debug!(id = product.id, name = %product.name, "Created product");
            Ok(Upserted::Created(product))
        }
        Err(StoreError::DuplicateKey(_)) => {
            let mut existing = repo.get_by_name(&incoming.name).await?;
            existing.apply(incoming);
            repo.update(&existing).await?;
            debug!(id = existing.id, name = %existing.name, "Updated product");
            Ok(Upserted::Updated(existing))
        }
        Err(err) => Err(err),
    }
}
