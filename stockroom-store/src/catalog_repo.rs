use async_trait::async_trait;
use chrono::NaiveDateTime;
use futures_util::stream::{BoxStream, StreamExt};
use sqlx::SqlitePool;
use stockroom_catalog::{Cents, NewProduct, Product};
use stockroom_core::{ProductRepository, StoreError, StoreResult};

const SELECT_BY_ID: &str =
    "SELECT id, name, quantity, price, last_updated FROM products WHERE id = ?1";
const SELECT_BY_NAME: &str =
    "SELECT id, name, quantity, price, last_updated FROM products WHERE name = ?1";
const SELECT_ALL: &str =
    "SELECT id, name, quantity, price, last_updated FROM products ORDER BY id";

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    quantity: i64,
    price: i64,
    last_updated: NaiveDateTime,
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: row.id,
            name: row.name,
            quantity: u32::try_from(row.quantity).map_err(StoreError::backend)?,
            price: Cents::from_cents(row.price).map_err(StoreError::backend)?,
            last_updated: row.last_updated,
        })
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::backend(err)
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, product: &NewProduct) -> StoreResult<Product> {
        let result = sqlx::query(
            "INSERT INTO products (name, quantity, price, last_updated) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&product.name)
        .bind(i64::from(product.quantity))
        .bind(product.price.get())
        .bind(product.last_updated)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(Product {
                id: done.last_insert_rowid(),
                name: product.name.clone(),
                quantity: product.quantity,
                price: product.price,
                last_updated: product.last_updated,
            }),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::DuplicateKey(product.name.clone()))
            }
            Err(err) => Err(backend(err)),
        }
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        match row {
            Some(row) => row.try_into(),
            None => Err(StoreError::NotFound(format!("id {id}"))),
        }
    }

    async fn get_by_name(&self, name: &str) -> StoreResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        match row {
            Some(row) => row.try_into(),
            None => Err(StoreError::NotFound(format!("name {name:?}"))),
        }
    }

    async fn update(&self, product: &Product) -> StoreResult<()> {
        let done = sqlx::query(
            r#"
            UPDATE products
            SET name = ?1, quantity = ?2, price = ?3, last_updated = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&product.name)
        .bind(i64::from(product.quantity))
        .bind(product.price.get())
        .bind(product.last_updated)
        .bind(product.id)
        .execute(&self.pool)
        .await;

        match done {
            Ok(done) if done.rows_affected() == 0 => {
                Err(StoreError::NotFound(format!("id {}", product.id)))
            }
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::DuplicateKey(product.name.clone()))
            }
            Err(err) => Err(backend(err)),
        }
    }

    fn list_all(&self) -> BoxStream<'_, StoreResult<Product>> {
        sqlx::query_as::<_, ProductRow>(SELECT_ALL)
            .fetch(&self.pool)
            .map(|row| row.map_err(backend).and_then(Product::try_from))
            .boxed()
    }

    async fn count(&self) -> StoreResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(backend)?;

        u64::try_from(total).map_err(StoreError::backend)
    }
}
