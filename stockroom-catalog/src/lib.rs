pub mod product;
pub mod pricing;
pub mod inventory;

pub use product::{validate_name, NewProduct, Product, ProductError};
pub use pricing::Cents;
pub use inventory::{parse_quantity, parse_stock_date, DATE_FORMAT};
