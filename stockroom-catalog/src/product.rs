use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pricing::Cents;

/// A stocked product as held by the record store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Store-assigned identifier, never reused
    pub id: i64,
    /// Natural key: one product per name
    pub name: String,
    pub quantity: u32,
    pub price: Cents,
    pub last_updated: NaiveDateTime,
}

impl Product {
    /// Overwrite the mutable fields from an incoming record with the same name.
    pub fn apply(&mut self, incoming: &NewProduct) {
        self.quantity = incoming.quantity;
        self.price = incoming.price;
        self.last_updated = incoming.last_updated;
    }
}

/// Payload for creating a product; the store assigns the id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: u32,
    pub price: Cents,
    pub last_updated: NaiveDateTime,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        price: Cents,
        last_updated: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            last_updated,
        }
    }
}

/// Check a user-entered product name: non-empty and purely alphabetic.
pub fn validate_name(name: &str) -> Result<&str, ProductError> {
    if !name.is_empty() && name.chars().all(char::is_alphabetic) {
        Ok(name)
    } else {
        Err(ProductError::InvalidName(name.to_string()))
    }
}

/// Product field errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("Invalid product name {0:?}: names must be letters only")]
    InvalidName(String),

    #[error("Invalid price {0:?}")]
    InvalidPrice(String),

    #[error("Invalid quantity {0:?}")]
    InvalidQuantity(String),

    #[error("Invalid date {0:?}")]
    InvalidDate(String),
}
