use chrono::Local;
use std::io::{BufRead, Write};
use stockroom_catalog::{parse_quantity, validate_name, Cents, NewProduct, ProductError};
use stockroom_core::{upsert, Upserted};
use tracing::warn;

use crate::console::{is_no, Console};
use crate::error::AppResult;
use crate::state::AppState;

/// A validated product entry, not yet stamped or stored
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    price: Cents,
    quantity: u32,
}

fn parse_entry(name: &str, price: &str, quantity: &str) -> Result<Entry, ProductError> {
    Ok(Entry {
        name: validate_name(name.trim())?.to_string(),
        price: Cents::parse_amount(price)?,
        quantity: parse_quantity(quantity)?,
    })
}

/// Add a new product.
///
/// An invalid entry is reported and nothing is stored. A name that already
/// exists has its price, quantity and timestamp replaced.
pub async fn add_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
) -> AppResult<()> {
    let Some(name) = console.prompt("Please enter the name of the product:  ")? else {
        return Ok(());
    };
    let Some(price) = console.prompt("Please enter the price of the product:  ")? else {
        return Ok(());
    };
    let Some(quantity) = console.prompt("Please enter the quantity of the product:  ")? else {
        return Ok(());
    };

    let entry = match parse_entry(&name, &price, &quantity) {
        Ok(entry) => entry,
        Err(err) => {
            warn!(error = %err, "Rejected product entry");
            console.say(&err)?;
            console.say("This is not a valid entry, please try again.")?;
            return Ok(());
        }
    };

    console.say("The product information you have entered is:\n")?;
    console.say(format!(
        "Product name: {}\nProduct price: ${}\nProduct quantity: {}\n",
        entry.name, entry.price, entry.quantity
    ))?;

    let Some(confirm) =
        console.prompt("Are you sure you would like to add this product (Yes/No):   ")?
    else {
        return Ok(());
    };
    if is_no(&confirm) {
        return Ok(());
    }

    let incoming = NewProduct::new(
        entry.name,
        entry.quantity,
        entry.price,
        Local::now().naive_local(),
    );
    match upsert(state.products.as_ref(), &incoming).await? {
        Upserted::Created(_) => console.say("Product is added into inventory!")?,
        Upserted::Updated(_) => console.say("\nThis product has been updated.")?,
    }
    Ok(())
}
