use std::io::{self, BufRead, Write};
use stockroom_catalog::{Product, DATE_FORMAT};
use stockroom_core::StoreError;

use crate::console::{is_no, Console};
use crate::error::AppResult;
use crate::state::AppState;

/// View details of a single product.
///
/// Unknown or non-numeric ids re-prompt in place; the loop only ends when
/// the user answers "no" to viewing another product or the input runs out.
pub async fn view_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
) -> AppResult<()> {
    loop {
        let product = loop {
            let Some(input) =
                console.prompt("Enter the ID of the item you would like to view: ")?
            else {
                return Ok(());
            };

            match find(state, &input).await? {
                Some(product) => break product,
                None => console.say("This product does not exist, please enter a valid ID")?,
            }
        };

        render_product(console, &product)?;

        let Some(again) =
            console.prompt("\n\nWould you like to view another product? [Yes/No]:  ")?
        else {
            return Ok(());
        };
        if is_no(&again) {
            return Ok(());
        }
    }
}

async fn find(state: &AppState, input: &str) -> AppResult<Option<Product>> {
    let Ok(id) = input.trim().parse::<i64>() else {
        return Ok(None);
    };

    match state.products.get_by_id(id).await {
        Ok(product) => Ok(Some(product)),
        Err(StoreError::NotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn render_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    product: &Product,
) -> io::Result<()> {
    console.say(format!("\n{}", product.name))?;
    console.say("-".repeat(product.name.chars().count()))?;
    console.say(format!("Price: ${}", product.price))?;
    console.say(format!("Quantity: {}", product.quantity))?;
    console.say(format!("Last updated: {}", product.last_updated.format(DATE_FORMAT)))
}
