use std::io::{BufRead, Write};
use stockroom_store::export_backup;

use crate::console::Console;
use crate::error::AppResult;
use crate::state::AppState;

/// Make a backup of the entire contents.
pub async fn save_inventory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
) -> AppResult<()> {
    export_backup(state.products.as_ref(), &state.backup_path).await?;
    console.say("\nInventory is successfully backed up!\n")?;
    Ok(())
}
