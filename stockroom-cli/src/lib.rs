pub mod console;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod state;

pub use console::Console;
pub use error::{AppError, AppResult};
pub use menu::{Action, Menu};
pub use state::AppState;
