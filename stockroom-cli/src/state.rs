use std::path::PathBuf;
use std::sync::Arc;
use stockroom_core::ProductRepository;

/// Everything the menu handlers need, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub backup_path: PathBuf,
}
