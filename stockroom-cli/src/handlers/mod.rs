pub mod add;
pub mod backup;
pub mod view;

pub use add::add_product;
pub use backup::save_inventory;
pub use view::{render_product, view_product};
