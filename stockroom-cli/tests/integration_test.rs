use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use stockroom_cli::{menu, AppState, Console, Menu};
use stockroom_core::ProductRepository;
use stockroom_store::{import_reader, DbClient, SqliteProductRepository};

const WIDGET_SHEET: &str = "\
product_name,product_quantity,product_price,date_updated
Widget,10,$5.00,01/01/2020
";

async fn state_with(sheet: &str, backup_path: PathBuf) -> AppState {
    let db = DbClient::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    let products: Arc<dyn ProductRepository> =
        Arc::new(SqliteProductRepository::new(db.pool.clone()));
    import_reader(products.as_ref(), sheet.as_bytes()).await.unwrap();

    AppState {
        products,
        backup_path,
    }
}

async fn widget_state() -> AppState {
    state_with(WIDGET_SHEET, std::env::temp_dir().join("stockroom-unused.csv")).await
}

/// Drive the standard menu with `input` and return everything it printed.
async fn session(state: &AppState, input: &str) -> String {
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
    menu::run(&Menu::standard(), &mut console, state).await.unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[tokio::test]
async fn test_view_imported_product() {
    let state = widget_state().await;
    let widget = state.products.get_by_name("Widget").await.unwrap();
    assert_eq!(widget.price.get(), 500);
    assert_eq!(widget.quantity, 10);

    let out = session(&state, &format!("v\n{}\nno\nq\n", widget.id)).await;

    assert!(out.contains("Widget\n------\n"));
    assert!(out.contains("Price: $5.00"));
    assert!(out.contains("Quantity: 10"));
    assert!(out.contains("Last updated: 01/01/2020"));
}

#[tokio::test]
async fn test_view_unknown_id_allows_retry() {
    let state = widget_state().await;
    let widget = state.products.get_by_name("Widget").await.unwrap();

    let out = session(&state, &format!("v\n999\nabc\n{}\nNo\nq\n", widget.id)).await;

    assert_eq!(out.matches("This product does not exist").count(), 2);
    assert!(out.contains("Price: $5.00"));
}

#[tokio::test]
async fn test_view_another_repeats() {
    let state = widget_state().await;
    let widget = state.products.get_by_name("Widget").await.unwrap();

    let out = session(&state, &format!("v\n{0}\nyes\n{0}\nno\nq\n", widget.id)).await;

    assert_eq!(out.matches("Quantity: 10").count(), 2);
}

#[tokio::test]
async fn test_add_new_product() {
    let state = widget_state().await;

    let out = session(&state, "a\nGizmo\n2.50\n4\nyes\nq\n").await;

    assert!(out.contains("Product name: Gizmo"));
    assert!(out.contains("Product price: $2.50"));
    assert!(out.contains("Product is added into inventory!"));
    assert_eq!(state.products.count().await.unwrap(), 2);

    let gizmo = state.products.get_by_name("Gizmo").await.unwrap();
    assert_eq!(gizmo.price.get(), 250);
    assert_eq!(gizmo.quantity, 4);
}

#[tokio::test]
async fn test_add_existing_name_updates_in_place() {
    let state = widget_state().await;
    let before = state.products.get_by_name("Widget").await.unwrap();

    let out = session(&state, "a\nWidget\n$7\n3\n\nq\n").await;

    assert!(out.contains("This product has been updated."));
    assert_eq!(state.products.count().await.unwrap(), 1);

    let after = state.products.get_by_name("Widget").await.unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.price.get(), 700);
    assert_eq!(after.quantity, 3);
    assert!(after.last_updated > before.last_updated);
}

#[tokio::test]
async fn test_add_invalid_entry_returns_to_menu() {
    let state = widget_state().await;

    let out = session(&state, "a\nWidget9\n1.00\n1\nq\n").await;

    assert!(out.contains("This is not a valid entry, please try again."));
    assert!(!out.contains("Product name:"));
    assert_eq!(state.products.count().await.unwrap(), 1);
    assert!(state.products.get_by_name("Widget9").await.is_err());
}

#[tokio::test]
async fn test_add_declined() {
    let state = widget_state().await;

    let out = session(&state, "a\nThing\n1\n1\nNO\nq\n").await;

    assert!(out.contains("Product name: Thing"));
    assert!(!out.contains("Product is added"));
    assert_eq!(state.products.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_backup_writes_file() {
    let path = std::env::temp_dir().join(format!("stockroom-backup-{}.csv", std::process::id()));
    let state = state_with(WIDGET_SHEET, path.clone()).await;

    let out = session(&state, "b\nq\n").await;
    assert!(out.contains("Inventory is successfully backed up!"));

    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(
        written,
        "name,price,quantity,last_updated\nWidget,500,10,2020-01-01 00:00:00\n"
    );
}

#[tokio::test]
async fn test_invalid_choice_is_rejected() {
    let state = widget_state().await;

    let out = session(&state, "x\n\nq\n").await;

    assert_eq!(
        out.matches("Please choose a valid option, or enter 'q' to quit.").count(),
        2
    );
    assert!(!out.contains("Enter the ID"));
}

#[tokio::test]
async fn test_choice_is_normalized() {
    let state = widget_state().await;
    let widget = state.products.get_by_name("Widget").await.unwrap();

    let out = session(&state, &format!("  V  \n{}\nno\n Q \n", widget.id)).await;

    assert!(out.contains("Price: $5.00"));
    assert!(!out.contains("Please choose a valid option"));
}

#[tokio::test]
async fn test_menu_ends_on_closed_input() {
    let state = widget_state().await;

    let out = session(&state, "").await;

    assert!(out.contains("Enter 'q' to quit."));
    assert!(out.contains("v) View details of a single product."));
    assert!(out.contains("a) Add a new product."));
    assert!(out.contains("b) Make a backup of the entire contents."));
}
