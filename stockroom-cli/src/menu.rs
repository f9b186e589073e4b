use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::console::Console;
use crate::error::AppResult;
use crate::handlers;
use crate::state::AppState;

/// Typing this leaves the menu
pub const QUIT_KEY: char = 'q';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Add,
    Backup,
}

impl Action {
    pub async fn run<R: BufRead, W: Write>(
        self,
        console: &mut Console<R, W>,
        state: &AppState,
    ) -> AppResult<()> {
        match self {
            Action::View => handlers::view_product(console, state).await,
            Action::Add => handlers::add_product(console, state).await,
            Action::Backup => handlers::save_inventory(console, state).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub key: char,
    pub label: &'static str,
    pub action: Action,
}

/// Ordered registry of menu actions
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// The view / add / backup menu.
    pub fn standard() -> Self {
        Self::new()
            .with('v', "View details of a single product.", Action::View)
            .with('a', "Add a new product.", Action::Add)
            .with('b', "Make a backup of the entire contents.", Action::Backup)
    }

    /// Register `action` under `key`, replacing any earlier entry for that key.
    pub fn with(mut self, key: char, label: &'static str, action: Action) -> Self {
        let key = key.to_ascii_lowercase();
        debug_assert_ne!(key, QUIT_KEY, "the quit key cannot be rebound");

        let item = MenuItem { key, label, action };
        match self.items.iter_mut().find(|existing| existing.key == key) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
        self
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Resolve a normalized (trimmed, lowercased) choice.
    pub fn lookup(&self, choice: &str) -> Option<Action> {
        let mut chars = choice.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => self
                .items
                .iter()
                .find(|item| item.key == key)
                .map(|item| item.action),
            _ => None,
        }
    }
}

fn normalize(choice: &str) -> String {
    choice.trim().to_lowercase()
}

fn is_quit(choice: &str) -> bool {
    let mut chars = choice.chars();
    chars.next() == Some(QUIT_KEY) && chars.next().is_none()
}

/// Run the menu until the user quits or the input ends.
pub async fn run<R: BufRead, W: Write>(
    menu: &Menu,
    console: &mut Console<R, W>,
    state: &AppState,
) -> AppResult<()> {
    loop {
        console.say(format!("Enter '{}' to quit.\n", QUIT_KEY))?;
        for item in menu.items() {
            console.say(format!("{}) {}", item.key, item.label))?;
        }

        let Some(choice) = console.prompt("\nAction: ")? else {
            debug!("Input closed, leaving menu");
            break;
        };
        let choice = normalize(&choice);
        if is_quit(&choice) {
            break;
        }

        match menu.lookup(&choice) {
            Some(action) => {
                debug!(?action, "Dispatching menu action");
                action.run(console, state).await?;
                console.clear()?;
            }
            None => {
                warn!(choice = %choice, "Rejected menu choice");
                console.say("\nPlease choose a valid option, or enter 'q' to quit.\n")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_menu_order() {
        let keys: Vec<char> = Menu::standard().items().iter().map(|i| i.key).collect();
        assert_eq!(keys, ['v', 'a', 'b']);
    }

    #[test]
    fn test_lookup() {
        let menu = Menu::standard();
        assert_eq!(menu.lookup("v"), Some(Action::View));
        assert_eq!(menu.lookup("a"), Some(Action::Add));
        assert_eq!(menu.lookup("b"), Some(Action::Backup));
        assert_eq!(menu.lookup("x"), None);
        assert_eq!(menu.lookup("va"), None);
        assert_eq!(menu.lookup(""), None);
    }

    #[test]
    fn test_normalize_and_quit() {
        assert_eq!(normalize("  V \n"), "v");
        assert!(is_quit(&normalize(" Q ")));
        assert!(!is_quit("quit"));
        assert!(!is_quit(""));
    }

    #[test]
    fn test_with_replaces_existing_key() {
        let menu = Menu::new()
            .with('v', "View", Action::View)
            .with('V', "Backup instead", Action::Backup);
        assert_eq!(menu.items().len(), 1);
        assert_eq!(menu.lookup("v"), Some(Action::Backup));
    }
}
