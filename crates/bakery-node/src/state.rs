//! Application state.

use std::sync::Arc;

use bakery_core::Menu;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    /// Known items in matching order.
    pub menu: Arc<Menu>,
}

impl AppState {
    /// Create application state around a menu.
    pub fn new(menu: Menu) -> Self {
        Self {
            menu: Arc::new(menu),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Menu::bakery())
    }
}
