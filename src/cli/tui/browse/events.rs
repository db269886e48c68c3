use ratatui::crossterm::event::{KeyEvent, MouseEvent};

use crate::catalog::Item;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    // Async task events - catalog load
    CatalogLoaded(Vec<Item>),
    CatalogFailed(String),

    // UI events
    Tick,
}
