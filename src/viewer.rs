//! Viewer context and event bindings
//!
//! [`Viewer`] owns everything the page used to keep in globals: the
//! catalog store, the card surface and the fixed messages. Front-ends
//! translate their own input into [`ViewerAction`]s and dispatch them.
//!
//! There is a single `idle` state. A search issued before the load
//! completes runs against the empty store and shows "no results".

use crate::catalog::{filter, CatalogSource, CatalogStore, Item};
use crate::config::Messages;
use crate::render::{plan_cards, plan_load_failure, Surface};

/// Named actions the viewer reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    /// The catalog finished loading
    LoadComplete(Vec<Item>),
    /// The catalog could not be loaded
    LoadFailed(String),
    /// The user asked for a search with the given query
    SearchTriggered(String),
}

impl ViewerAction {
    pub fn name(&self) -> &'static str {
        match self {
            ViewerAction::LoadComplete(_) => "load_complete",
            ViewerAction::LoadFailed(_) => "load_failed",
            ViewerAction::SearchTriggered(_) => "search_triggered",
        }
    }
}

/// Application context: catalog store plus the surface cards render into
pub struct Viewer<S: Surface> {
    store: CatalogStore,
    surface: S,
    messages: Messages,
}

impl<S: Surface> Viewer<S> {
    pub fn new(surface: S, messages: Messages) -> Self {
        Self {
            store: CatalogStore::new(),
            surface,
            messages,
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Route an action to its handler
    pub fn dispatch(&mut self, action: ViewerAction) {
        tracing::debug!("Dispatching {}", action.name());
        match action {
            ViewerAction::LoadComplete(items) => self.on_load_complete(items),
            ViewerAction::LoadFailed(reason) => self.on_load_failed(&reason),
            ViewerAction::SearchTriggered(query) => {
                self.on_search_triggered(&query);
            }
        }
    }

    /// Store the catalog and show all of it
    pub fn on_load_complete(&mut self, items: Vec<Item>) {
        tracing::info!("Catalog loaded: {} items", items.len());
        self.store.set_all(items);
        let plan = plan_cards(self.store.all(), &self.messages);
        self.surface.apply(plan);
    }

    /// Show the fixed load-failure message; the store stays as it was
    pub fn on_load_failed(&mut self, reason: &str) {
        tracing::error!("Failed to load catalog: {}", reason);
        self.surface.apply(plan_load_failure(&self.messages));
    }

    /// Filter the store by `query` and show the result.
    ///
    /// Returns the number of matching items.
    pub fn on_search_triggered(&mut self, query: &str) -> usize {
        let plan = plan_cards(filter(self.store.all(), query), &self.messages);
        let count = plan.card_count();
        self.surface.apply(plan);
        count
    }
}

/// Run the single startup load and route its outcome.
///
/// Failures are reported through [`Viewer::on_load_failed`] and never
/// returned; the viewer stays usable either way.
pub async fn load_catalog<S: Surface>(viewer: &mut Viewer<S>, source: &dyn CatalogSource) {
    let action = fetch_action(source).await;
    viewer.dispatch(action);
}

/// Fetch a source and turn the outcome into the matching load action
pub async fn fetch_action(source: &dyn CatalogSource) -> ViewerAction {
    tracing::debug!("Loading catalog from {}", source.describe());
    match source.fetch().await {
        Ok(items) => ViewerAction::LoadComplete(items),
        Err(e) => ViewerAction::LoadFailed(e.to_string()),
    }
}
