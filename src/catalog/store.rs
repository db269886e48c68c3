use super::Item;

/// Holds the full, unfiltered catalog.
///
/// Empty until the first successful load. The collection is only ever
/// replaced wholesale; individual items are never edited.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Vec<Item>,
    loaded: bool,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full collection
    pub fn set_all(&mut self, items: Vec<Item>) {
        self.items = items;
        self.loaded = true;
    }

    /// The full collection, in load order
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a load has ever succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = CatalogStore::new();
        assert!(store.is_empty());
        assert!(!store.is_loaded());
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_set_all_replaces_wholesale() {
        let mut store = CatalogStore::new();
        store.set_all(vec![Item::new("Fusca", "", "", "", ""), Item::new("Opala", "", "", "", "")]);
        assert_eq!(store.len(), 2);
        assert!(store.is_loaded());

        store.set_all(vec![Item::new("Mustang", "", "", "", "")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name, "Mustang");
    }

    #[test]
    fn test_empty_load_still_counts_as_loaded() {
        let mut store = CatalogStore::new();
        store.set_all(Vec::new());
        assert!(store.is_empty());
        assert!(store.is_loaded());
    }
}
