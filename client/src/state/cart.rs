//! Selection store and cart drawer state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Book Now cards toggle products into the selection, the cart drawer lists
//! and removes them, and the reservation form submits them. Every mutation
//! is mirrored synchronously into session storage so the selection survives
//! navigation between those pages.
//!
//! INVARIANTS
//! ==========
//! - The selection never holds two products with the same `id`, and keeps
//!   insertion order.
//! - An empty selection is never stored; its storage key is deleted.
//! - The drawer auto-opens on the first empty -> non-empty transition of
//!   the session and never again; the flag is persisted alongside the
//!   selection.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::state::catalog::Product;
use crate::util::session_storage::{SessionStore, load_json, save_json};

/// Session storage key holding the JSON array of selected products.
pub const SELECTION_KEY: &str = "selectedProducts";

/// Session storage key holding the JSON boolean auto-open flag.
pub const AUTO_OPEN_KEY: &str = "hasCartOpenedAutomatically";

/// Ordered set of selected products, unique by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<Product>,
}

impl Selection {
    /// Build a selection from arbitrary input, keeping the first occurrence
    /// of each id.
    #[must_use]
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut selection = Self::default();
        for product in products {
            if !selection.contains(product.id) {
                selection.items.push(product);
            }
        }
        selection
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|p| p.id).collect()
    }

    /// Remove `product` if present, otherwise append it. Returns `true` when
    /// the product ends up selected.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(product.id) {
            false
        } else {
            self.items.push(product.clone());
            true
        }
    }

    /// Remove the product with `id`. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Selection plus drawer visibility, shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub selection: Selection,
    pub panel_open: bool,
    /// Whether the drawer has already auto-opened this session.
    pub auto_opened: bool,
}

impl CartState {
    /// Rehydrate from session storage. Anything unreadable becomes empty.
    #[must_use]
    pub fn load(store: &impl SessionStore) -> Self {
        let stored: Vec<Product> = load_json(store, SELECTION_KEY).unwrap_or_default();
        let auto_opened = load_json::<bool>(store, AUTO_OPEN_KEY).unwrap_or(false);
        Self { selection: Selection::from_products(stored), panel_open: false, auto_opened }
    }

    /// Toggle `product` in or out of the selection and persist.
    pub fn toggle(&mut self, product: &Product, store: &impl SessionStore) {
        self.selection.toggle(product);
        self.persist(store);
        self.auto_open_once(store);
    }

    /// Remove a product by id and persist. Unknown ids are a no-op.
    pub fn remove(&mut self, id: u32, store: &impl SessionStore) {
        if self.selection.remove(id) {
            self.persist(store);
        }
    }

    /// Empty the selection, delete its storage entry and close the drawer.
    pub fn clear(&mut self, store: &impl SessionStore) {
        self.selection.clear();
        store.clear(SELECTION_KEY);
        self.panel_open = false;
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Whether "proceed to contact" should navigate, given the current path.
    /// On the reservation page itself the drawer just closes.
    #[must_use]
    pub fn proceed_needs_navigation(current_path: &str) -> bool {
        let path = current_path.split(['?', '#']).next().unwrap_or_default();
        path.trim_end_matches('/') != crate::app::RESERVE_PATH
    }

    fn persist(&self, store: &impl SessionStore) {
        if self.selection.is_empty() {
            store.clear(SELECTION_KEY);
        } else {
            save_json(store, SELECTION_KEY, &self.selection.items);
        }
    }

    fn auto_open_once(&mut self, store: &impl SessionStore) {
        if self.auto_opened || self.selection.is_empty() {
            return;
        }
        self.panel_open = true;
        self.auto_opened = true;
        save_json(store, AUTO_OPEN_KEY, &true);
    }
}
