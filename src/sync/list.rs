use std::collections::HashSet;

use crate::models::catalog::{filter_deleted, SoftDeletable};
use crate::sync::Keyed;

/// The current list query. Filtering is server-side: the state only records
/// what to ask for, the caller re-queries when the debouncer settles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search_term: String,
    pub status_filter: Option<String>,
    pub page: u32,
}

/// In-memory mirror of one list screen: fetched items, the active query and
/// the multi-select set.
#[derive(Debug)]
pub struct ListState<T> {
    items: Vec<T>,
    query: ListQuery,
    selected: HashSet<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: ListQuery::default(),
            selected: HashSet::new(),
        }
    }
}

impl<T: SoftDeletable + Keyed> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mirror with a fresh fetch. The soft-delete filter runs
    /// here, on every fetch; selections are kept only for ids still present.
    pub fn absorb(&mut self, fetched: Vec<T>) {
        self.items = filter_deleted(fetched);

        let present: HashSet<&str> = self.items.iter().map(|item| item.key()).collect();
        self.selected.retain(|id| present.contains(id.as_str()));
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.query.page = 0;
    }

    pub fn set_status_filter(&mut self, status: Option<String>) {
        self.query.status_filter = status;
        self.query.page = 0;
    }

    pub fn set_page(&mut self, page: u32) {
        self.query.page = page;
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn toggle_selected(&mut self, id: &str) {
        if self.selected.contains(id) {
            self.selected.remove(id);
        } else if self.get(id).is_some() {
            self.selected.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}
