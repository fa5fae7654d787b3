//! Order selection for bulk actions
//!
//! A set of order ids, always kept a subset of the ids in the last
//! successful snapshot: callers run [`OrderSelection::retain_known`]
//! after every refresh, which silently drops ids that disappeared.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct OrderSelection {
    ids: HashSet<String>,
}

impl OrderSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection state of a single id
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Header-checkbox semantics over the currently *visible* (filtered)
    /// view: if every visible id is already selected, deselect exactly
    /// those; otherwise select all of them. Ids outside the view are
    /// left untouched.
    pub fn select_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a str>) {
        let visible: Vec<&str> = visible.into_iter().collect();
        if !visible.is_empty() && visible.iter().all(|id| self.ids.contains(*id)) {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            for id in visible {
                self.ids.insert(id.to_string());
            }
        }
    }

    /// Drop ids no longer present in the snapshot
    pub fn retain_known<'a>(&mut self, known: impl IntoIterator<Item = &'a str>) {
        let known: HashSet<&str> = known.into_iter().collect();
        self.ids.retain(|id| known.contains(id.as_str()));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
