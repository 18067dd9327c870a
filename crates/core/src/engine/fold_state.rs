use crate::models::FoldableRange;
use std::collections::HashSet;

/// Set of range ids the user has collapsed.
///
/// Ids are opaque here; an id with no matching detected range is kept but
/// has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldState {
    collapsed: HashSet<String>,
}

impl FoldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`, returning whether it is now collapsed
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.collapsed.remove(id) {
            false
        } else {
            self.collapsed.insert(id.to_string());
            true
        }
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Replace the state with exactly the ids of `ranges`
    pub fn collapse_all(&mut self, ranges: &[FoldableRange]) {
        self.collapsed = ranges.iter().map(|r| r.id.clone()).collect();
    }

    pub fn is_collapsed(&self, id: &str) -> bool {
        self.collapsed.contains(id)
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.collapsed
    }

    /// Collapsed ids in sorted order
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.collapsed.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }
}
