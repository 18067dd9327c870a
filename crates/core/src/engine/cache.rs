use crate::models::{FoldableRange, Viewport};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Identity of one detection result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub file_name: String,
    pub viewport: Viewport,
    pub buffer_len: usize,
}

impl CacheKey {
    pub fn new(file_name: impl Into<String>, viewport: Viewport, buffer_len: usize) -> Self {
        Self {
            file_name: file_name.into(),
            viewport,
            buffer_len,
        }
    }
}

/// Bounded memo of detection results with first-in-first-out eviction.
///
/// Lookups do not refresh an entry's age. Edits that keep the buffer length
/// map to the same key and are served the stale result; the owner clears the
/// cache only when the file or its line count changes.
#[derive(Debug, Clone)]
pub struct RangeCache {
    capacity: usize,
    entries: HashMap<CacheKey, Vec<FoldableRange>>,
    order: VecDeque<CacheKey>,
}

impl RangeCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<&Vec<FoldableRange>> {
        self.entries.get(key)
    }

    /// Store `ranges` under `key`, evicting the oldest insertion on overflow.
    ///
    /// Replacing an existing key keeps its original insertion position.
    pub fn put(&mut self, key: CacheKey, ranges: Vec<FoldableRange>) {
        if self.entries.insert(key.clone(), ranges).is_some() {
            return;
        }
        self.order.push_back(key);

        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                debug!(file = %oldest.file_name, viewport = ?oldest.viewport, "evicting cached ranges");
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
