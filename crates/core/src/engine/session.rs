use crate::config::EngineConfig;
use crate::detectors::detect_with_width;
use crate::engine::cache::{CacheKey, RangeCache};
use crate::engine::fold_state::FoldState;
use crate::engine::projector::project;
use crate::language::Language;
use crate::models::{FoldReport, FoldableRange, LineBuffer, ReportMetadata, Viewport, VisibleLine};
use tracing::debug;

/// Why the engine is being told its inputs changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    /// A different file was opened
    FileChanged,
    /// The same file was reloaded with a different line count
    LengthChanged,
    /// The same file was reloaded with the same line count
    ContentEdited,
    /// The visible window moved
    ViewportChanged,
}

impl Invalidation {
    /// Whether cached ranges and fold state must be dropped
    pub fn clears_state(&self) -> bool {
        matches!(self, Invalidation::FileChanged | Invalidation::LengthChanged)
    }
}

/// Folding state for one viewer session over one open file at a time.
///
/// Owns the line buffer, the viewport, a [`RangeCache`] and a [`FoldState`].
/// Callers push changes in through [`load`](Self::load),
/// [`set_viewport`](Self::set_viewport) or [`invalidate`](Self::invalidate);
/// the engine never watches its inputs.
#[derive(Debug, Clone)]
pub struct FoldingEngine {
    config: EngineConfig,
    file_name: String,
    language: Language,
    buffer: LineBuffer,
    viewport: Viewport,
    cache: RangeCache,
    state: FoldState,
}

impl FoldingEngine {
    pub fn new(config: EngineConfig) -> Self {
        let cache = RangeCache::new(config.cache_capacity);
        Self {
            config,
            file_name: String::new(),
            language: Language::Text,
            buffer: LineBuffer::default(),
            viewport: Viewport::default(),
            cache,
            state: FoldState::new(),
        }
    }

    /// Replace the buffer, clearing cache and fold state when the file or its
    /// line count changed. Same-length edits keep both.
    pub fn load(&mut self, file_name: &str, buffer: impl Into<LineBuffer>) -> Invalidation {
        let buffer = buffer.into();
        let reason = if file_name != self.file_name {
            Invalidation::FileChanged
        } else if buffer.len() != self.buffer.len() {
            Invalidation::LengthChanged
        } else {
            Invalidation::ContentEdited
        };

        if reason == Invalidation::FileChanged {
            self.file_name = file_name.to_string();
            self.language = Language::from_file_name(file_name);
        }
        self.buffer = buffer;
        self.invalidate(reason);
        reason
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.invalidate(Invalidation::ViewportChanged);
    }

    pub fn invalidate(&mut self, reason: Invalidation) {
        if reason.clears_state() {
            debug!(
                file = %self.file_name,
                ?reason,
                cached = self.cache.len(),
                collapsed = self.state.len(),
                "clearing range cache and fold state"
            );
            self.cache.clear();
            self.state.expand_all();
        } else {
            debug!(file = %self.file_name, ?reason, "keeping range cache and fold state");
        }
    }

    /// Ranges for the current viewport, served from the cache when possible
    pub fn foldable_ranges(&mut self) -> Vec<FoldableRange> {
        if self.buffer.is_empty() {
            return Vec::new();
        }

        let key = CacheKey::new(self.file_name.as_str(), self.viewport, self.buffer.len());
        if let Some(ranges) = self.cache.get(&key) {
            debug!(file = %self.file_name, viewport = ?self.viewport, "range cache hit");
            return ranges.clone();
        }

        debug!(file = %self.file_name, viewport = ?self.viewport, "range cache miss");
        let ranges = detect_with_width(
            self.buffer.lines(),
            &self.file_name,
            self.viewport,
            self.config.summary_width,
        );
        self.cache.put(key, ranges.clone());
        ranges
    }

    /// First range for the current viewport that starts on `line`
    pub fn range_at_line(&mut self, line: usize) -> Option<FoldableRange> {
        self.foldable_ranges()
            .into_iter()
            .find(|r| r.start_line == line)
    }

    pub fn visible_lines(&self) -> Vec<VisibleLine> {
        project(
            self.buffer.lines(),
            self.state.ids().iter().map(String::as_str),
            self.config.id_decoding,
        )
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.state.toggle(id)
    }

    pub fn expand_all(&mut self) {
        self.state.expand_all();
    }

    /// Collapse every range detected for the current viewport
    pub fn collapse_all(&mut self) {
        let ranges = self.foldable_ranges();
        self.state.collapse_all(&ranges);
    }

    pub fn fold_state(&self) -> &FoldState {
        &self.state
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn supports_folding(&self) -> bool {
        self.language.supports_folding()
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    /// Serializable snapshot of the current session
    pub fn report(&mut self) -> FoldReport {
        let ranges = self.foldable_ranges();
        FoldReport {
            file_name: self.file_name.clone(),
            language: self.language,
            line_count: self.buffer.len(),
            viewport: self.viewport,
            ranges,
            visible_line_count: self.visible_lines().len(),
            collapsed: self.state.sorted_ids(),
            metadata: ReportMetadata::default(),
        }
    }
}

impl Default for FoldingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
