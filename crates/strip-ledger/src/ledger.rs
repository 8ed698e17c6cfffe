use strip_types::Entry;
use tracing::debug;

use crate::error::LedgerError;
use crate::fold::{self, recompute};
use crate::view::{NullView, Strip, StripView};

/// Ordered adding strip bound to one display view.
///
/// Insertion order is the computation order. Every structural change
/// recomputes the whole strip from zero and republishes it to the view, so
/// no running total or checkpoint value survives an edit stale.
pub struct Ledger<V = NullView> {
    pub(crate) entries: Vec<Entry>,
    pub(crate) strip: Strip,
    pub(crate) dirty: bool,
    pub(crate) view: V,
}

impl Ledger<NullView> {
    /// A ledger with no display attached.
    pub fn headless() -> Self {
        Self::new(NullView)
    }
}

impl Default for Ledger<NullView> {
    fn default() -> Self {
        Self::headless()
    }
}

impl<V: StripView> Ledger<V> {
    /// Create an empty, clean ledger publishing to `view`.
    pub fn new(view: V) -> Self {
        Self {
            entries: Vec::new(),
            strip: Strip::default(),
            dirty: false,
            view,
        }
    }

    pub fn append(&mut self, entry: Entry) {
        debug!(entry = %entry, position = self.entries.len(), "append");
        self.entries.push(entry);
        self.touch();
    }

    /// Insert `entry` before position `index`; `index == len` appends.
    pub fn insert(&mut self, entry: Entry, index: usize) -> Result<(), LedgerError> {
        if index > self.entries.len() {
            return Err(self.out_of_range(index));
        }
        debug!(entry = %entry, index, "insert");
        self.entries.insert(index, entry);
        self.touch();
        Ok(())
    }

    /// Replace the entry at `index`, returning the one it displaced.
    pub fn replace(&mut self, entry: Entry, index: usize) -> Result<Entry, LedgerError> {
        self.check_index(index)?;
        debug!(entry = %entry, index, "replace");
        let previous = std::mem::replace(&mut self.entries[index], entry);
        self.touch();
        Ok(previous)
    }

    /// Remove and return the entry at `index`.
    pub fn delete(&mut self, index: usize) -> Result<Entry, LedgerError> {
        self.check_index(index)?;
        debug!(index, "delete");
        let removed = self.entries.remove(index);
        self.touch();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        debug!(discarded = self.entries.len(), "clear");
        self.entries.clear();
        self.touch();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold the whole current strip and return the final accumulated value.
    ///
    /// Pure: nothing is published and no state changes.
    pub fn total(&self) -> f64 {
        fold::total(&self.entries)
    }

    pub fn find(&self, index: usize) -> Result<&Entry, LedgerError> {
        self.entries
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The view published by the last recomputation.
    pub fn strip(&self) -> &Strip {
        &self.strip
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Recompute every running total and checkpoint from zero, publish the
    /// result to the view, and clear the view's selection.
    ///
    /// The new strip is built completely before anything is published.
    pub fn redisplay(&mut self) {
        let strip = recompute(&self.entries);
        debug!(lines = strip.len(), total = strip.total(), "redisplay");
        self.strip = strip;
        self.view.publish(&self.strip);
        self.view.clear_selection();
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.redisplay();
    }

    fn check_index(&self, index: usize) -> Result<(), LedgerError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> LedgerError {
        LedgerError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        }
    }
}
