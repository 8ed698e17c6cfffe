use strip_types::Entry;

use crate::view::{Line, Strip};

/// Running-total fold state.
///
/// A `Total` entry yields the accumulated value like any other step, then
/// marks the fold so the next entry starts from zero. The reset is applied
/// lazily, which keeps [`RunningTotal::value`] equal to the last value shown
/// on the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningTotal {
    value: f64,
    reset_pending: bool,
}

impl RunningTotal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value produced by the most recent step (zero before any step).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value the next entry folds against.
    pub fn base(&self) -> f64 {
        if self.reset_pending {
            0.0
        } else {
            self.value
        }
    }

    /// Fold one entry and return the value it produces. For checkpoints
    /// this is the value they record.
    pub fn apply(&mut self, entry: &Entry) -> f64 {
        let value = entry.next_result(self.base());
        self.value = value;
        self.reset_pending = entry.resets_running_total();
        value
    }
}

/// Fold `entries` from zero and return the resulting state.
pub fn state(entries: &[Entry]) -> RunningTotal {
    entries
        .iter()
        .fold(RunningTotal::new(), |mut running, entry| {
            running.apply(entry);
            running
        })
}

/// Fold `entries` from zero and return the final accumulated value.
pub fn total(entries: &[Entry]) -> f64 {
    state(entries).value()
}

/// Recompute the full published view of `entries` from zero.
pub fn recompute(entries: &[Entry]) -> Strip {
    let mut running = RunningTotal::new();
    let lines = entries
        .iter()
        .map(|entry| {
            let value = running.apply(entry);
            Line {
                entry: *entry,
                running: value,
                snapshot: entry.is_checkpoint().then_some(value),
            }
        })
        .collect();

    Strip::new(lines, running.value())
}
