use serde::Serialize;
use strip_types::Entry;

/// One published row of the strip.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Line {
    pub entry: Entry,
    /// Value produced by this entry's fold step.
    pub running: f64,
    /// Recorded running total, set only for checkpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<f64>,
}

impl Line {
    /// Text shown for this row: the entry's canonical text.
    pub fn text(&self) -> String {
        self.entry.canonical_text()
    }
}

/// Immutable ordered view of a strip, produced by a full recomputation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Strip {
    lines: Vec<Line>,
    total: f64,
}

impl Strip {
    pub(crate) fn new(lines: Vec<Line>, total: f64) -> Self {
        Self { lines, total }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Final accumulated value of the fold that produced this view.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Snapshots of every checkpoint, in order.
    pub fn checkpoints(&self) -> impl Iterator<Item = (usize, &Line)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.snapshot.is_some())
    }
}

impl<'a> IntoIterator for &'a Strip {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Display boundary the ledger republishes to after every recomputation.
///
/// A view renders what it is given and keeps no state the ledger has to
/// reconcile with. Selection is the only transient state a view may hold,
/// and the ledger clears it on every publish.
pub trait StripView {
    fn publish(&mut self, strip: &Strip);

    fn clear_selection(&mut self) {}
}

impl<V: StripView + ?Sized> StripView for Box<V> {
    fn publish(&mut self, strip: &Strip) {
        (**self).publish(strip);
    }

    fn clear_selection(&mut self) {
        (**self).clear_selection();
    }
}

/// View that discards everything, for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl StripView for NullView {
    fn publish(&mut self, _strip: &Strip) {}
}

/// View that keeps the last published strip.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    last: Strip,
    publishes: usize,
    selected: Option<usize>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> &Strip {
        &self.last
    }

    /// How many times the ledger has published to this view.
    pub fn publishes(&self) -> usize {
        self.publishes
    }

    pub fn select(&mut self, row: usize) {
        self.selected = Some(row);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Rendered rows, one canonical text per entry.
    pub fn rows(&self) -> Vec<String> {
        self.last.iter().map(Line::text).collect()
    }
}

impl StripView for RecordingView {
    fn publish(&mut self, strip: &Strip) {
        self.last = strip.clone();
        self.publishes += 1;
    }

    fn clear_selection(&mut self) {
        self.selected = None;
    }
}
