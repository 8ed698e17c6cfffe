use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::codec::{encode, parse_record};
use crate::error::LedgerError;
use crate::fold;
use crate::ledger::Ledger;
use crate::view::StripView;

impl<V: StripView> Ledger<V> {
    /// Write the strip as [`encode`] renders it, replacing the file. Clears
    /// the dirty flag only once the file has been flushed.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<(), LedgerError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| LedgerError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(encode(&self.entries).as_bytes())
            .map_err(|e| LedgerError::io(path, e))?;
        writer.flush().map_err(|e| LedgerError::io(path, e))?;

        self.dirty = false;
        info!(path = %path.display(), entries = self.entries.len(), "strip saved");
        Ok(())
    }

    /// Replace the strip with the records in `path`.
    ///
    /// Records are appended one at a time, so the view is republished as
    /// each is accepted. The first invalid record aborts the load and leaves
    /// the ledger empty and dirty; the previous contents are not restored.
    /// A file that cannot be opened leaves the ledger untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), LedgerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LedgerError::io(path, e))?;
        self.load_records(BufReader::new(file), path)?;
        info!(path = %path.display(), entries = self.entries.len(), "strip loaded");
        Ok(())
    }

    /// Replace the strip with the records in `text`, with the same
    /// semantics as [`Ledger::load_from_file`].
    pub fn load_from_str(&mut self, text: &str) -> Result<(), LedgerError> {
        self.load_records(text.as_bytes(), Path::new("<memory>"))
    }

    fn load_records<R: BufRead>(&mut self, reader: R, origin: &Path) -> Result<(), LedgerError> {
        self.entries.clear();
        self.redisplay();

        for (index, record) in reader.lines().enumerate() {
            let line = index + 1;
            let record = match record {
                Ok(record) => record,
                Err(e) => return Err(self.abandon_load(LedgerError::io(origin, e))),
            };

            let entry = match parse_record(&record, self.entries.is_empty()) {
                Ok(entry) => entry,
                Err(e) => return Err(self.abandon_load(e.at_line(line))),
            };

            let expected = entry
                .is_checkpoint()
                .then(|| fold::state(&self.entries).base());
            self.append(entry);

            if let Some(expected) = expected {
                let recorded = self.strip.lines().last().and_then(|l| l.snapshot);
                if !recorded.is_some_and(|r| same_value(r, expected)) {
                    warn!(line, ?recorded, expected, "checkpoint snapshot disagrees with recomputation");
                }
            }
        }

        self.dirty = false;
        Ok(())
    }

    fn abandon_load(&mut self, error: LedgerError) -> LedgerError {
        warn!(%error, discarded = self.entries.len(), "strip load rejected");
        self.entries.clear();
        self.dirty = true;
        self.redisplay();
        error
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}
