//! 集計 (順序非依存)
//!
//! One mutex-guarded accumulator fed by every worker. All updates are sums or
//! appends that are sorted before being reported, so the report does not depend
//! on completion order.

use std::collections::BTreeMap;

use codestat_domain::{FileRecord, FileSummary, Totals};
use codestat_ports::RecordSink;
use codestat_shared_kernel::FilePath;
use parking_lot::Mutex;
use serde::Serialize;

/// A unit that failed inside a worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fault {
    pub path: FilePath,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTotals {
    pub name: String,
    #[serde(flatten)]
    pub totals: Totals,
}

/// Snapshot of everything aggregated so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub totals: Totals,
    /// Sorted by code lines (desc), then name.
    pub languages: Vec<LanguageTotals>,
    /// Only filled when per-file retention is on; sorted by path.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileSummary>,
    pub binary_files: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub faults: Vec<Fault>,
}

#[derive(Debug, Default)]
struct State {
    totals: Totals,
    languages: BTreeMap<String, Totals>,
    files: Vec<FileSummary>,
    binary_files: u64,
    faults: Vec<Fault>,
}

/// Thread-safe accumulator implementing [`RecordSink`].
///
/// Binary records are counted in `binary_files` and kept out of the line totals.
#[derive(Debug, Default)]
pub struct Aggregator {
    retain_files: bool,
    state: Mutex<State>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also keep one [`FileSummary`] per accepted file.
    #[must_use]
    pub fn retaining_files() -> Self {
        Self { retain_files: true, state: Mutex::default() }
    }

    pub fn add(&self, summary: FileSummary) {
        let mut state = self.state.lock();
        if summary.binary {
            state.binary_files += 1;
            return;
        }

        state.totals += &summary;
        *state.languages.entry(summary.language.clone()).or_default() += &summary;
        if self.retain_files {
            state.files.push(summary);
        }
    }

    pub fn totals(&self) -> Totals {
        self.state.lock().totals
    }

    #[must_use]
    pub fn snapshot(&self) -> Report {
        let state = self.state.lock();
        build_report(
            state.totals,
            &state.languages,
            state.files.clone(),
            state.binary_files,
            state.faults.clone(),
        )
    }

    #[must_use]
    pub fn into_report(self) -> Report {
        let state = self.state.into_inner();
        build_report(state.totals, &state.languages, state.files, state.binary_files, state.faults)
    }
}

fn build_report(
    totals: Totals,
    languages: &BTreeMap<String, Totals>,
    mut files: Vec<FileSummary>,
    binary_files: u64,
    mut faults: Vec<Fault>,
) -> Report {
    let mut languages: Vec<LanguageTotals> = languages
        .iter()
        .map(|(name, totals)| LanguageTotals { name: name.clone(), totals: *totals })
        .collect();
    languages.sort_by(|a, b| b.totals.code.cmp(&a.totals.code).then_with(|| a.name.cmp(&b.name)));
    files.sort_by(|a, b| a.path.cmp(&b.path));
    faults.sort_by(|a, b| a.path.cmp(&b.path));

    Report { totals, languages, files, binary_files, faults }
}

impl RecordSink for Aggregator {
    fn accept(&self, record: FileRecord) {
        // content はここで解放される
        self.add(record.summary());
    }

    fn fault(&self, path: &FilePath, message: &str) {
        self.state.lock().faults.push(Fault { path: path.clone(), message: message.to_string() });
    }
}
