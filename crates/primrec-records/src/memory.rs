//! Canonical in-memory state for calculation history.
//!
//! This is the memory boundary for `primrec-records`:
//! - load/store JSONL
//! - expose deterministic newest-first queries
//! - no evaluation concerns (the kernel never sees this crate)

use crate::jsonl::{RecordError, read_records_from_path, write_records_to_path};
use crate::record::{CalculationRecord, OperationKind};
use serde::Serialize;
use std::path::Path;

/// How many rows a statistics summary samples.
pub const RECENT_SAMPLE_LIMIT: usize = 5;

/// In-memory store of calculation records.
///
/// Insertion order is irrelevant; every query sorts newest-first with the
/// content id as a deterministic tie-break.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<CalculationRecord>,
}

/// Summary counts over a store, plus the most recent rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total: usize,
    pub gcd_count: usize,
    pub lcm_count: usize,
    pub recent: Vec<CalculationRecord>,
}

impl RecordStore {
    /// Build a store from fully-materialized records.
    pub fn from_records(records: Vec<CalculationRecord>) -> Self {
        Self { records }
    }

    /// Load store state from a JSONL file.
    pub fn load_jsonl(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        Ok(Self::from_records(read_records_from_path(path)?))
    }

    /// Persist store state to a JSONL file.
    pub fn save_jsonl(&self, path: impl AsRef<Path>) -> Result<(), RecordError> {
        write_records_to_path(path, &self.records)
    }

    /// Total number of records in memory.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has zero records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one record.
    pub fn insert(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    /// All records, newest first.
    pub fn recent(&self) -> Vec<&CalculationRecord> {
        let mut rows: Vec<&CalculationRecord> = self.records.iter().collect();
        sort_newest_first(&mut rows);
        rows
    }

    /// Records of one operation kind, newest first.
    pub fn by_kind(&self, kind: OperationKind) -> Vec<&CalculationRecord> {
        let mut rows: Vec<&CalculationRecord> = self
            .records
            .iter()
            .filter(|r| r.operation == kind)
            .collect();
        sort_newest_first(&mut rows);
        rows
    }

    /// Number of records of one operation kind.
    pub fn count(&self, kind: OperationKind) -> usize {
        self.records.iter().filter(|r| r.operation == kind).count()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Summary counts plus up to [`RECENT_SAMPLE_LIMIT`] most recent rows.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total: self.len(),
            gcd_count: self.count(OperationKind::Gcd),
            lcm_count: self.count(OperationKind::Lcm),
            recent: self
                .recent()
                .into_iter()
                .take(RECENT_SAMPLE_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

fn sort_newest_first(rows: &mut [&CalculationRecord]) {
    rows.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.id.cmp(&b.id))
    });
}
