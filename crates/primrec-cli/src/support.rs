use chrono::{DateTime, Utc};
use primrec_kernel::{PrfResult, check_operand};
use primrec_records::{CalculationRecord, OperationKind, RecordStore};
use std::path::Path;

pub fn check_operands_or_exit(values: &[u64]) {
    for &value in values {
        if let Err(e) = check_operand(value) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn evaluate_or_exit(result: PrfResult<u64>) -> u64 {
    result.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn parse_kind_or_exit(kind: &str) -> OperationKind {
    kind.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

/// Load the record store. A missing file is an empty history, not an error.
pub fn load_store_or_exit(records_path: &str) -> RecordStore {
    if !Path::new(records_path).exists() {
        return RecordStore::default();
    }
    RecordStore::load_jsonl(records_path).unwrap_or_else(|e| {
        eprintln!("error: failed to load {records_path}: {e}");
        std::process::exit(1);
    })
}

pub fn save_store_or_exit(store: &RecordStore, records_path: &str) {
    store.save_jsonl(records_path).unwrap_or_else(|e| {
        eprintln!("error: failed to save {records_path}: {e}");
        std::process::exit(1);
    });
}

/// Append one freshly-stamped record and persist the store.
pub fn append_record_or_exit(
    records_path: &str,
    operation: OperationKind,
    operand_a: u64,
    operand_b: u64,
    result: u64,
) {
    let mut store = load_store_or_exit(records_path);
    store.insert(CalculationRecord::new(operation, operand_a, operand_b, result));
    save_store_or_exit(&store, records_path);
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn check_mark(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}
