//! Calculation history for the Primrec engine.
//!
//! This crate owns the persistence collaborator side of the system: the
//! record shape `(operation ∈ {GCD, LCM}, operand_a, operand_b, result,
//! timestamp)`, an in-memory store with newest-first queries, and a JSONL
//! file format. It knows nothing about how results are computed: the
//! kernel produces values and callers wrap them in records here.

pub mod jsonl;
pub mod memory;
pub mod record;

pub use jsonl::{RecordError, read_records, read_records_from_path, write_records, write_records_to_path};
pub use memory::{RECENT_SAMPLE_LIMIT, RecordStore, StoreStats};
pub use record::{CalculationRecord, OperationKind};
