//! Calculation records: the persisted shape of one GCD/LCM evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Which number-theory operation produced a record.
///
/// Wire form is exactly `"GCD"` / `"LCM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    Gcd,
    Lcm,
}

impl OperationKind {
    /// String representation, matching the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Gcd => "GCD",
            OperationKind::Lcm => "LCM",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gcd" => Ok(Self::Gcd),
            "lcm" => Ok(Self::Lcm),
            _ => Err(format!("unknown operation kind: {s}")),
        }
    }
}

/// One completed calculation.
///
/// The id is a content digest over the substantive fields fed in stable
/// order, so identical rows get identical ids regardless of where they
/// were produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: String,
    pub operation: OperationKind,
    pub operand_a: u64,
    pub operand_b: u64,
    pub result: u64,
    pub timestamp: DateTime<Utc>,
}

impl CalculationRecord {
    /// A record stamped with the current time.
    pub fn new(operation: OperationKind, operand_a: u64, operand_b: u64, result: u64) -> Self {
        Self::with_timestamp(operation, operand_a, operand_b, result, Utc::now())
    }

    /// A record with an explicit timestamp. Deterministic; what tests use.
    pub fn with_timestamp(
        operation: OperationKind,
        operand_a: u64,
        operand_b: u64,
        result: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let id = record_digest(operation, operand_a, operand_b, result, timestamp);
        Self {
            id,
            operation,
            operand_a,
            operand_b,
            result,
            timestamp,
        }
    }
}

/// SHA-256 over the record fields, `name:value` per line in stable order.
fn record_digest(
    operation: OperationKind,
    operand_a: u64,
    operand_b: u64,
    result: u64,
    timestamp: DateTime<Utc>,
) -> String {
    let mut hasher = Sha256::new();
    for (name, value) in [
        ("operation", operation.as_str().to_string()),
        ("operand_a", operand_a.to_string()),
        ("operand_b", operand_b.to_string()),
        ("result", result.to_string()),
        ("timestamp", timestamp.to_rfc3339()),
    ] {
        hasher.update(name.as_bytes());
        hasher.update(b":");
        hasher.update(value.as_bytes());
        hasher.update(b"\n");
    }
    let hash = hasher.finalize();
    format!("{hash:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().expect("valid timestamp")
    }

    #[test]
    fn operation_kind_wire_form() {
        assert_eq!(
            serde_json::to_string(&OperationKind::Gcd).unwrap(),
            "\"GCD\""
        );
        assert_eq!(
            serde_json::to_string(&OperationKind::Lcm).unwrap(),
            "\"LCM\""
        );
        let parsed: OperationKind = serde_json::from_str("\"GCD\"").unwrap();
        assert_eq!(parsed, OperationKind::Gcd);
    }

    #[test]
    fn operation_kind_parse_is_case_insensitive() {
        assert_eq!("gcd".parse::<OperationKind>().unwrap(), OperationKind::Gcd);
        assert_eq!("LCM".parse::<OperationKind>().unwrap(), OperationKind::Lcm);
        assert!("mod".parse::<OperationKind>().is_err());
    }

    #[test]
    fn record_id_is_deterministic() {
        let at = fixed_time(1_700_000_000);
        let r1 = CalculationRecord::with_timestamp(OperationKind::Gcd, 48, 18, 6, at);
        let r2 = CalculationRecord::with_timestamp(OperationKind::Gcd, 48, 18, 6, at);
        assert_eq!(r1.id, r2.id);
    }

    #[test]
    fn record_id_is_sensitive_to_fields() {
        let at = fixed_time(1_700_000_000);
        let gcd = CalculationRecord::with_timestamp(OperationKind::Gcd, 48, 18, 6, at);
        let lcm = CalculationRecord::with_timestamp(OperationKind::Lcm, 48, 18, 144, at);
        let later = CalculationRecord::with_timestamp(OperationKind::Gcd, 48, 18, 6, fixed_time(1_700_000_001));
        assert_ne!(gcd.id, lcm.id);
        assert_ne!(gcd.id, later.id);
    }

    #[test]
    fn record_round_trips_through_json() {
        let record =
            CalculationRecord::with_timestamp(OperationKind::Lcm, 48, 18, 144, fixed_time(0));
        let line = serde_json::to_string(&record).unwrap();
        assert!(line.contains("\"operation\":\"LCM\""));
        let back: CalculationRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back, record);
    }
}
