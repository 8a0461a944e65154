use crate::support;
use serde_json::json;

pub fn run(kind: Option<String>, limit: usize, records_path: String, json_output: bool) {
    let store = support::load_store_or_exit(&records_path);

    let rows = match kind.as_deref() {
        Some(kind) => store.by_kind(support::parse_kind_or_exit(kind)),
        None => store.recent(),
    };
    let total = rows.len();
    let shown: Vec<_> = rows.into_iter().take(limit).collect();
    let truncated = total - shown.len();

    if json_output {
        let payload = json!({
            "recordsPath": records_path,
            "total": total,
            "shown": shown.len(),
            "records": shown,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("primrec history ({total} matching)");
        for record in &shown {
            println!(
                "  {}  {}  ({}, {}) = {}",
                support::format_timestamp(&record.timestamp),
                record.operation,
                record.operand_a,
                record.operand_b,
                record.result
            );
        }
        if truncated > 0 {
            println!("  ... and {truncated} more");
        }
    }
}
