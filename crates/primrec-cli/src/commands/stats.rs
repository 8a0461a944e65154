use crate::support;

pub fn run(records_path: String, json_output: bool) {
    let store = support::load_store_or_exit(&records_path);
    let stats = store.stats();

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).expect("json serialization")
        );
    } else {
        println!("primrec stats");
        println!("  Total: {}", stats.total);
        println!("  GCD: {}", stats.gcd_count);
        println!("  LCM: {}", stats.lcm_count);
        if !stats.recent.is_empty() {
            println!("  Recent:");
            for record in &stats.recent {
                println!(
                    "    - {}  {}  ({}, {}) = {}",
                    support::format_timestamp(&record.timestamp),
                    record.operation,
                    record.operand_a,
                    record.operand_b,
                    record.result
                );
            }
        }
    }
}
