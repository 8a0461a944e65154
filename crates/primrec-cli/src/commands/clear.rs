use crate::support;
use serde_json::json;

pub fn run(records_path: String, json_output: bool) {
    let mut store = support::load_store_or_exit(&records_path);
    let removed = store.len();
    store.clear();
    support::save_store_or_exit(&store, &records_path);

    if json_output {
        let payload = json!({
            "recordsPath": records_path,
            "removed": removed,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("cleared {removed} recorded calculations");
    }
}
