use crate::support;
use primrec_kernel::{gcd, lcm};
use serde_json::json;

/// The worked-example pairs shown by the original calculator.
const EXAMPLES: [(u64, u64); 6] = [(48, 18), (56, 42), (1071, 462), (17, 13), (100, 25), (8, 12)];

pub fn run(json_output: bool) {
    let mut rows = Vec::with_capacity(EXAMPLES.len());
    for (a, b) in EXAMPLES {
        let gcd_result = support::evaluate_or_exit(gcd(a, b));
        let lcm_result = support::evaluate_or_exit(lcm(a, b));
        let product_holds = a * b == gcd_result * lcm_result;
        rows.push((a, b, gcd_result, lcm_result, product_holds));
    }

    if json_output {
        let payload = json!({
            "examples": rows
                .iter()
                .map(|(a, b, g, l, ok)| {
                    json!({
                        "operandA": a,
                        "operandB": b,
                        "gcd": g,
                        "lcm": l,
                        "productHolds": ok,
                    })
                })
                .collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("operands\tgcd\tlcm\tcheck");
        println!("{}", "-".repeat(40));
        for (a, b, g, l, ok) in rows {
            println!("{a}, {b}\t\t{g}\t{l}\t{}", support::check_mark(ok));
        }
    }
}
