use crate::support;
use primrec_kernel::{gcd, lcm};
use primrec_records::OperationKind;
use serde_json::json;

pub struct Args {
    pub a: u64,
    pub b: u64,
    pub no_record: bool,
    pub records: String,
    pub json: bool,
}

pub fn run_gcd(args: Args) {
    support::check_operands_or_exit(&[args.a, args.b]);
    let result = support::evaluate_or_exit(gcd(args.a, args.b));

    if !args.no_record {
        support::append_record_or_exit(&args.records, OperationKind::Gcd, args.a, args.b, result);
    }

    if args.json {
        let payload = json!({
            "operation": OperationKind::Gcd.as_str(),
            "operandA": args.a,
            "operandB": args.b,
            "result": result,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("gcd({}, {}) = {result}", args.a, args.b);
    }
}

pub fn run_lcm(args: Args) {
    support::check_operands_or_exit(&[args.a, args.b]);
    let result = support::evaluate_or_exit(lcm(args.a, args.b));

    if !args.no_record {
        support::append_record_or_exit(&args.records, OperationKind::Lcm, args.a, args.b, result);
    }

    if args.json {
        let payload = json!({
            "operation": OperationKind::Lcm.as_str(),
            "operandA": args.a,
            "operandB": args.b,
            "result": result,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("lcm({}, {}) = {result}", args.a, args.b);
    }
}

pub fn run_both(args: Args) {
    support::check_operands_or_exit(&[args.a, args.b]);
    let gcd_result = support::evaluate_or_exit(gcd(args.a, args.b));
    let lcm_result = support::evaluate_or_exit(lcm(args.a, args.b));
    let product_holds = args.a * args.b == gcd_result * lcm_result;

    if !args.no_record {
        support::append_record_or_exit(
            &args.records,
            OperationKind::Gcd,
            args.a,
            args.b,
            gcd_result,
        );
        support::append_record_or_exit(
            &args.records,
            OperationKind::Lcm,
            args.a,
            args.b,
            lcm_result,
        );
    }

    if args.json {
        let payload = json!({
            "operandA": args.a,
            "operandB": args.b,
            "gcd": gcd_result,
            "lcm": lcm_result,
            "productHolds": product_holds,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("gcd({}, {}) = {gcd_result}", args.a, args.b);
        println!("lcm({}, {}) = {lcm_result}", args.a, args.b);
        println!(
            "check: {} × {} = {}, gcd × lcm = {} {}",
            args.a,
            args.b,
            args.a * args.b,
            gcd_result * lcm_result,
            support::check_mark(product_holds)
        );
    }
}
