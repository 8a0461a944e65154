//! Integration tests: end-to-end GCD/LCM golden vectors.
//!
//! Each fixture in tests/fixtures/ has:
//! - case.json: the operand pair
//! - expect.json: expected gcd, lcm, and whether a·b = gcd·lcm holds
//!
//! These tests load the fixtures, evaluate both number-theory operations
//! through the public API, and compare the serialized outcome exactly.

use primrec_kernel::{gcd, lcm};
use serde_json::{Value, json};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);

    let case_path = dir.join("case.json");
    let expect_path = dir.join("expect.json");

    let case_str = std::fs::read_to_string(&case_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", case_path.display()));
    let expect_str = std::fs::read_to_string(&expect_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", expect_path.display()));

    let case: Value = serde_json::from_str(&case_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", case_path.display()));
    let expected: Value = serde_json::from_str(&expect_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", expect_path.display()));

    let operands = case["operands"].as_array().expect("missing operands field");
    let a = operands[0].as_u64().expect("operand a must be a u64");
    let b = operands[1].as_u64().expect("operand b must be a u64");

    let g = gcd(a, b).unwrap_or_else(|e| panic!("gcd({a}, {b}) failed: {e}"));
    let l = lcm(a, b).unwrap_or_else(|e| panic!("lcm({a}, {b}) failed: {e}"));

    let result = json!({
        "gcd": g,
        "lcm": l,
        "productHolds": a * b == g * l,
    });

    assert_eq!(
        result,
        expected,
        "\n\nFixture: {name}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(&result).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap(),
    );
}

#[test]
fn golden_pair_48_18() {
    run_fixture("golden_pair_48_18");
}

#[test]
fn golden_coprime_17_13() {
    run_fixture("golden_coprime_17_13");
}

#[test]
fn golden_zero_operand_0_5() {
    run_fixture("golden_zero_operand_0_5");
}

#[test]
fn golden_textbook_1071_462() {
    run_fixture("golden_textbook_1071_462");
}
