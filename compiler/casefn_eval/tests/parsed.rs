//! End-to-end scenarios written in source form.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use casefn_diagnostic::ErrorCode;
use casefn_eval::adapter::fold_values;
use casefn_eval::{compile, CompiledFunction};
use casefn_ir::Value;
use casefn_parse::{parse, parse_value, HostFunctions, ParseOptions};
use pretty_assertions::assert_eq;

fn host() -> HostFunctions {
    let mut host = HostFunctions::new().with_guard("big", |env| env.int("n").is_ok_and(|n| n > 10_000));
    for (name, factor) in [
        ("pound", 0.373),
        ("ounce", 0.031_103),
        ("pennyweight", 0.001_555),
        ("grain", 0.000_064_8),
    ] {
        host = host.with_action(name, move |env| {
            Ok(Value::float(env.float("acc")? + env.float("q")? * factor))
        });
    }
    host
}

fn compile_source(source: &str, options: &ParseOptions) -> CompiledFunction {
    let rules = parse(source, &host(), options).into_result().unwrap();
    compile(&rules).unwrap()
}

fn compile_error(source: &str) -> ErrorCode {
    let rules = parse(source, &host(), &ParseOptions::default())
        .into_result()
        .unwrap();
    compile(&rules).unwrap_err().code()
}

const KILOGRAMS: &str = r"
    domain (float, enum { Pound(float), Ounce(float), Pennyweight(float), Grain(float) })
    {
        case (acc, Pound(q)): @pound
        case (acc, Ounce(q)): @ounce
        case (acc, Pennyweight(q)): @pennyweight
        case (acc, Grain(q)): @grain
    }
";

#[test]
fn big_and_small() {
    let f = compile_source(
        r#"domain int { case n where big: "big" case n: "small" }"#,
        &ParseOptions::default(),
    );
    assert_eq!(f.call(Value::int(15_000)).unwrap(), Value::text("big"));
    assert_eq!(f.call(Value::int(500)).unwrap(), Value::text("small"));
}

#[test]
fn concise_form() {
    let f = compile_source(
        r#"domain int { cases 1: "one", 2: "two" default: "" }"#,
        &ParseOptions::default(),
    );
    assert_eq!(f.call(Value::int(1)).unwrap(), Value::text("one"));
    assert_eq!(f.call(Value::int(2)).unwrap(), Value::text("two"));
    assert_eq!(f.call(Value::int(99)).unwrap(), Value::text(""));
}

#[test]
fn weight_conversion_fold() {
    let f = compile_source(KILOGRAMS, &ParseOptions::default().with_arity(2));
    let items = [
        parse_value("Pound(5.0)").unwrap(),
        parse_value("Ounce(4.0)").unwrap(),
    ];
    let total = fold_values(&f, Value::float(0.0), &items).unwrap();
    assert_eq!(total, Value::float((0.0 + 5.0 * 0.373) + 4.0 * 0.031_103));
}

#[test]
fn coverage_errors() {
    assert_eq!(
        compile_error(r#"domain int { cases 1: "one", 2: "two" }"#),
        ErrorCode::E3006
    );
    assert_eq!(
        compile_error(r#"domain enum { A, B } { case A: 1 case C: 2 }"#),
        ErrorCode::E3003
    );
    assert_eq!(
        compile_error("domain (int, int) { case (a, a): a }"),
        ErrorCode::E3001
    );
}

#[test]
fn booleans_compile_without_default() {
    let f = compile_source(
        r#"domain bool { cases true: "yes", false: "no" }"#,
        &ParseOptions::default(),
    );
    assert_eq!(f.call(Value::bool(false)).unwrap(), Value::text("no"));
}

#[test]
fn return_is_rejected_at_parse_time() {
    let out = parse(
        "{ case n: return n }",
        &host(),
        &ParseOptions::default(),
    );
    let codes: Vec<ErrorCode> = out.errors.iter().map(|e| e.code).collect();
    assert_eq!(codes.first(), Some(&ErrorCode::E1008));
}
