#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::compile;
use casefn_diagnostic::ErrorCode;
use casefn_ir::{Action, Domain, Guard, HostError, Pattern, Rule, RuleSet};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::int).collect()
}

fn double() -> CompiledFunction {
    let rules = RuleSet::new().with_domain(Domain::Int).rule(Rule::case(
        Pattern::binding("n"),
        Action::fallible(|env| Ok(Value::int(env.int("n")? * 2))),
    ));
    compile(&rules).unwrap()
}

fn is_even() -> CompiledFunction {
    let rules = RuleSet::new()
        .with_domain(Domain::Int)
        .rule(
            Rule::case(Pattern::binding("n"), Action::constant(Value::bool(true)))
                .with_guard(Guard::new(|env| env.int("n").is_ok_and(|n| n % 2 == 0))),
        )
        .rule(Rule::default_case(Action::constant(Value::bool(false))));
    compile(&rules).unwrap()
}

#[test]
fn map_applies_in_order() {
    assert_eq!(
        map_values(&double(), &ints(&[1, 2, 3])).unwrap(),
        ints(&[2, 4, 6])
    );
    assert_eq!(map_values(&double(), &[]).unwrap(), vec![]);
}

#[test]
fn filter_keeps_matching_values() {
    assert_eq!(
        filter_values(&is_even(), &ints(&[1, 2, 3, 4])).unwrap(),
        ints(&[2, 4])
    );
}

#[test]
fn filter_rejects_non_boolean_results() {
    let err = filter_values(&double(), &ints(&[1])).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6004);
}

#[test]
fn find_stops_at_the_first_hit() {
    assert_eq!(
        find_value(&is_even(), &ints(&[1, 3, 6, 8])).unwrap(),
        Some(Value::int(6))
    );
    assert_eq!(find_value(&is_even(), &ints(&[1, 3])).unwrap(), None);
}

#[test]
fn fold_threads_the_accumulator_left_to_right() {
    // acc * 10 + x makes the visiting order visible in the digits.
    let rules = RuleSet::new().with_arity(2).rule(Rule::case(
        Pattern::tuple(vec![Pattern::binding("acc"), Pattern::binding("x")]),
        Action::fallible(|env| Ok(Value::int(env.int("acc")? * 10 + env.int("x")?))),
    ));
    let f = compile(&rules).unwrap();
    assert_eq!(
        fold_values(&f, Value::int(0), &ints(&[1, 2, 3])).unwrap(),
        Value::int(123)
    );
    assert_eq!(
        fold_values(&f, Value::int(7), &[]).unwrap(),
        Value::int(7)
    );
}

#[test]
fn errors_stop_the_traversal() {
    let rules = RuleSet::new().with_domain(Domain::Int).rule(Rule::case(
        Pattern::binding("n"),
        Action::fallible(|env| match env.int("n")? {
            0 => Err(HostError::new("zero")),
            n => Ok(Value::int(100 / n)),
        }),
    ));
    let f = compile(&rules).unwrap();
    let err = map_values(&f, &ints(&[5, 0, 2])).unwrap_err();
    assert_eq!(err.to_string(), "zero");
    let err = par_map_values(&f, &ints(&[5, 0, 2])).unwrap_err();
    assert_eq!(err.to_string(), "zero");
}

proptest! {
    #[test]
    fn parallel_map_preserves_order(values in prop::collection::vec(-1_000_i64..1_000, 0..64)) {
        let values = ints(&values);
        let f = double();
        prop_assert_eq!(par_map_values(&f, &values).unwrap(), map_values(&f, &values).unwrap());
    }
}
