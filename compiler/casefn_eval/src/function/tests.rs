#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use casefn_canon::LintLevel;
use casefn_diagnostic::ErrorCode;
use casefn_ir::{Action, Domain, Field, FieldDef, Guard, HostError, Pattern, Rule, VariantDef};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn text(s: &str) -> Action {
    Action::constant(Value::text(s))
}

fn big_or_small() -> RuleSet {
    RuleSet::new()
        .with_domain(Domain::Int)
        .rule(
            Rule::case(Pattern::binding("n"), text("big"))
                .with_guard(Guard::new(|env| env.int("n").is_ok_and(|n| n > 10_000))),
        )
        .rule(Rule::case(Pattern::binding("n"), text("small")))
}

#[test]
fn guard_selects_between_overlapping_rules() {
    let f = compile(&big_or_small()).unwrap();
    assert_eq!(f.call(Value::int(15_000)).unwrap(), Value::text("big"));
    assert_eq!(f.call(Value::int(500)).unwrap(), Value::text("small"));
    assert!(f.warnings().is_empty());
}

#[test]
fn declaration_order_decides_overlaps() {
    let rules = RuleSet::new()
        .rule(Rule::case(Pattern::literal(1_i64), text("first")))
        .rule(Rule::case(Pattern::binding("n"), text("second")));
    let f = compile(&rules).unwrap();
    assert_eq!(f.call(Value::int(1)).unwrap(), Value::text("first"));
    assert_eq!(f.call(Value::int(2)).unwrap(), Value::text("second"));
}

#[test]
fn rejected_guard_leaves_no_captures_for_later_rules() {
    let rules = RuleSet::new()
        .rule(
            Rule::case(Pattern::binding("x"), text("guarded"))
                .with_guard(Guard::new(|_| false)),
        )
        .rule(Rule::case(
            Pattern::Wildcard,
            Action::fallible(|env| {
                if env.is_empty() {
                    Ok(Value::text("clean"))
                } else {
                    Err(HostError::new("leaked captures"))
                }
            }),
        ));
    let f = compile(&rules).unwrap();
    assert_eq!(f.call(Value::int(3)).unwrap(), Value::text("clean"));
}

#[test]
fn guard_failure_does_not_retry_other_alternatives() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let rules = RuleSet::new()
        .rule(
            Rule::alternatives(
                vec![Pattern::binding("x"), Pattern::binding("x")],
                text("guarded"),
            )
            .with_guard(Guard::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                false
            })),
        )
        .rule(Rule::default_case(text("default")));
    let f = compile_with(
        &rules,
        &CompileOptions::default().with_unreachable(LintLevel::Allow),
    )
    .unwrap();
    assert_eq!(f.call(Value::int(3)).unwrap(), Value::text("default"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn host_errors_propagate_unchanged() {
    let rules = RuleSet::new().rule(Rule::case(
        Pattern::binding("x"),
        Action::fallible(|_| Err(HostError::new("disk on fire"))),
    ));
    let f = compile(&rules).unwrap();
    let err = f.call(Value::int(1)).unwrap_err();
    assert!(matches!(err, InvokeError::Host(_)));
    assert_eq!(err.to_string(), "disk on fire");
    assert_eq!(err.code(), ErrorCode::E6003);
}

#[test]
fn compile_rejects_non_exhaustive_sets() {
    let rules = RuleSet::concise()
        .with_domain(Domain::Int)
        .rule(Rule::case(Pattern::literal(1_i64), text("a")))
        .rule(Rule::case(Pattern::literal(2_i64), text("b")));
    let err = compile(&rules).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3006);
}

#[test]
fn deny_turns_unreachable_rules_into_errors() {
    let rules = RuleSet::new()
        .rule(Rule::case(Pattern::binding("n"), text("any")))
        .rule(Rule::case(Pattern::literal(1_i64), text("one")));
    let f = compile(&rules).unwrap();
    assert_eq!(f.warnings().len(), 1);

    let err = compile_with(&rules, &CompileOptions::deny_warnings()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::W3001);
}

#[test]
fn argument_count_is_checked() {
    let f = compile(&big_or_small()).unwrap();
    let err = f.invoke(&[Value::int(1), Value::int(2)]).unwrap_err();
    assert!(matches!(
        err,
        InvokeError::ArgumentCount {
            expected: 1,
            found: 2
        }
    ));
    assert_eq!(err.code(), ErrorCode::E6002);
}

#[test]
fn two_arguments_are_matched_as_a_tuple() {
    let rules = RuleSet::new()
        .with_arity(2)
        .rule(Rule::case(
            Pattern::tuple(vec![Pattern::binding("acc"), Pattern::literal(0_i64)]),
            Action::capture("acc"),
        ))
        .rule(Rule::case(
            Pattern::tuple(vec![Pattern::Wildcard, Pattern::binding("x")]),
            Action::capture("x"),
        ));
    let f = compile(&rules).unwrap();
    assert_eq!(f.arity(), 2);
    assert_eq!(f.call2(Value::int(9), Value::int(0)).unwrap(), Value::int(9));
    assert_eq!(f.call2(Value::int(9), Value::int(4)).unwrap(), Value::int(4));
}

#[test]
fn input_outside_the_domain_is_an_invariant_violation() {
    let rules = RuleSet::new()
        .with_domain(Domain::Bool)
        .rule(Rule::case(Pattern::literal(true), text("yes")))
        .rule(Rule::case(Pattern::literal(false), text("no")));
    let f = compile(&rules).unwrap();
    let err = f.call(Value::int(1)).unwrap_err();
    assert!(matches!(err, InvokeError::NonExhaustive { .. }));
    assert_eq!(err.code(), ErrorCode::E6001);
    assert!(err.to_diagnostic().is_error());
}

#[test]
fn variant_literals_cover_labelled_inputs() {
    let switch = Domain::variants(vec![VariantDef::new(
        "On",
        vec![FieldDef::named("level", Domain::Bool)],
    )]);
    let rules = RuleSet::new()
        .with_domain(switch.clone())
        .rule(Rule::case(
            Pattern::Literal(Value::variant("On", vec![Value::bool(true)])),
            text("high"),
        ))
        .rule(Rule::case(
            Pattern::Literal(Value::variant("On", vec![Value::bool(false)])),
            text("low"),
        ));
    let f = compile(&rules).unwrap();

    for (level, expected) in [(true, "high"), (false, "low")] {
        let input = Value::variant_fields("On", vec![Field::named("level", Value::bool(level))]);
        assert!(switch.admits(&input));
        assert_eq!(f.call(input).unwrap(), Value::text(expected));
    }
}

#[test]
fn test_requires_a_boolean() {
    let rules = RuleSet::new().rule(Rule::case(Pattern::binding("x"), Action::capture("x")));
    let f = compile(&rules).unwrap();
    assert!(f.test(Value::bool(true)).unwrap());
    let err = f.test(Value::int(1)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6004);
}

#[test]
fn compiled_functions_are_shareable() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<CompiledFunction>();

    let f = compile(&big_or_small()).unwrap();
    let g = f.clone();
    let handle = std::thread::spawn(move || g.call(Value::int(20_000)).unwrap());
    assert_eq!(handle.join().unwrap(), Value::text("big"));
    assert_eq!(f.call(Value::int(1)).unwrap(), Value::text("small"));
}

/// Literal rules `k -> index`, plus a trailing catch-all.
fn literal_rules(keys: &[i64]) -> RuleSet {
    let mut rules = RuleSet::new().with_domain(Domain::Int);
    for (index, key) in keys.iter().enumerate() {
        rules.push(Rule::case(
            Pattern::literal(*key),
            Action::constant(Value::int(index as i64)),
        ));
    }
    rules.rule(Rule::default_case(Action::constant(Value::int(-1))))
}

proptest! {
    #[test]
    fn first_matching_rule_wins(keys in prop::collection::vec(-5_i64..5, 1..8), input in -6_i64..6) {
        let options = CompileOptions::default().with_unreachable(LintLevel::Allow);
        let f = compile_with(&literal_rules(&keys), &options).unwrap();
        let expected = keys
            .iter()
            .position(|k| *k == input)
            .map_or(-1, |i| i as i64);
        prop_assert_eq!(f.call(Value::int(input)).unwrap(), Value::int(expected));
    }

    #[test]
    fn compiling_twice_behaves_the_same(keys in prop::collection::vec(-5_i64..5, 1..8), input in -6_i64..6) {
        let options = CompileOptions::default().with_unreachable(LintLevel::Allow);
        let rules = literal_rules(&keys);
        let a = compile_with(&rules, &options).unwrap();
        let b = compile_with(&rules, &options).unwrap();
        prop_assert_eq!(a.call(Value::int(input)).unwrap(), b.call(Value::int(input)).unwrap());
        prop_assert_eq!(a.warnings(), b.warnings());
    }
}
