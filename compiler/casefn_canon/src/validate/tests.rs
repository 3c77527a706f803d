use super::*;
use casefn_diagnostic::ErrorCode;
use casefn_ir::{Action, FieldDef, FieldPattern, Guard, VariantDef};
use pretty_assertions::assert_eq;

fn act() -> Action {
    Action::constant(Value::int(0))
}

fn weights() -> Domain {
    Domain::variants(vec![
        VariantDef::positional("Pound", vec![Domain::Float]),
        VariantDef::new("Ounce", vec![FieldDef::named("weight", Domain::Float)]),
        VariantDef::positional("Empty", vec![]),
    ])
}

fn codes(rules: &RuleSet) -> Vec<ErrorCode> {
    let mut errors = Vec::new();
    validate(rules, &mut errors);
    errors.iter().map(CompileError::code).collect()
}

#[test]
fn clean_rule_set_has_no_errors() {
    let rules = RuleSet::new()
        .with_domain(weights())
        .rule(Rule::case(Pattern::variant("Pound", vec![Pattern::binding("q")]), act()))
        .rule(Rule::case(
            Pattern::variant_fields("Ounce", vec![FieldPattern::named("weight", Pattern::binding("w"))]),
            act(),
        ))
        .rule(Rule::default_case(act()));
    assert_eq!(codes(&rules), vec![]);
}

#[test]
fn duplicate_binding() {
    let rules = RuleSet::new().rule(Rule::case(
        Pattern::tuple(vec![Pattern::binding("x"), Pattern::binding("x")]),
        act(),
    ));
    let mut errors = Vec::new();
    validate(&rules, &mut errors);
    assert_eq!(
        errors,
        vec![CompileError::DuplicateBinding {
            name: Name::new("x"),
            span: Span::DUMMY,
        }]
    );
}

#[test]
fn alternatives_must_bind_the_same_names() {
    let rules = RuleSet::new().rule(Rule::alternatives(
        vec![
            Pattern::tuple(vec![Pattern::binding("a"), Pattern::binding("q")]),
            Pattern::tuple(vec![Pattern::Wildcard, Pattern::binding("q")]),
            Pattern::tuple(vec![Pattern::binding("b"), Pattern::binding("q")]),
        ],
        act(),
    ));
    let mut errors = Vec::new();
    validate(&rules, &mut errors);
    assert_eq!(
        errors,
        vec![CompileError::InconsistentAlternativeBindings {
            expected: vec![Name::new("a"), Name::new("q")],
            found: vec![Name::new("q")],
            span: Span::DUMMY,
        }]
    );
}

#[test]
fn alternatives_in_a_different_order_are_consistent() {
    let rules = RuleSet::new().rule(Rule::alternatives(
        vec![
            Pattern::tuple(vec![Pattern::binding("a"), Pattern::binding("b")]),
            Pattern::tuple(vec![Pattern::binding("b"), Pattern::binding("a")]),
        ],
        act(),
    ));
    assert_eq!(codes(&rules), vec![]);
}

#[test]
fn unknown_variant_lists_the_declared_tags() {
    let rules = RuleSet::new()
        .with_domain(weights())
        .rule(Rule::case(Pattern::variant("Stone", vec![Pattern::Wildcard]), act()));
    let mut errors = Vec::new();
    validate(&rules, &mut errors);
    assert_eq!(
        errors,
        vec![CompileError::UnknownVariant {
            tag: Name::new("Stone"),
            declared: vec![Name::new("Pound"), Name::new("Ounce"), Name::new("Empty")],
            span: Span::DUMMY,
        }]
    );
}

#[test]
fn unknown_variant_in_a_literal() {
    let rules = RuleSet::new()
        .with_domain(weights())
        .rule(Rule::case(Pattern::Literal(Value::unit_variant("Stone")), act()));
    assert_eq!(codes(&rules), vec![ErrorCode::E3003]);
}

#[test]
fn concise_form_restrictions() {
    let rules = RuleSet::concise()
        .rule(Rule::case(Pattern::literal(1_i64), act()).with_guard(Guard::new(|_| true)))
        .rule(Rule::case(Pattern::binding("n"), act()))
        .rule(Rule::default_case(act()));
    assert_eq!(codes(&rules), vec![ErrorCode::E3004, ErrorCode::E3005]);
}

#[test]
fn concise_default_cannot_be_guarded() {
    let rules = RuleSet::concise()
        .with_domain(Domain::Bool)
        .rule(Rule::case(Pattern::literal(true), act()))
        .rule(Rule::case(Pattern::literal(false), act()))
        .rule(Rule::default_case(act()).with_guard(Guard::new(|_| true)));
    assert_eq!(codes(&rules), vec![ErrorCode::E3004]);
}

#[test]
fn patterns_must_fit_the_domain() {
    let rules = RuleSet::new()
        .with_domain(weights())
        .rule(Rule::case(Pattern::literal(1_i64), act()))
        .rule(Rule::case(Pattern::tuple(vec![Pattern::Wildcard, Pattern::Wildcard]), act()))
        .rule(Rule::case(Pattern::variant("Pound", vec![]), act()))
        .rule(Rule::case(
            Pattern::variant_fields("Ounce", vec![FieldPattern::named("mass", Pattern::Wildcard)]),
            act(),
        ))
        .rule(Rule::case(Pattern::variant("Pound", vec![Pattern::literal("x")]), act()));
    assert_eq!(codes(&rules), vec![ErrorCode::E3007; 5]);
}

#[test]
fn optional_domains_admit_absent() {
    let rules = RuleSet::new()
        .with_domain(Domain::optional(Domain::Int))
        .rule(Rule::case(Pattern::Literal(Value::Absent), act()))
        .rule(Rule::case(Pattern::literal(3_i64), act()))
        .rule(Rule::case(Pattern::literal(true), act()));
    assert_eq!(codes(&rules), vec![ErrorCode::E3007]);

    let rules = RuleSet::new()
        .with_domain(Domain::Int)
        .rule(Rule::case(Pattern::Literal(Value::Absent), act()));
    assert_eq!(codes(&rules), vec![ErrorCode::E3007]);
}

#[test]
fn tuple_arity_against_the_domain() {
    let rules = RuleSet::new()
        .with_domain(Domain::Tuple(vec![Domain::Int, Domain::Int]))
        .rule(Rule::case(
            Pattern::tuple(vec![Pattern::Wildcard, Pattern::Wildcard, Pattern::Wildcard]),
            act(),
        ));
    assert_eq!(codes(&rules), vec![ErrorCode::E3007]);
}

#[test]
fn default_placement() {
    let rules = RuleSet::new()
        .rule(Rule::default_case(act()))
        .rule(Rule::case(Pattern::literal(1_i64), act()));
    let mut errors = Vec::new();
    validate(&rules, &mut errors);
    assert_eq!(
        errors,
        vec![CompileError::MisplacedDefault {
            repeated: false,
            span: Span::DUMMY,
        }]
    );

    let rules = RuleSet::new()
        .rule(Rule::case(Pattern::literal(1_i64), act()))
        .rule(Rule::default_case(act()))
        .rule(Rule::default_case(act()));
    let mut errors = Vec::new();
    validate(&rules, &mut errors);
    assert_eq!(
        errors,
        vec![CompileError::MisplacedDefault {
            repeated: true,
            span: Span::DUMMY,
        }]
    );
}

#[test]
fn empty_alternatives() {
    let rules = RuleSet::new()
        .rule(Rule::case(Pattern::literal(1_i64), act()))
        .rule(Rule::alternatives(Vec::new(), act()));
    let mut errors = Vec::new();
    validate(&rules, &mut errors);
    assert_eq!(
        errors,
        vec![CompileError::EmptyAlternatives {
            index: 1,
            span: Span::DUMMY,
        }]
    );
}

#[test]
fn multi_argument_rules_take_tuples() {
    let rules = RuleSet::new()
        .with_arity(2)
        .rule(Rule::case(
            Pattern::tuple(vec![Pattern::binding("acc"), Pattern::binding("x")]),
            act(),
        ))
        .rule(Rule::case(Pattern::binding("args"), act()))
        .rule(Rule::case(Pattern::tuple(vec![Pattern::Wildcard; 3]), act()))
        .rule(Rule::default_case(act()));
    assert_eq!(codes(&rules), vec![ErrorCode::E3009, ErrorCode::E3009]);
}

#[test]
fn multi_argument_domain_must_be_a_tuple() {
    let rules = RuleSet::new()
        .with_arity(2)
        .with_domain(Domain::Int)
        .rule(Rule::default_case(act()));
    let mut errors = Vec::new();
    let root = validate(&rules, &mut errors);
    assert_eq!(errors.iter().map(CompileError::code).collect::<Vec<_>>(), vec![ErrorCode::E3009]);
    assert_eq!(root, Domain::Tuple(vec![Domain::Unknown, Domain::Unknown]));
}

#[test]
fn zero_arity_is_rejected() {
    let rules = RuleSet::new().with_arity(0).rule(Rule::default_case(act()));
    assert_eq!(codes(&rules), vec![ErrorCode::E3009]);
}
