//! Structural checks on a rule set, run before coverage analysis.
//!
//! Every problem is collected; nothing here stops at the first error.

use casefn_ir::{ensure_sufficient_stack, Domain, Form, Name, Pattern, Rule, RuleSet, Span, Value};
use rustc_hash::FxHashSet;

use crate::CompileError;

/// Check every rule and return the domain the patterns are read against.
///
/// The domain is the declared one, or an unknown domain of the callback's
/// arity when nothing was declared or the declaration does not fit.
pub(crate) fn validate(rules: &RuleSet, errors: &mut Vec<CompileError>) -> Domain {
    let root = root_domain(rules, errors);
    let last = rules.rules.len().saturating_sub(1);
    let mut seen_default = false;

    for (index, rule) in rules.rules.iter().enumerate() {
        if rules.form == Form::Concise && rule.is_guarded() {
            errors.push(CompileError::GuardNotAllowedInConciseForm { span: rule.span });
        }
        if rule.is_default {
            let trailing = rules.rules[index..].iter().all(|r| r.is_default);
            if seen_default || (index != last && !trailing) {
                errors.push(CompileError::MisplacedDefault {
                    repeated: seen_default,
                    span: rule.span,
                });
            }
            seen_default = true;
            continue;
        }
        check_rule(rules, index, rule, &root, errors);
    }
    root
}

fn root_domain(rules: &RuleSet, errors: &mut Vec<CompileError>) -> Domain {
    let unknown = || {
        if rules.arity > 1 {
            Domain::Tuple(vec![Domain::Unknown; rules.arity])
        } else {
            Domain::Unknown
        }
    };

    if rules.arity == 0 {
        errors.push(CompileError::ArgumentArity {
            expected: 1,
            message: "a callback takes at least one argument".to_string(),
            span: Span::DUMMY,
        });
        return Domain::Unknown;
    }

    match &rules.domain {
        None => unknown(),
        Some(domain) if rules.arity == 1 => domain.clone(),
        Some(domain @ Domain::Tuple(items)) if items.len() == rules.arity => domain.clone(),
        Some(domain) => {
            errors.push(CompileError::ArgumentArity {
                expected: rules.arity,
                message: format!(
                    "domain `{domain}` does not describe {} callback arguments",
                    rules.arity
                ),
                span: Span::DUMMY,
            });
            unknown()
        }
    }
}

fn check_rule(
    rules: &RuleSet,
    index: usize,
    rule: &Rule,
    root: &Domain,
    errors: &mut Vec<CompileError>,
) {
    let span = rule.span;

    let Some(first) = rule.alternatives.first() else {
        errors.push(CompileError::EmptyAlternatives { index, span });
        return;
    };

    let expected: FxHashSet<Name> = first.binding_set();
    let mut reported_inconsistency = false;

    for pattern in &rule.alternatives {
        if rules.form == Form::Concise && !pattern.is_literal() {
            errors.push(CompileError::NonLiteralInConciseForm {
                pattern: pattern.clone(),
                span,
            });
        }

        if rules.arity > 1 {
            if let Some(message) = arity_problem(pattern, rules.arity) {
                errors.push(CompileError::ArgumentArity {
                    expected: rules.arity,
                    message,
                    span,
                });
                continue;
            }
        }

        if let Some(name) = pattern.duplicate_binding() {
            errors.push(CompileError::DuplicateBinding { name, span });
        }

        let found = pattern.binding_set();
        if found != expected && !reported_inconsistency {
            reported_inconsistency = true;
            errors.push(CompileError::InconsistentAlternativeBindings {
                expected: sorted(&expected),
                found: sorted(&found),
                span,
            });
        }

        check_pattern(pattern, root, span, errors);
    }
}

/// Multi-argument rules take one tuple pattern per alternative.
fn arity_problem(pattern: &Pattern, arity: usize) -> Option<String> {
    let found = match pattern {
        Pattern::Tuple(items) => items.len(),
        Pattern::Literal(Value::Tuple(items)) => items.len(),
        _ => {
            return Some(format!(
                "`{pattern}` is not a tuple; a {arity}-argument callback takes one pattern per argument"
            ));
        }
    };
    (found != arity).then(|| {
        format!("`{pattern}` has {found} elements, but the callback takes {arity} arguments")
    })
}

fn sorted(names: &FxHashSet<Name>) -> Vec<Name> {
    let mut out: Vec<Name> = names.iter().cloned().collect();
    out.sort();
    out
}

/// Check that `pattern` has the shape of `domain`.
fn check_pattern(pattern: &Pattern, domain: &Domain, span: Span, errors: &mut Vec<CompileError>) {
    ensure_sufficient_stack(|| match (pattern, domain) {
        (Pattern::Wildcard | Pattern::Binding(_), _)
        | (_, Domain::Unknown)
        | (Pattern::Literal(Value::Absent), Domain::Optional(_)) => {}
        (_, Domain::Optional(inner)) => check_pattern(pattern, inner, span, errors),
        (Pattern::Literal(value), _) => check_literal(value, domain, span, errors),
        (Pattern::Tuple(items), Domain::Tuple(domains)) => {
            if items.len() != domains.len() {
                errors.push(CompileError::PatternDomainMismatch {
                    message: format!(
                        "tuple pattern `{pattern}` has {} elements, but the domain `{domain}` has {}",
                        items.len(),
                        domains.len()
                    ),
                    span,
                });
                return;
            }
            for (item, domain) in items.iter().zip(domains) {
                check_pattern(item, domain, span, errors);
            }
        }
        (Pattern::Variant { tag, fields }, Domain::Variants(set)) => {
            let Some(def) = set.get(tag.as_str()) else {
                errors.push(CompileError::UnknownVariant {
                    tag: tag.clone(),
                    declared: set.tags().cloned().collect(),
                    span,
                });
                return;
            };
            if fields.len() != def.arity() {
                errors.push(CompileError::PatternDomainMismatch {
                    message: format!(
                        "variant `{tag}` has {} field(s), but `{pattern}` matches {}",
                        def.arity(),
                        fields.len()
                    ),
                    span,
                });
                return;
            }
            for (position, (field, expected)) in fields.iter().zip(&def.fields).enumerate() {
                if let (Some(given), Some(declared)) = (&field.name, &expected.name) {
                    if given != declared {
                        errors.push(CompileError::PatternDomainMismatch {
                            message: format!(
                                "field {} of `{tag}` is named `{declared}`, not `{given}`",
                                position + 1
                            ),
                            span,
                        });
                        continue;
                    }
                }
                check_pattern(&field.pattern, &expected.domain, span, errors);
            }
        }
        _ => errors.push(CompileError::PatternDomainMismatch {
            message: format!("pattern `{pattern}` does not fit the domain `{domain}`"),
            span,
        }),
    });
}

fn check_literal(value: &Value, domain: &Domain, span: Span, errors: &mut Vec<CompileError>) {
    if let (Some((tag, _)), Some(set)) = (value.as_variant(), domain.variant_set()) {
        if !set.contains(tag.as_str()) {
            errors.push(CompileError::UnknownVariant {
                tag: tag.clone(),
                declared: set.tags().cloned().collect(),
                span,
            });
            return;
        }
    }
    if !domain.admits(value) {
        errors.push(CompileError::PatternDomainMismatch {
            message: format!(
                "{} literal `{value}` does not fit the domain `{domain}`",
                value.type_name()
            ),
            span,
        });
    }
}

#[cfg(test)]
mod tests;
