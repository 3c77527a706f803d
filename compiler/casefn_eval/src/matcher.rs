//! Structural matching of patterns against values.
//!
//! Matching never errors: a shape or tag mismatch is simply no match. A
//! failed match keeps no partial captures.

use casefn_ir::{ensure_sufficient_stack, Bindings, Field, FieldPattern, Name, Pattern, Value};

/// Match one pattern, returning its captures on success.
pub fn attempt_match(pattern: &Pattern, value: &Value) -> Option<Bindings> {
    let mut env = Bindings::new();
    bind(pattern, value, &mut env).then_some(env)
}

/// Try each alternative left to right; the first match wins.
pub fn match_alternatives(alternatives: &[Pattern], value: &Value) -> Option<Bindings> {
    alternatives
        .iter()
        .find_map(|pattern| attempt_match(pattern, value))
}

fn bind(pattern: &Pattern, value: &Value, env: &mut Bindings) -> bool {
    ensure_sufficient_stack(|| match (pattern, value) {
        (Pattern::Wildcard, _) => true,
        (Pattern::Binding(name), value) => {
            env.bind(name.clone(), value.clone());
            true
        }
        (Pattern::Literal(literal), value) => literal_matches(literal, value),
        (Pattern::Tuple(items), Value::Tuple(values)) => {
            items.len() == values.len()
                && items
                    .iter()
                    .zip(values.iter())
                    .all(|(item, value)| bind(item, value, env))
        }
        (
            Pattern::Variant { tag, fields },
            Value::Variant {
                tag: value_tag,
                fields: value_fields,
            },
        ) => {
            tag == value_tag
                && fields.len() == value_fields.len()
                && fields
                    .iter()
                    .zip(value_fields.iter())
                    .all(|(field, value)| bind_field(field, value, env))
        }
        _ => false,
    })
}

fn bind_field(pattern: &FieldPattern, field: &Field, env: &mut Bindings) -> bool {
    names_agree(pattern.name.as_ref(), field.name.as_ref())
        && bind(&pattern.pattern, &field.value, env)
}

/// Compound literals match structurally, with the same field-label rule
/// as variant patterns.
fn literal_matches(literal: &Value, value: &Value) -> bool {
    ensure_sufficient_stack(|| match (literal, value) {
        (Value::Tuple(items), Value::Tuple(values)) => {
            items.len() == values.len()
                && items
                    .iter()
                    .zip(values.iter())
                    .all(|(item, value)| literal_matches(item, value))
        }
        (
            Value::Variant { tag, fields },
            Value::Variant {
                tag: value_tag,
                fields: value_fields,
            },
        ) => {
            tag == value_tag
                && fields.len() == value_fields.len()
                && fields.iter().zip(value_fields.iter()).all(|(field, value)| {
                    names_agree(field.name.as_ref(), value.name.as_ref())
                        && literal_matches(&field.value, &value.value)
                })
        }
        _ => literal == value,
    })
}

/// Field labels only constrain the match when both sides carry one.
fn names_agree(pattern: Option<&Name>, value: Option<&Name>) -> bool {
    match (pattern, value) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}
