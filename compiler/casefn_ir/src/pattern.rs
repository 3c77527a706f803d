//! Match patterns.
//!
//! A pattern is one alternative of a case label. Patterns are plain trees:
//! literals, wildcards, bindings, fixed-arity tuples and variant tags with
//! field sub-patterns.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::{Name, Value};

/// One field sub-pattern of a variant pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPattern {
    /// Optional field label. When present it must agree with the value's
    /// field name at the same position.
    pub name: Option<Name>,
    pub pattern: Pattern,
}

impl FieldPattern {
    pub fn positional(pattern: Pattern) -> Self {
        FieldPattern {
            name: None,
            pattern,
        }
    }

    pub fn named(name: impl Into<Name>, pattern: Pattern) -> Self {
        FieldPattern {
            name: Some(name.into()),
            pattern,
        }
    }
}

/// A structural match pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// Matches a structurally equal value. Captures nothing.
    Literal(Value),
    /// `_`: matches anything, captures nothing.
    Wildcard,
    /// Matches anything and captures it under `name`.
    Binding(Name),
    Tuple(Vec<Pattern>),
    Variant {
        tag: Name,
        fields: Vec<FieldPattern>,
    },
}

impl Pattern {
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    pub fn binding(name: impl Into<Name>) -> Self {
        Pattern::Binding(name.into())
    }

    pub fn tuple(items: Vec<Pattern>) -> Self {
        Pattern::Tuple(items)
    }

    /// A variant pattern with positional field sub-patterns.
    pub fn variant(tag: impl Into<Name>, fields: Vec<Pattern>) -> Self {
        Pattern::Variant {
            tag: tag.into(),
            fields: fields.into_iter().map(FieldPattern::positional).collect(),
        }
    }

    /// A variant pattern with no fields, e.g. `Empty`.
    pub fn unit_variant(tag: impl Into<Name>) -> Self {
        Pattern::variant(tag, Vec::new())
    }

    pub fn variant_fields(tag: impl Into<Name>, fields: Vec<FieldPattern>) -> Self {
        Pattern::Variant {
            tag: tag.into(),
            fields,
        }
    }

    /// Whether the pattern matches every value (wildcard or binding).
    pub fn is_irrefutable(&self) -> bool {
        matches!(self, Pattern::Wildcard | Pattern::Binding(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Pattern::Literal(_))
    }

    /// Capture names in left-to-right order, duplicates included.
    pub fn bindings(&self) -> Vec<Name> {
        let mut out = Vec::new();
        self.collect_bindings(&mut out);
        out
    }

    fn collect_bindings(&self, out: &mut Vec<Name>) {
        crate::ensure_sufficient_stack(|| match self {
            Pattern::Literal(_) | Pattern::Wildcard => {}
            Pattern::Binding(name) => out.push(name.clone()),
            Pattern::Tuple(items) => {
                for item in items {
                    item.collect_bindings(out);
                }
            }
            Pattern::Variant { fields, .. } => {
                for field in fields {
                    field.pattern.collect_bindings(out);
                }
            }
        });
    }

    /// The set of distinct capture names.
    pub fn binding_set(&self) -> FxHashSet<Name> {
        self.bindings().into_iter().collect()
    }

    /// The first capture name that appears twice, if any.
    pub fn duplicate_binding(&self) -> Option<Name> {
        let mut seen = FxHashSet::default();
        self.bindings()
            .into_iter()
            .find(|name| !seen.insert(name.clone()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(value) => write!(f, "{value}"),
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Binding(name) => write!(f, "{name}"),
            Pattern::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Pattern::Variant { tag, fields } => {
                write!(f, "{tag}")?;
                if fields.is_empty() {
                    return Ok(());
                }
                write!(f, "(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if let Some(name) = &field.name {
                        write!(f, "{name}: ")?;
                    }
                    write!(f, "{}", field.pattern)?;
                }
                write!(f, ")")
            }
        }
    }
}
