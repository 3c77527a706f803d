//! Domain descriptors.
//!
//! A domain describes the shape of the values a rule set accepts. It is used
//! only at compile time: to resolve variant tags, to check that patterns fit
//! the input shape, and to decide exhaustiveness.
//!
//! Domains are closed. `Int`, `Float`, `Text` and `Unknown` are unbounded:
//! enumerating literals can never cover them.

use std::fmt;
use std::sync::Arc;

use crate::{Name, ScalarKind, Value};

/// Declared field of a variant.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    pub name: Option<Name>,
    pub domain: Domain,
}

impl FieldDef {
    pub fn positional(domain: Domain) -> Self {
        FieldDef { name: None, domain }
    }

    pub fn named(name: impl Into<Name>, domain: Domain) -> Self {
        FieldDef {
            name: Some(name.into()),
            domain,
        }
    }
}

/// Declared variant: a tag and its ordered fields.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantDef {
    pub tag: Name,
    pub fields: Vec<FieldDef>,
}

impl VariantDef {
    pub fn new(tag: impl Into<Name>, fields: Vec<FieldDef>) -> Self {
        VariantDef {
            tag: tag.into(),
            fields,
        }
    }

    /// A variant whose fields are all positional.
    pub fn positional(tag: impl Into<Name>, fields: Vec<Domain>) -> Self {
        VariantDef::new(tag, fields.into_iter().map(FieldDef::positional).collect())
    }

    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

/// A closed, ordered set of variants.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantSet {
    variants: Vec<VariantDef>,
}

impl VariantSet {
    pub fn new(variants: Vec<VariantDef>) -> Self {
        VariantSet { variants }
    }

    pub fn get(&self, tag: &str) -> Option<&VariantDef> {
        self.variants.iter().find(|v| v.tag.as_str() == tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariantDef> {
        self.variants.iter()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Declared tags, in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &Name> {
        self.variants.iter().map(|v| &v.tag)
    }
}

/// The shape of an input (or a sub-component of one).
#[derive(Clone, Debug, PartialEq)]
pub enum Domain {
    Int,
    Float,
    Bool,
    Text,
    /// Either `absent` or a value of the inner domain.
    Optional(Box<Domain>),
    Tuple(Vec<Domain>),
    Variants(Arc<VariantSet>),
    /// No shape information; treated as unbounded.
    Unknown,
}

impl Domain {
    pub fn optional(inner: Domain) -> Self {
        Domain::Optional(Box::new(inner))
    }

    pub fn variants(variants: Vec<VariantDef>) -> Self {
        Domain::Variants(Arc::new(VariantSet::new(variants)))
    }

    pub fn scalar(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Int => Domain::Int,
            ScalarKind::Float => Domain::Float,
            ScalarKind::Bool => Domain::Bool,
            ScalarKind::Text => Domain::Text,
        }
    }

    /// Whether literal/tag enumeration can, in principle, cover this domain.
    pub fn is_bounded(&self) -> bool {
        match self {
            Domain::Int | Domain::Float | Domain::Text | Domain::Unknown => false,
            Domain::Bool => true,
            Domain::Optional(inner) => inner.is_bounded(),
            Domain::Tuple(items) => items.iter().all(Domain::is_bounded),
            Domain::Variants(set) => set
                .iter()
                .all(|v| v.fields.iter().all(|f| f.domain.is_bounded())),
        }
    }

    /// The variant set, looking through `Optional`.
    pub fn variant_set(&self) -> Option<&VariantSet> {
        match self {
            Domain::Variants(set) => Some(set),
            Domain::Optional(inner) => inner.variant_set(),
            _ => None,
        }
    }

    /// Whether `value` has this domain's shape.
    ///
    /// Used by hosts and the CLI to reject ill-shaped inputs early; the
    /// matcher itself never needs it.
    pub fn admits(&self, value: &Value) -> bool {
        crate::ensure_sufficient_stack(|| match (self, value) {
            (Domain::Unknown, _)
            | (Domain::Int, Value::Int(_))
            | (Domain::Float, Value::Float(_))
            | (Domain::Bool, Value::Bool(_))
            | (Domain::Text, Value::Text(_))
            | (Domain::Optional(_), Value::Absent) => true,
            (Domain::Optional(inner), v) => inner.admits(v),
            (Domain::Tuple(items), Value::Tuple(values)) => {
                items.len() == values.len()
                    && items.iter().zip(values.iter()).all(|(d, v)| d.admits(v))
            }
            (Domain::Variants(set), Value::Variant { tag, fields }) => {
                set.get(tag.as_str()).is_some_and(|def| {
                    def.fields.len() == fields.len()
                        && def.fields.iter().zip(fields.iter()).all(|(d, f)| {
                            let names_agree = match (&d.name, &f.name) {
                                (Some(a), Some(b)) => a == b,
                                _ => true,
                            };
                            names_agree && d.domain.admits(&f.value)
                        })
                })
            }
            _ => false,
        })
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Int => write!(f, "int"),
            Domain::Float => write!(f, "float"),
            Domain::Bool => write!(f, "bool"),
            Domain::Text => write!(f, "text"),
            Domain::Unknown => write!(f, "_"),
            Domain::Optional(inner) => write!(f, "{inner}?"),
            Domain::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Domain::Variants(set) => {
                write!(f, "enum {{ ")?;
                for (i, variant) in set.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", variant.tag)?;
                    if variant.fields.is_empty() {
                        continue;
                    }
                    write!(f, "(")?;
                    for (j, field) in variant.fields.iter().enumerate() {
                        if j > 0 {
                            write!(f, ", ")?;
                        }
                        if let Some(name) = &field.name {
                            write!(f, "{name}: ")?;
                        }
                        write!(f, "{}", field.domain)?;
                    }
                    write!(f, ")")?;
                }
                write!(f, " }}")
            }
        }
    }
}
