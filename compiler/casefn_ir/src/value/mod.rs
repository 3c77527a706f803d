//! Runtime values matched by case rules.
//!
//! The value set is closed: scalars (`Int`, `Float`, `Bool`, `Text`), the
//! empty optional (`Absent`), fixed-arity tuples and tagged variants with
//! optionally named fields. A present optional is just its inner value.
//!
//! # Construction
//!
//! Compound payloads live behind [`Heap`], whose constructor is private to
//! this module. Use the factories:
//!
//! ```text
//! let n = Value::int(42);
//! let pair = Value::tuple(vec![Value::float(0.0), Value::int(1)]);
//! let pound = Value::variant("Pound", vec![Value::float(5.0)]);
//! ```
//!
//! Values are immutable once built; arity and field names never change.

mod heap;

use std::fmt;

use crate::Name;

pub use heap::Heap;

/// The kind of a scalar value.
///
/// Scalar kinds never coerce into one another: `1` and `1.0` are distinct
/// literals and never match each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int,
    Float,
    Bool,
    Text,
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Bool => "bool",
            ScalarKind::Text => "text",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field of a variant value.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: Option<Name>,
    pub value: Value,
}

impl Field {
    pub fn positional(value: Value) -> Self {
        Field { name: None, value }
    }

    pub fn named(name: impl Into<Name>, value: Value) -> Self {
        Field {
            name: Some(name.into()),
            value,
        }
    }
}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(Heap<str>),
    /// The empty optional.
    Absent,
    Tuple(Heap<Vec<Value>>),
    Variant {
        tag: Name,
        fields: Heap<Vec<Field>>,
    },
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    #[inline]
    pub fn text(s: &str) -> Self {
        Value::Text(Heap::from_text(s))
    }

    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// A variant with positional fields.
    pub fn variant(tag: impl Into<Name>, values: Vec<Value>) -> Self {
        Value::Variant {
            tag: tag.into(),
            fields: Heap::new(values.into_iter().map(Field::positional).collect()),
        }
    }

    /// A variant with no fields, e.g. `Empty`.
    pub fn unit_variant(tag: impl Into<Name>) -> Self {
        Value::variant(tag, Vec::new())
    }

    /// A variant with explicit (possibly named) fields.
    pub fn variant_fields(tag: impl Into<Name>, fields: Vec<Field>) -> Self {
        Value::Variant {
            tag: tag.into(),
            fields: Heap::new(fields),
        }
    }
}

// Value Methods

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_variant(&self) -> Option<(&Name, &[Field])> {
        match self {
            Value::Variant { tag, fields } => Some((tag, fields)),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// The scalar kind of this value, if it is a scalar.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Value::Int(_) => Some(ScalarKind::Int),
            Value::Float(_) => Some(ScalarKind::Float),
            Value::Bool(_) => Some(ScalarKind::Bool),
            Value::Text(_) => Some(ScalarKind::Text),
            Value::Absent | Value::Tuple(_) | Value::Variant { .. } => None,
        }
    }

    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::Absent => "absent",
            Value::Tuple(_) => "tuple",
            Value::Variant { .. } => "variant",
        }
    }

    /// Hashable identity for scalar and `absent` literals.
    ///
    /// Returns `None` for tuples and variants, which are not literals.
    pub fn literal_key(&self) -> Option<LiteralKey> {
        match self {
            Value::Int(n) => Some(LiteralKey::Int(*n)),
            Value::Float(f) => Some(LiteralKey::Float(f.to_bits())),
            Value::Bool(b) => Some(LiteralKey::Bool(*b)),
            Value::Text(s) => Some(LiteralKey::Text(s.to_string())),
            Value::Absent => Some(LiteralKey::Absent),
            Value::Tuple(_) | Value::Variant { .. } => None,
        }
    }
}

/// Bit-exact, hashable identity of a literal value.
///
/// Floats are keyed by their bit pattern, so `0.0` and `-0.0` are distinct
/// keys even though they compare equal; this only makes redundancy checks
/// more conservative.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKey {
    Int(i64),
    Float(u64),
    Bool(bool),
    Text(String),
    Absent,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Absent, Value::Absent) => true,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (
                Value::Variant {
                    tag: t1,
                    fields: f1,
                },
                Value::Variant {
                    tag: t2,
                    fields: f2,
                },
            ) => t1 == t2 && f1 == f2,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{:?}", &**s),
            Value::Absent => write!(f, "absent"),
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Value::Variant { tag, fields } => {
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
                    write!(f, "{}", field.value)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

#[cfg(test)]
mod tests;
