//! Core data model for the casefn partial-function engine.
//!
//! This crate provides:
//! - Runtime values the matcher operates on (`Value`, `Field`, `Heap`)
//! - Match patterns (`Pattern`, `FieldPattern`)
//! - Domain descriptors used by the exhaustiveness checker (`Domain`)
//! - Rules, rule sets and the host callables they carry (`Rule`, `RuleSet`,
//!   `Guard`, `Action`)
//! - The per-match binding environment (`Bindings`)
//!
//! Everything here is plain data. Matching lives in `casefn_eval`, validation
//! and exhaustiveness in `casefn_canon`.
//!
//! # Thread Safety
//!
//! Values share their payloads through `Arc`, and guard/action callables are
//! `Send + Sync`, so a compiled rule set can be invoked from several threads
//! at once.

mod bindings;
mod domain;
mod name;
mod pattern;
mod rule;
mod span;
mod stack;
mod value;

pub use bindings::Bindings;
pub use domain::{Domain, FieldDef, VariantDef, VariantSet};
pub use name::Name;
pub use pattern::{FieldPattern, Pattern};
pub use rule::{Action, Form, Guard, HostError, Rule, RuleSet, Template};
pub use span::{Span, SpanError};
pub use stack::ensure_sufficient_stack;
pub use value::{Field, Heap, LiteralKey, ScalarKind, Value};
