//! Casefn Eval - pattern matching and compiled partial functions.
//!
//! A `RuleSet` becomes a `CompiledFunction` once `casefn_canon` has checked
//! it. Invoking the function visits rules strictly in declaration order:
//!
//! 1. match the rule's alternatives left to right;
//! 2. on a match, run the guard (if any) with the captures; a `false`
//!    discards the captures and moves on to the next rule;
//! 3. otherwise run the action and return its value.
//!
//! No further rules are visited after the first selected one. Multi-argument
//! calls are matched as one tuple of the arguments.
//!
//! # Example
//!
//! ```
//! use casefn_eval::compile;
//! use casefn_ir::{Action, Domain, Guard, Pattern, Rule, RuleSet, Value};
//!
//! let rules = RuleSet::new()
//!     .with_domain(Domain::Int)
//!     .rule(
//!         Rule::case(Pattern::binding("n"), Action::constant(Value::text("big")))
//!             .with_guard(Guard::new(|env| env.int("n").is_ok_and(|n| n > 10_000))),
//!     )
//!     .rule(Rule::case(Pattern::binding("n"), Action::constant(Value::text("small"))));
//!
//! let f = compile(&rules).unwrap();
//! assert_eq!(f.call(Value::int(15_000)).unwrap(), Value::text("big"));
//! assert_eq!(f.call(Value::int(500)).unwrap(), Value::text("small"));
//! ```

pub mod adapter;
mod error;
mod function;
mod matcher;

pub use error::InvokeError;
pub use function::{compile, compile_with, CompiledFunction};
pub use matcher::{attempt_match, match_alternatives};

pub use casefn_canon::{
    check, check_exhaustive, CheckReport, CompileError, CompileOptions, CompileWarning,
    Exhaustiveness, LintLevel,
};
