//! Rules, rule sets and the host callables they carry.
//!
//! A `Rule` pairs one or more pattern alternatives with an optional guard and
//! an action. A `RuleSet` is the ordered list the compiler turns into a total
//! function. Guards and actions are opaque host callables over the binding
//! environment; the engine never interprets their bodies.
//!
//! Actions are expression-valued: whatever the callable returns is the result
//! of the rule. There is no early-return form.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::{Bindings, Domain, Name, Pattern, Span, Value};

/// Error raised by a host-supplied guard or action.
///
/// The engine neither catches nor retries these; they propagate unchanged out
/// of an invocation.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct HostError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        HostError {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error, keeping it reachable via `source()`.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        HostError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

type GuardFn = dyn Fn(&Bindings) -> Result<bool, HostError> + Send + Sync;
type ActionFn = dyn Fn(&Bindings) -> Result<Value, HostError> + Send + Sync;

/// Predicate evaluated after a pattern matched, with that match's captures.
#[derive(Clone)]
pub struct Guard(Arc<GuardFn>);

impl Guard {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Bindings) -> bool + Send + Sync + 'static,
    {
        Guard(Arc::new(move |env| Ok(f(env))))
    }

    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&Bindings) -> Result<bool, HostError> + Send + Sync + 'static,
    {
        Guard(Arc::new(f))
    }

    #[inline]
    pub fn check(&self, env: &Bindings) -> Result<bool, HostError> {
        (self.0)(env)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

/// Result-producing body of a rule.
#[derive(Clone)]
pub struct Action(Arc<ActionFn>);

impl Action {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Bindings) -> Value + Send + Sync + 'static,
    {
        Action(Arc::new(move |env| Ok(f(env))))
    }

    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&Bindings) -> Result<Value, HostError> + Send + Sync + 'static,
    {
        Action(Arc::new(f))
    }

    /// An action that always yields `value`.
    pub fn constant(value: Value) -> Self {
        Action(Arc::new(move |_| Ok(value.clone())))
    }

    /// An action that yields the value captured under `name`.
    pub fn capture(name: impl Into<Name>) -> Self {
        let name = name.into();
        Action(Arc::new(move |env| env.value(name.as_str()).cloned()))
    }

    /// An action that builds its result from a template.
    pub fn template(template: Template) -> Self {
        Action(Arc::new(move |env| template.render(env)))
    }

    #[inline]
    pub fn run(&self, env: &Bindings) -> Result<Value, HostError> {
        (self.0)(env)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// A declarative action body: data assembled from captures and literals.
///
/// Produced by the parser for `case` bodies. Templates build values; they do
/// not compute. Anything that computes is a host action (`@name`).
#[derive(Clone, Debug)]
pub enum Template {
    Literal(Value),
    Capture(Name),
    Tuple(Vec<Template>),
    Variant {
        tag: Name,
        fields: Vec<(Option<Name>, Template)>,
    },
    /// A registered host action, called with the rule's captures.
    Host { name: Name, action: Action },
}

impl Template {
    pub fn render(&self, env: &Bindings) -> Result<Value, HostError> {
        crate::ensure_sufficient_stack(|| match self {
            Template::Literal(value) => Ok(value.clone()),
            Template::Capture(name) => env.value(name.as_str()).cloned(),
            Template::Tuple(items) => {
                let values = items
                    .iter()
                    .map(|item| item.render(env))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::tuple(values))
            }
            Template::Variant { tag, fields } => {
                let fields = fields
                    .iter()
                    .map(|(name, item)| {
                        Ok(crate::Field {
                            name: name.clone(),
                            value: item.render(env)?,
                        })
                    })
                    .collect::<Result<Vec<_>, HostError>>()?;
                Ok(Value::variant_fields(tag.clone(), fields))
            }
            Template::Host { action, .. } => action.run(env),
        })
    }

    /// Capture names the template reads, in order.
    pub fn captures(&self) -> Vec<&Name> {
        let mut out = Vec::new();
        self.collect_captures(&mut out);
        out
    }

    fn collect_captures<'a>(&'a self, out: &mut Vec<&'a Name>) {
        match self {
            Template::Literal(_) | Template::Host { .. } => {}
            Template::Capture(name) => out.push(name),
            Template::Tuple(items) => {
                for item in items {
                    item.collect_captures(out);
                }
            }
            Template::Variant { fields, .. } => {
                for (_, item) in fields {
                    item.collect_captures(out);
                }
            }
        }
    }
}

/// One case rule: pattern alternatives, optional guard, action.
#[derive(Clone, Debug)]
pub struct Rule {
    /// Comma-separated alternatives; tried left to right.
    pub alternatives: Vec<Pattern>,
    pub guard: Option<Guard>,
    pub action: Action,
    /// The `default:` rule. Its single alternative is a wildcard.
    pub is_default: bool,
    pub span: Span,
}

impl Rule {
    /// `case <pattern>: <action>`
    pub fn case(pattern: Pattern, action: Action) -> Self {
        Rule::alternatives(vec![pattern], action)
    }

    /// `case <p1>, <p2>, ...: <action>`
    pub fn alternatives(alternatives: Vec<Pattern>, action: Action) -> Self {
        Rule {
            alternatives,
            guard: None,
            action,
            is_default: false,
            span: Span::DUMMY,
        }
    }

    /// `default: <action>`
    pub fn default_case(action: Action) -> Self {
        Rule {
            alternatives: vec![Pattern::Wildcard],
            guard: None,
            action,
            is_default: true,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }
}

/// Which concrete grammar a rule set came from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Form {
    /// `case <patterns> where <guard>: <action>`
    #[default]
    Full,
    /// `cases <literal>: <value>, ...` with no guards.
    Concise,
}

/// An ordered list of rules plus what the compiler needs to know about
/// their input.
#[derive(Clone, Debug)]
pub struct RuleSet {
    pub form: Form,
    /// Shape of the input. For `arity > 1` this describes the argument tuple.
    pub domain: Option<Domain>,
    /// Number of callback arguments (1 for map/filter, 2 for reduce).
    pub arity: usize,
    pub rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            form: Form::Full,
            domain: None,
            arity: 1,
            rules: Vec::new(),
        }
    }
}

impl RuleSet {
    pub fn new() -> Self {
        RuleSet::default()
    }

    pub fn concise() -> Self {
        RuleSet {
            form: Form::Concise,
            ..RuleSet::default()
        }
    }

    #[must_use]
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    #[must_use]
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn has_default(&self) -> bool {
        self.rules.iter().any(|r| r.is_default)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
