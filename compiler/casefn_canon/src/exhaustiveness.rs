//! Exhaustiveness and reachability via pattern usefulness.
//!
//! Implements algorithm U from Maranget, "Warnings for Pattern Matching"
//! (2007). Source patterns are lowered into a small constructor form
//! (`Pat`) guided by the domain, and every question is phrased as "is this
//! row useful with respect to these earlier rows":
//!
//! - a rule is unreachable when none of its alternatives is useful against
//!   the unguarded alternatives before it;
//! - the rule set is exhaustive when a wildcard row is not useful against
//!   all unguarded alternatives. The values it would match become the
//!   reported witnesses.
//!
//! Booleans enumerate `true`/`false`, optionals `absent`/present, tuples
//! have exactly one constructor and variant sets enumerate their tags.
//! `int`, `float`, `text` and unknown domains are never complete.

use casefn_ir::{ensure_sufficient_stack, Domain, LiteralKey, Name, Pattern, Rule, Value};

/// Stop collecting witnesses after this many.
const MAX_WITNESSES: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Ctor {
    Bool(bool),
    Absent,
    /// A non-absent value of an optional domain; one sub-pattern.
    Present,
    Tuple(usize),
    Variant { tag: Name, arity: usize },
    /// A scalar literal in an unbounded domain.
    Literal(LiteralKey),
}

impl Ctor {
    fn arity(&self) -> usize {
        match self {
            Ctor::Bool(_) | Ctor::Absent | Ctor::Literal(_) => 0,
            Ctor::Present => 1,
            Ctor::Tuple(n) => *n,
            Ctor::Variant { arity, .. } => *arity,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Pat {
    Wild,
    Ctor(Ctor, Vec<Pat>),
}

impl Pat {
    fn wildcards(ctor: Ctor) -> Pat {
        let arity = ctor.arity();
        Pat::Ctor(ctor, vec![Pat::Wild; arity])
    }
}

type Row = Vec<Pat>;

/// Outcome of [`check_exhaustive`].
#[derive(Clone, Debug, PartialEq)]
pub enum Exhaustiveness {
    Exhaustive,
    /// Example inputs no unguarded rule matches.
    NonExhaustive { missing: Vec<Pattern> },
}

impl Exhaustiveness {
    pub fn is_exhaustive(&self) -> bool {
        matches!(self, Exhaustiveness::Exhaustive)
    }
}

/// Decide whether `rules` cover every value of `domain`.
///
/// Guarded rules do not count toward coverage. A default rule always makes
/// the set exhaustive.
pub fn check_exhaustive(rules: &[Rule], domain: &Domain) -> Exhaustiveness {
    let missing = analyse(rules, domain).missing;
    if missing.is_empty() {
        Exhaustiveness::Exhaustive
    } else {
        Exhaustiveness::NonExhaustive { missing }
    }
}

pub(crate) struct Coverage {
    /// Witness patterns for uncovered inputs; empty when exhaustive.
    pub missing: Vec<Pattern>,
    /// Indices of rules that can never be selected.
    pub unreachable: Vec<usize>,
}

/// Walk the rules in order, growing the matrix with each unguarded rule.
pub(crate) fn analyse(rules: &[Rule], domain: &Domain) -> Coverage {
    let columns = [domain.clone()];
    let mut rows: Vec<Row> = Vec::new();
    let mut unreachable = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        let lowered: Vec<Pat> = rule
            .alternatives
            .iter()
            .map(|pattern| lower(pattern, domain))
            .collect();
        let reachable = lowered
            .iter()
            .any(|pat| is_useful(&rows, std::slice::from_ref(pat), &columns));
        if !reachable {
            tracing::debug!(index, span = %rule.span, "rule is unreachable");
            unreachable.push(index);
        }
        if !rule.is_guarded() {
            rows.extend(lowered.into_iter().map(|pat| vec![pat]));
        }
    }

    let mut missing: Vec<Pattern> = Vec::new();
    for witness in witnesses(&rows, &columns) {
        if let Some(pat) = witness.first() {
            let pattern = to_pattern(pat);
            if !missing.contains(&pattern) {
                missing.push(pattern);
            }
        }
    }

    tracing::debug!(
        rows = rows.len(),
        missing = missing.len(),
        unreachable = unreachable.len(),
        "coverage analysed"
    );
    Coverage {
        missing,
        unreachable,
    }
}

// Lowering

fn lower(pattern: &Pattern, domain: &Domain) -> Pat {
    ensure_sufficient_stack(|| match (pattern, domain) {
        (Pattern::Wildcard | Pattern::Binding(_), _) => Pat::Wild,
        (Pattern::Literal(Value::Absent), Domain::Optional(_)) => Pat::Ctor(Ctor::Absent, vec![]),
        (_, Domain::Optional(inner)) => Pat::Ctor(Ctor::Present, vec![lower(pattern, inner)]),
        (Pattern::Literal(value), _) => lower_value(value, domain),
        (Pattern::Tuple(items), _) => {
            let ctor = Ctor::Tuple(items.len());
            let fields = ctor_domains(&ctor, domain);
            let args = items.iter().zip(&fields).map(|(p, d)| lower(p, d)).collect();
            Pat::Ctor(ctor, args)
        }
        (Pattern::Variant { tag, fields }, _) => {
            let ctor = Ctor::Variant {
                tag: tag.clone(),
                arity: fields.len(),
            };
            let domains = ctor_domains(&ctor, domain);
            let args = fields
                .iter()
                .zip(&domains)
                .map(|(f, d)| lower(&f.pattern, d))
                .collect();
            Pat::Ctor(ctor, args)
        }
    })
}

/// A literal pattern; tuple and variant values are structural.
fn lower_value(value: &Value, domain: &Domain) -> Pat {
    ensure_sufficient_stack(|| match value {
        Value::Bool(b) if matches!(domain, Domain::Bool) => Pat::Ctor(Ctor::Bool(*b), vec![]),
        Value::Tuple(items) => {
            let ctor = Ctor::Tuple(items.len());
            let domains = ctor_domains(&ctor, domain);
            let args = items
                .iter()
                .zip(&domains)
                .map(|(v, d)| lower_value(v, d))
                .collect();
            Pat::Ctor(ctor, args)
        }
        Value::Variant { tag, fields } => {
            let ctor = Ctor::Variant {
                tag: tag.clone(),
                arity: fields.len(),
            };
            let domains = ctor_domains(&ctor, domain);
            let args = fields
                .iter()
                .zip(&domains)
                .map(|(f, d)| lower_value(&f.value, d))
                .collect();
            Pat::Ctor(ctor, args)
        }
        other => match other.literal_key() {
            Some(key) => Pat::Ctor(Ctor::Literal(key), vec![]),
            None => Pat::Wild,
        },
    })
}

/// Domains of a constructor's sub-patterns; always `ctor.arity()` long.
fn ctor_domains(ctor: &Ctor, domain: &Domain) -> Vec<Domain> {
    let unknown = |n: usize| vec![Domain::Unknown; n];
    match (ctor, domain) {
        (Ctor::Present, Domain::Optional(inner)) => vec![(**inner).clone()],
        (Ctor::Tuple(n), Domain::Tuple(items)) if items.len() == *n => items.clone(),
        (Ctor::Variant { tag, arity }, Domain::Variants(set)) => match set.get(tag.as_str()) {
            Some(def) if def.arity() == *arity => {
                def.fields.iter().map(|f| f.domain.clone()).collect()
            }
            _ => unknown(*arity),
        },
        (ctor, _) => unknown(ctor.arity()),
    }
}

// Matrix operations

fn specialize(rows: &[Row], ctor: &Ctor) -> Vec<Row> {
    rows.iter()
        .filter_map(|row| {
            let (head, rest) = row.split_first()?;
            let mut out = match head {
                Pat::Wild => vec![Pat::Wild; ctor.arity()],
                Pat::Ctor(c, args) if c == ctor => args.clone(),
                Pat::Ctor(..) => return None,
            };
            out.extend_from_slice(rest);
            Some(out)
        })
        .collect()
}

/// Rows whose head is a wildcard, with the head removed.
fn default_rows(rows: &[Row]) -> Vec<Row> {
    rows.iter()
        .filter_map(|row| match row.split_first() {
            Some((Pat::Wild, rest)) => Some(rest.to_vec()),
            _ => None,
        })
        .collect()
}

/// Distinct head constructors, in first-seen order.
fn head_ctors(rows: &[Row]) -> Vec<&Ctor> {
    let mut seen: Vec<&Ctor> = Vec::new();
    for row in rows {
        if let Some(Pat::Ctor(ctor, _)) = row.first() {
            if !seen.contains(&ctor) {
                seen.push(ctor);
            }
        }
    }
    seen
}

enum Signature {
    /// Every constructor of the domain appears in the column.
    Complete(Vec<Ctor>),
    /// A finite domain with these constructors absent from the column.
    Missing(Vec<Ctor>),
    /// The domain cannot be enumerated.
    Open,
}

fn signature(domain: &Domain, seen: &[&Ctor]) -> Signature {
    let all = match domain {
        // One constructor: specializing on it loses nothing.
        Domain::Tuple(items) => return Signature::Complete(vec![Ctor::Tuple(items.len())]),
        Domain::Bool => vec![Ctor::Bool(true), Ctor::Bool(false)],
        Domain::Optional(_) => vec![Ctor::Absent, Ctor::Present],
        Domain::Variants(set) => set
            .iter()
            .map(|def| Ctor::Variant {
                tag: def.tag.clone(),
                arity: def.arity(),
            })
            .collect(),
        Domain::Int | Domain::Float | Domain::Text | Domain::Unknown => {
            return Signature::Open;
        }
    };
    let missing: Vec<Ctor> = all
        .iter()
        .filter(|ctor| !seen.contains(ctor))
        .cloned()
        .collect();
    if missing.is_empty() {
        Signature::Complete(all)
    } else {
        Signature::Missing(missing)
    }
}

fn split_domain(domains: &[Domain]) -> (&Domain, &[Domain]) {
    static UNKNOWN: Domain = Domain::Unknown;
    domains.split_first().unwrap_or((&UNKNOWN, &[]))
}

fn prepend(head: Vec<Pat>, rest: &[Pat]) -> Row {
    let mut row = head;
    row.extend_from_slice(rest);
    row
}

fn prepend_domains(head: Vec<Domain>, rest: &[Domain]) -> Vec<Domain> {
    let mut domains = head;
    domains.extend_from_slice(rest);
    domains
}

// Usefulness

/// Whether some value matches `row` but no row of `rows`.
fn is_useful(rows: &[Row], row: &[Pat], domains: &[Domain]) -> bool {
    ensure_sufficient_stack(|| {
        let Some((head, rest)) = row.split_first() else {
            return rows.is_empty();
        };
        let (domain, rest_domains) = split_domain(domains);

        match head {
            Pat::Ctor(ctor, args) => is_useful(
                &specialize(rows, ctor),
                &prepend(args.clone(), rest),
                &prepend_domains(ctor_domains(ctor, domain), rest_domains),
            ),
            Pat::Wild => {
                let seen = head_ctors(rows);
                match signature(domain, &seen) {
                    Signature::Complete(all) => all.iter().any(|ctor| {
                        is_useful(
                            &specialize(rows, ctor),
                            &prepend(vec![Pat::Wild; ctor.arity()], rest),
                            &prepend_domains(ctor_domains(ctor, domain), rest_domains),
                        )
                    }),
                    Signature::Missing(_) | Signature::Open => {
                        is_useful(&default_rows(rows), rest, rest_domains)
                    }
                }
            }
        }
    })
}

/// Rows of patterns that no row of `rows` matches, one per uncovered case.
fn witnesses(rows: &[Row], domains: &[Domain]) -> Vec<Row> {
    ensure_sufficient_stack(|| {
        if domains.is_empty() {
            return if rows.is_empty() { vec![Vec::new()] } else { Vec::new() };
        }
        let (domain, rest_domains) = split_domain(domains);
        let seen = head_ctors(rows);
        let any_seen = !seen.is_empty();
        let mut out = Vec::new();

        match signature(domain, &seen) {
            Signature::Complete(all) => {
                for ctor in all {
                    let arity = ctor.arity();
                    let sub_domains = prepend_domains(ctor_domains(&ctor, domain), rest_domains);
                    for mut witness in witnesses(&specialize(rows, &ctor), &sub_domains) {
                        let tail = witness.split_off(arity.min(witness.len()));
                        out.push(prepend(vec![Pat::Ctor(ctor.clone(), witness)], &tail));
                        if out.len() >= MAX_WITNESSES {
                            return out;
                        }
                    }
                }
            }
            signature => {
                let tails = witnesses(&default_rows(rows), rest_domains);
                let heads = match signature {
                    Signature::Missing(missing) if any_seen => {
                        missing.into_iter().map(Pat::wildcards).collect()
                    }
                    _ => vec![Pat::Wild],
                };
                for tail in &tails {
                    for head in &heads {
                        out.push(prepend(vec![head.clone()], tail));
                        if out.len() >= MAX_WITNESSES {
                            return out;
                        }
                    }
                }
            }
        }
        out
    })
}

// Witness rendering

fn to_pattern(pat: &Pat) -> Pattern {
    ensure_sufficient_stack(|| match pat {
        Pat::Wild => Pattern::Wildcard,
        Pat::Ctor(ctor, args) => match ctor {
            Ctor::Bool(b) => Pattern::literal(*b),
            Ctor::Absent => Pattern::Literal(Value::Absent),
            Ctor::Present => args.first().map_or(Pattern::Wildcard, to_pattern),
            Ctor::Tuple(_) => Pattern::Tuple(args.iter().map(to_pattern).collect()),
            Ctor::Variant { tag, .. } => {
                Pattern::variant(tag.clone(), args.iter().map(to_pattern).collect())
            }
            Ctor::Literal(key) => Pattern::Literal(literal_value(key)),
        },
    })
}

fn literal_value(key: &LiteralKey) -> Value {
    match key {
        LiteralKey::Int(n) => Value::int(*n),
        LiteralKey::Float(bits) => Value::float(f64::from_bits(*bits)),
        LiteralKey::Bool(b) => Value::bool(*b),
        LiteralKey::Text(s) => Value::text(s),
        LiteralKey::Absent => Value::Absent,
    }
}
