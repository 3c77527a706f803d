//! Guards and actions available to rule files run from the command line.
//!
//! Rule files can only name host callables, and the CLI has no host program
//! behind it, so it ships a small fixed set. Each one looks at the numeric
//! captures of the match in capture order:
//!
//! | name        | kind   | meaning                                   |
//! |-------------|--------|-------------------------------------------|
//! | `positive`  | guard  | every numeric capture is `> 0`            |
//! | `negative`  | guard  | every numeric capture is `< 0`            |
//! | `zero`      | guard  | every numeric capture is `0`              |
//! | `even`      | guard  | every integer capture is even             |
//! | `odd`       | guard  | every integer capture is odd              |
//! | `sum`       | action | sum of the numeric captures               |
//! | `product`   | action | product of the numeric captures           |
//! | `negate`    | action | the single numeric capture, negated       |
//!
//! Guards are false when the match captured no numbers. Integer arithmetic
//! stays integral until a float capture shows up.

use casefn_ir::{Bindings, HostError, Value};
use casefn_parse::HostFunctions;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Number::Int(n) => Value::int(n),
            Number::Float(f) => Value::float(f),
        }
    }
}

fn numbers(env: &Bindings) -> Vec<Number> {
    env.iter()
        .filter_map(|(_, value)| match value {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        })
        .collect()
}

fn all_numbers(env: &Bindings, test: impl Fn(Number) -> bool) -> bool {
    let numbers = numbers(env);
    !numbers.is_empty() && numbers.into_iter().all(test)
}

fn all_ints(env: &Bindings, test: impl Fn(i64) -> bool) -> bool {
    let ints: Vec<i64> = env.iter().filter_map(|(_, v)| v.as_int()).collect();
    !ints.is_empty() && ints.into_iter().all(test)
}

/// Fold the numeric captures with `int_op` while every operand is an
/// integer, switching to `float_op` from the first float on.
fn combine(
    env: &Bindings,
    name: &str,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, HostError> {
    let mut numbers = numbers(env).into_iter();
    let Some(first) = numbers.next() else {
        return Err(HostError::new(format!("`@{name}` needs a numeric capture")));
    };
    numbers
        .try_fold(first, |acc, next| match (acc, next) {
            (Number::Int(a), Number::Int(b)) => int_op(a, b)
                .map(Number::Int)
                .ok_or_else(|| HostError::new(format!("integer overflow in `@{name}`"))),
            (a, b) => Ok(Number::Float(float_op(a.as_f64(), b.as_f64()))),
        })
        .map(Number::into_value)
}

fn negate(env: &Bindings) -> Result<Value, HostError> {
    match numbers(env).as_slice() {
        [Number::Int(n)] => n
            .checked_neg()
            .map(Value::int)
            .ok_or_else(|| HostError::new("integer overflow in `@negate`")),
        [Number::Float(f)] => Ok(Value::float(-f)),
        other => Err(HostError::new(format!(
            "`@negate` needs exactly one numeric capture, found {}",
            other.len()
        ))),
    }
}

/// The registry handed to the parser by `check` and `run`.
pub fn host_functions() -> HostFunctions {
    HostFunctions::new()
        .with_guard("positive", |env| all_numbers(env, |n| n.as_f64() > 0.0))
        .with_guard("negative", |env| all_numbers(env, |n| n.as_f64() < 0.0))
        .with_guard("zero", |env| all_numbers(env, |n| n.as_f64() == 0.0))
        .with_guard("even", |env| all_ints(env, |n| n % 2 == 0))
        .with_guard("odd", |env| all_ints(env, |n| n % 2 != 0))
        .with_action("sum", |env| combine(env, "sum", i64::checked_add, |a, b| a + b))
        .with_action("product", |env| {
            combine(env, "product", i64::checked_mul, |a, b| a * b)
        })
        .with_action("negate", negate)
}
