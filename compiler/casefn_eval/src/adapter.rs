//! Collection operations driven by a compiled function.
//!
//! These mirror what a host library does with a callback: `map` and
//! `filter` call it with one argument, `fold` with the accumulator and the
//! next element. Errors stop the traversal and are returned as-is.

use casefn_ir::Value;
use rayon::prelude::*;

use crate::{CompiledFunction, InvokeError};

/// Apply `f` to every value, in order.
pub fn map_values(f: &CompiledFunction, values: &[Value]) -> Result<Vec<Value>, InvokeError> {
    values.iter().map(|v| f.call(v.clone())).collect()
}

/// Keep the values for which `f` returns `true`.
pub fn filter_values(f: &CompiledFunction, values: &[Value]) -> Result<Vec<Value>, InvokeError> {
    let mut kept = Vec::new();
    for value in values {
        if f.test(value.clone())? {
            kept.push(value.clone());
        }
    }
    Ok(kept)
}

/// Left fold: `f(f(f(init, v0), v1), v2)`.
pub fn fold_values(
    f: &CompiledFunction,
    init: Value,
    values: &[Value],
) -> Result<Value, InvokeError> {
    values
        .iter()
        .try_fold(init, |acc, value| f.call2(acc, value.clone()))
}

/// The first value for which `f` returns `true`.
pub fn find_value(f: &CompiledFunction, values: &[Value]) -> Result<Option<Value>, InvokeError> {
    for value in values {
        if f.test(value.clone())? {
            return Ok(Some(value.clone()));
        }
    }
    Ok(None)
}

/// `map_values` on the rayon pool. Output order matches input order.
pub fn par_map_values(
    f: &CompiledFunction,
    values: &[Value],
) -> Result<Vec<Value>, InvokeError> {
    tracing::debug!(len = values.len(), "parallel map");
    values.par_iter().map(|v| f.call(v.clone())).collect()
}

#[cfg(test)]
mod tests;
