//! Compiled rule sets.

use std::sync::Arc;

use casefn_canon::{CompileError, CompileOptions, CompileWarning};
use casefn_ir::{Rule, RuleSet, Value};

use crate::{match_alternatives, InvokeError};

/// A checked rule set, ready to invoke.
///
/// Cheap to clone; clones share the rules. Invocation only reads them, so a
/// `CompiledFunction` can be called from many threads at once.
#[derive(Clone, Debug)]
pub struct CompiledFunction {
    inner: Arc<Compiled>,
}

#[derive(Debug)]
struct Compiled {
    rules: RuleSet,
    warnings: Vec<CompileWarning>,
}

/// Compile with the default options.
pub fn compile(rules: &RuleSet) -> Result<CompiledFunction, CompileError> {
    compile_with(rules, &CompileOptions::default())
}

/// Check `rules` and build a callable function.
///
/// Fails with the first error found; no function is produced.
pub fn compile_with(
    rules: &RuleSet,
    options: &CompileOptions,
) -> Result<CompiledFunction, CompileError> {
    let warnings = casefn_canon::check(rules, options)
        .into_result()
        .inspect_err(|err| tracing::debug!(code = %err.code(), "compile failed: {err}"))?;

    tracing::debug!(
        rules = rules.len(),
        arity = rules.arity,
        warnings = warnings.len(),
        "compiled rule set"
    );
    Ok(CompiledFunction {
        inner: Arc::new(Compiled {
            rules: rules.clone(),
            warnings,
        }),
    })
}

impl CompiledFunction {
    /// Number of arguments `invoke` expects.
    pub fn arity(&self) -> usize {
        self.inner.rules.arity
    }

    pub fn warnings(&self) -> &[CompileWarning] {
        &self.inner.warnings
    }

    pub fn rules(&self) -> &[Rule] {
        &self.inner.rules.rules
    }

    /// Call with `arity()` arguments. Several arguments are matched as one
    /// tuple, so `(acc, x)` patterns see them in order.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, InvokeError> {
        let expected = self.arity();
        if args.len() != expected {
            return Err(InvokeError::ArgumentCount {
                expected,
                found: args.len(),
            });
        }
        match args {
            [single] => self.apply(single),
            _ => self.apply(&Value::tuple(args.to_vec())),
        }
    }

    /// Single-argument call, as used by `map` and `filter`.
    pub fn call(&self, arg: Value) -> Result<Value, InvokeError> {
        self.invoke(std::slice::from_ref(&arg))
    }

    /// Two-argument call, as used by `reduce`.
    pub fn call2(&self, first: Value, second: Value) -> Result<Value, InvokeError> {
        self.invoke(&[first, second])
    }

    /// Single-argument call whose result must be a bool.
    pub fn test(&self, arg: Value) -> Result<bool, InvokeError> {
        let result = self.call(arg)?;
        result
            .as_bool()
            .ok_or(InvokeError::NotABoolean { found: result })
    }

    /// First-match evaluation over the packed input.
    fn apply(&self, input: &Value) -> Result<Value, InvokeError> {
        for (index, rule) in self.rules().iter().enumerate() {
            let Some(env) = match_alternatives(&rule.alternatives, input) else {
                continue;
            };
            if let Some(guard) = &rule.guard {
                if !guard.check(&env)? {
                    tracing::trace!(index, "guard rejected");
                    continue;
                }
            }
            tracing::trace!(index, captures = env.len(), "rule selected");
            return Ok(rule.action.run(&env)?);
        }

        tracing::error!(%input, "no rule matched a compiled rule set");
        Err(InvokeError::NonExhaustive {
            input: input.clone(),
        })
    }
}

#[cfg(test)]
mod tests;
