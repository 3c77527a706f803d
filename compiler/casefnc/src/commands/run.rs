//! The `run` command: compile a rule file and invoke it on literal inputs.

use casefn_diagnostic::emitter::{ColorMode, DiagnosticEmitter};
use casefn_diagnostic::Diagnostic;
use casefn_eval::adapter::fold_values;
use casefn_eval::{compile_with, CompileWarning, CompiledFunction, InvokeError};
use casefn_ir::Value;
use casefn_parse::parse_value;

use super::{load_rules, read_file, stderr_emitter, CheckOptions};

#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub color: ColorMode,
    pub deny_warnings: bool,
    /// Arguments per invocation. With more than one, each input is a tuple
    /// of the arguments.
    pub arity: usize,
    /// Fold the inputs from this initial value instead of mapping them.
    pub fold: Option<String>,
}

impl RunOptions {
    fn check_options(&self) -> CheckOptions {
        CheckOptions {
            color: self.color,
            deny_warnings: self.deny_warnings,
            arity: if self.fold.is_some() { 2 } else { self.arity },
        }
    }
}

/// Results of a successful run, one per input (a single value for a fold).
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutput {
    pub values: Vec<Value>,
    pub warnings: usize,
}

/// Compile `source` and apply it to `inputs`.
///
/// Every problem is emitted; the error is the number of errors reported.
pub fn run_source(
    source: &str,
    inputs: &[String],
    options: &RunOptions,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<RunOutput, usize> {
    let check = options.check_options();
    let rules = load_rules(source, &check.parse_options(), emitter)?;
    let f = compile_with(&rules, &check.compile_options()).map_err(|err| {
        emitter.emit(&err.to_diagnostic());
        1_usize
    })?;
    let warnings: Vec<Diagnostic> = f
        .warnings()
        .iter()
        .map(CompileWarning::to_diagnostic)
        .collect();
    emitter.emit_all(&warnings);

    let values = parse_inputs(inputs, emitter)?;
    tracing::debug!(
        inputs = values.len(),
        fold = options.fold.is_some(),
        "running rule file"
    );
    let result = match &options.fold {
        Some(init) => {
            let init = parse_inputs(std::slice::from_ref(init), emitter)?
                .into_iter()
                .next()
                .ok_or(1_usize)?;
            fold_values(&f, init, &values).map(|total| vec![total])
        }
        None => values.into_iter().map(|v| invoke(&f, v)).collect(),
    };

    match result {
        Ok(values) => Ok(RunOutput {
            values,
            warnings: warnings.len(),
        }),
        Err(err) => {
            emitter.emit(&err.to_diagnostic());
            Err(1)
        }
    }
}

/// Spread a tuple input over the arguments of a multi-argument function.
fn invoke(f: &CompiledFunction, input: Value) -> Result<Value, InvokeError> {
    if f.arity() > 1 {
        if let Some(items) = input.as_tuple() {
            return f.invoke(items);
        }
    }
    f.call(input)
}

fn parse_inputs(
    inputs: &[String],
    emitter: &mut impl DiagnosticEmitter,
) -> Result<Vec<Value>, usize> {
    let mut values = Vec::with_capacity(inputs.len());
    let mut errors = 0;
    for text in inputs {
        match parse_value(text) {
            Ok(value) => values.push(value),
            Err(err) => {
                // Input spans point into the argument, not the rule file.
                emitter.emit(
                    &Diagnostic::error(err.code)
                        .with_message(format!("invalid input `{text}`: {}", err.message)),
                );
                errors += 1;
            }
        }
    }
    if errors > 0 {
        return Err(errors);
    }
    Ok(values)
}

/// Run a file, printing one result per line. Returns `false` on errors.
pub fn run_file(path: &str, inputs: &[String], options: &RunOptions) -> bool {
    let Some(content) = read_file(path) else {
        return false;
    };
    let mut emitter = stderr_emitter(path, &content, options.color);

    let outcome = run_source(&content, inputs, options, &mut emitter);
    match &outcome {
        Ok(output) => emitter.emit_summary(0, output.warnings),
        Err(errors) => emitter.emit_summary(*errors, 0),
    }
    emitter.flush();

    match outcome {
        Ok(output) => {
            for value in &output.values {
                println!("{value}");
            }
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests;
