#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::commands::testing::Recorder;
use casefn_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn inputs(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn run(source: &str, values: &[&str], options: &RunOptions) -> (Result<RunOutput, usize>, Recorder) {
    let mut recorder = Recorder::default();
    let result = run_source(source, &inputs(values), options, &mut recorder);
    (result, recorder)
}

#[test]
fn maps_each_input() {
    let (result, recorder) = run(
        r#"domain int { case n where even: "even" case n: "odd" }"#,
        &["1", "2"],
        &RunOptions::default(),
    );
    assert_eq!(
        result.unwrap().values,
        vec![Value::text("odd"), Value::text("even")]
    );
    assert_eq!(recorder.codes(), vec![]);
}

#[test]
fn folds_from_the_initial_value() {
    let options = RunOptions {
        fold: Some("0".to_string()),
        ..RunOptions::default()
    };
    let (result, _) = run("{ case (acc, x): @sum }", &["1", "2", "3"], &options);
    assert_eq!(result.unwrap().values, vec![Value::int(6)]);
}

#[test]
fn tuple_inputs_spread_over_arguments() {
    let options = RunOptions {
        arity: 2,
        ..RunOptions::default()
    };
    let (result, _) = run("{ case (a, b): @product }", &["(3, 4)"], &options);
    assert_eq!(result.unwrap().values, vec![Value::int(12)]);

    let (result, recorder) = run("{ case (a, b): @product }", &["3"], &options);
    assert_eq!(result, Err(1));
    assert_eq!(recorder.codes(), vec![ErrorCode::E6002]);
}

#[test]
fn warnings_do_not_stop_a_run() {
    let (result, recorder) = run("{ case n: n case 2: 0 }", &["5"], &RunOptions::default());
    assert_eq!(
        result.unwrap(),
        RunOutput {
            values: vec![Value::int(5)],
            warnings: 1
        }
    );
    assert_eq!(recorder.codes(), vec![ErrorCode::W3001]);
}

#[test]
fn compile_errors_prevent_the_run() {
    let (result, recorder) = run(r#"domain int { cases 1: "a" }"#, &["1"], &RunOptions::default());
    assert_eq!(result, Err(1));
    assert_eq!(recorder.codes(), vec![ErrorCode::E3006]);
}

#[test]
fn bad_inputs_are_reported_by_text() {
    let (result, recorder) = run("{ case n: n }", &["1", "Pound("], &RunOptions::default());
    assert_eq!(result, Err(1));
    assert_eq!(recorder.diagnostics.len(), 1);
    assert!(recorder.diagnostics[0]
        .message
        .starts_with("invalid input `Pound(`"));
}

#[test]
fn host_errors_surface_as_diagnostics() {
    let (result, recorder) = run("{ case s: @negate }", &["\"x\""], &RunOptions::default());
    assert_eq!(result, Err(1));
    assert_eq!(recorder.codes(), vec![ErrorCode::E6003]);
}
