//! Casefn CLI
//!
//! Checks and runs pattern-matching rule files.

use casefn_diagnostic::emitter::ColorMode;
use casefnc::commands::{check_file, explain_error, run_file, CheckOptions, RunOptions};
use casefnc::init_tracing;

fn main() {
    init_tracing();

    let mut color = ColorMode::Auto;
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(mode) = arg.strip_prefix("--color=") {
            match mode.parse() {
                Ok(mode) => color = mode,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            }
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        print_usage();
        return;
    };

    let ok = match command.as_str() {
        "check" => {
            let mut options = CheckOptions {
                color,
                ..CheckOptions::default()
            };
            let mut path = None;
            for arg in &args[1..] {
                if arg == "--deny-warnings" {
                    options.deny_warnings = true;
                } else if let Some(n) = arg.strip_prefix("--arity=") {
                    options.arity = parse_arity(n);
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    std::process::exit(1);
                }
            }
            let Some(path) = path else {
                eprintln!("Usage: casefn check <file> [--deny-warnings] [--arity=<n>]");
                std::process::exit(1);
            };
            check_file(path, &options)
        }
        "run" => {
            let mut options = RunOptions {
                color,
                ..RunOptions::default()
            };
            let mut path = None;
            let mut inputs = Vec::new();
            let mut i = 1;
            while i < args.len() {
                let arg = &args[i];
                if arg == "--fold" && i + 1 < args.len() {
                    options.fold = Some(args[i + 1].clone());
                    i += 2;
                    continue;
                }
                if arg == "--deny-warnings" {
                    options.deny_warnings = true;
                } else if let Some(n) = arg.strip_prefix("--arity=") {
                    options.arity = parse_arity(n);
                } else if path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    // Values may start with `-`, so anything else is an input.
                    inputs.push(arg.clone());
                }
                i += 1;
            }
            let Some(path) = path else {
                eprintln!("Usage: casefn run <file> <value>... [--fold <init>]");
                std::process::exit(1);
            };
            run_file(path, &inputs, &options)
        }
        "explain" | "--explain" => {
            let Some(code) = args.get(1) else {
                eprintln!("Usage: casefn explain <ERROR_CODE>");
                eprintln!("Example: casefn explain E3006");
                std::process::exit(1);
            };
            explain_error(code)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("casefn {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn parse_arity(text: &str) -> usize {
    match text.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("error: --arity expects a positive integer, found '{text}'");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("casefn - pattern-matching partial functions");
    println!();
    println!("Usage: casefn <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file>             Parse and validate a rule file");
    println!("  run <file> <value>...    Apply the rules to each value");
    println!("  explain <code>           Explain an error code (e.g., E3006)");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>           auto (default), always, never");
    println!("  --deny-warnings          Treat unreachable rules as errors");
    println!("  --arity=<n>              Arguments per call; inputs are n-tuples");
    println!("  --fold <init>            (run) Fold the values from <init>");
    println!();
    println!("Built-in guards: positive, negative, zero, even, odd");
    println!("Built-in actions: @sum, @product, @negate");
    println!();
    println!("Logging:");
    println!("  CASEFN_LOG=<filter>      Enable tracing, e.g. CASEFN_LOG=casefn_eval=trace");
    println!("  CASEFN_LOG_TREE=1        Nested tree output");
    println!();
    println!("Examples:");
    println!("  casefn check rules.cf --deny-warnings");
    println!("  casefn run total.cf --fold 0 1 2 3");
    println!("  casefn run pairs.cf --arity=2 '(3, 4)' '(5, 6)'");
    println!("  casefn run sizes.cf 15000 500");
    println!("  casefn explain W3001");
}
