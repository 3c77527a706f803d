//! The `explain` command: long-form descriptions of error codes.

use casefn_diagnostic::ErrorCode;

/// Print the explanation for `code_str`. Returns `false` for unknown codes.
pub fn explain_error(code_str: &str) -> bool {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX (errors) or WXXXX (warnings) where X is a digit.");
        eprintln!("Examples: E1008, E3006, W3001");
        return false;
    };

    println!("{code}: {}", code.explanation());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_codes() {
        assert!(explain_error("E3006"));
        assert!(explain_error("w3001"));
        assert!(!explain_error("E9999"));
        assert!(!explain_error("nonsense"));
    }
}
