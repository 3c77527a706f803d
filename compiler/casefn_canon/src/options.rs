//! Compile options.

use std::fmt;
use std::str::FromStr;

/// How a lint is reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LintLevel {
    /// Not reported.
    Allow,
    /// Reported as a warning; compilation succeeds.
    #[default]
    Warn,
    /// Reported as an error; compilation fails.
    Deny,
}

impl LintLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LintLevel::Allow => "allow",
            LintLevel::Warn => "warn",
            LintLevel::Deny => "deny",
        }
    }
}

impl fmt::Display for LintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LintLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "allow" => Ok(LintLevel::Allow),
            "warn" => Ok(LintLevel::Warn),
            "deny" => Ok(LintLevel::Deny),
            other => Err(format!(
                "invalid lint level '{other}', expected allow, warn or deny"
            )),
        }
    }
}

/// Options for `check` and `compile_with`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Level for rules that can never be reached.
    pub unreachable: LintLevel,
}

impl CompileOptions {
    /// Every warning becomes an error.
    pub fn deny_warnings() -> Self {
        CompileOptions {
            unreachable: LintLevel::Deny,
        }
    }

    #[must_use]
    pub fn with_unreachable(mut self, level: LintLevel) -> Self {
        self.unreachable = level;
        self
    }
}
