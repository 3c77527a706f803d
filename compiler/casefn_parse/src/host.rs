//! Registry of host guards and actions referenced by name from rule sources.

use casefn_ir::{Action, Bindings, Guard, HostError, Name, Value};
use rustc_hash::FxHashMap;

/// Named host callables available to a rule source.
///
/// `where heavy` resolves `heavy` among the guards; `@convert` resolves
/// `convert` among the actions. Names are looked up at parse time, so a
/// typo is reported before anything runs.
#[derive(Clone, Debug, Default)]
pub struct HostFunctions {
    guards: FxHashMap<Name, Guard>,
    actions: FxHashMap<Name, Action>,
}

impl HostFunctions {
    pub fn new() -> Self {
        HostFunctions::default()
    }

    pub fn register_guard(&mut self, name: impl Into<Name>, guard: Guard) {
        self.guards.insert(name.into(), guard);
    }

    pub fn register_action(&mut self, name: impl Into<Name>, action: Action) {
        self.actions.insert(name.into(), action);
    }

    /// Builder form of `register_guard` for infallible predicates.
    #[must_use]
    pub fn with_guard<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&Bindings) -> bool + Send + Sync + 'static,
    {
        self.register_guard(name, Guard::new(f));
        self
    }

    /// Builder form of `register_action` for fallible actions.
    #[must_use]
    pub fn with_action<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&Bindings) -> Result<Value, HostError> + Send + Sync + 'static,
    {
        self.register_action(name, Action::fallible(f));
        self
    }

    pub fn guard(&self, name: &str) -> Option<&Guard> {
        self.guards.get(name)
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    /// Registered guard names, sorted (for "did you mean" help).
    pub fn guard_names(&self) -> Vec<&str> {
        sorted_names(self.guards.keys())
    }

    pub fn action_names(&self) -> Vec<&str> {
        sorted_names(self.actions.keys())
    }
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a Name>) -> Vec<&'a str> {
    let mut names: Vec<&str> = names.map(Name::as_str).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests;
