//! Binding environment produced by a successful match.
//!
//! Created per match attempt, handed to the rule's guard and action, then
//! dropped. Never shared across invocations.

use smallvec::SmallVec;

use crate::{HostError, Name, Value};

/// Captured `name -> value` pairs, in capture order.
///
/// Most rules capture one or two names, so the storage is inline up to four
/// entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    entries: SmallVec<[(Name, Value); 4]>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings::default()
    }

    pub(crate) fn from_entries(entries: SmallVec<[(Name, Value); 4]>) -> Self {
        Bindings { entries }
    }

    /// Record a capture. Names are unique per pattern, so no shadowing check.
    pub fn bind(&mut self, name: Name, value: Value) {
        self.entries.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.entries.iter().map(|(n, v)| (n, v))
    }

    /// The captured value, or a host error naming the missing capture.
    pub fn value(&self, name: &str) -> Result<&Value, HostError> {
        self.get(name)
            .ok_or_else(|| HostError::new(format!("no capture named `{name}`")))
    }

    pub fn int(&self, name: &str) -> Result<i64, HostError> {
        let value = self.value(name)?;
        value
            .as_int()
            .ok_or_else(|| mistyped(name, "int", value))
    }

    pub fn float(&self, name: &str) -> Result<f64, HostError> {
        let value = self.value(name)?;
        value
            .as_float()
            .ok_or_else(|| mistyped(name, "float", value))
    }

    pub fn bool(&self, name: &str) -> Result<bool, HostError> {
        let value = self.value(name)?;
        value
            .as_bool()
            .ok_or_else(|| mistyped(name, "bool", value))
    }

    pub fn text(&self, name: &str) -> Result<&str, HostError> {
        let value = self.value(name)?;
        value
            .as_text()
            .ok_or_else(|| mistyped(name, "text", value))
    }
}

#[cold]
fn mistyped(name: &str, expected: &str, found: &Value) -> HostError {
    HostError::new(format!(
        "capture `{name}` is {}, expected {expected}",
        found.type_name()
    ))
}

impl FromIterator<(Name, Value)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (Name, Value)>>(iter: I) -> Self {
        Bindings::from_entries(iter.into_iter().collect())
    }
}
