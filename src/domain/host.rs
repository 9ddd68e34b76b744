use serde_yaml::{Mapping, Value};

use super::AppError;

/// A validated inventory host name.
///
/// Guarantees:
/// - Non-empty
/// - No whitespace
/// - No `:` (reserved for `host:port` patterns in Ansible host limits)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostName(String);

impl HostName {
    /// Validate and create a new host name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == ':') {
            return Err(AppError::InvalidHostName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HostName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered connection parameters for one host (`ansible_host`, `ansible_user`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostVars(Mapping);

impl HostVars {
    pub fn new() -> Self {
        Self(Mapping::new())
    }

    /// Insert or replace a variable, keeping the original position of existing keys.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(Value::String(key.into()), Value::String(value.into()));
    }

    /// Build from `key=value` arguments in the order given.
    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self, AppError> {
        let mut vars = Self::new();
        for raw in assignments {
            let (key, value) = parse_assignment(raw.as_ref())?;
            vars.insert(key, value);
        }
        Ok(vars)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.0)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HostVars {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut vars = Self::new();
        for (key, value) in iter {
            vars.insert(key, value);
        }
        vars
    }
}

/// Split a `key=value` argument. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), AppError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(AppError::InvalidAssignment(raw.to_string())),
    }
}
