// src/domain/validation/violation.rs
use std::collections::BTreeMap;
use std::fmt;

pub const SLUG_SOURCE_NOT_EXISTS: &str = "slug_source_not_exists";
pub const SLUG_STILL_EXISTS: &str = "slug_still_exists";
pub const ADDITIONAL_DATA_NOT_ALLOWED: &str = "additional_data_not_allowed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Field settings are misconfigured; raised when a content type is saved.
    ConfigurationError,
    /// Record data collides with stored data; raised when a record is saved.
    ConflictError,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConfigurationError => "configuration_error",
            Self::ConflictError => "conflict_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub code: String,
    pub path: String,
    pub parameters: BTreeMap<String, String>,
}

impl Violation {
    pub fn new(kind: ViolationKind, code: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            path: path.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn configuration(code: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(ViolationKind::ConfigurationError, code, path)
    }

    pub fn conflict(code: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(ViolationKind::ConflictError, code, path)
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Re-roots the violation below `prefix`, e.g. `source` -> `fields[url].settings.source`.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.path = if self.path.is_empty() {
            prefix.to_string()
        } else {
            format!("{prefix}.{}", self.path)
        };
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at `{}`", self.code, self.path)?;
        if !self.parameters.is_empty() {
            let params: Vec<String> = self
                .parameters
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            write!(f, " ({})", params.join(", "))?;
        }
        Ok(())
    }
}

/// Ordered collection of violations returned from a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(value: Vec<Violation>) -> Self {
        Self(value)
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&rendered.join("; "))
    }
}
