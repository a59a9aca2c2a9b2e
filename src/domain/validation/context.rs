// src/domain/validation/context.rs
use crate::domain::content::{ContentData, ContentId};
use crate::domain::validation::violation::{Violation, Violations};

/// Sink that collects violations keyed by field path.
pub trait ViolationSink {
    fn add_violation(&mut self, violation: Violation);
    fn violation_count(&self) -> usize;
}

impl ViolationSink for Violations {
    fn add_violation(&mut self, violation: Violation) {
        self.push(violation);
    }

    fn violation_count(&self) -> usize {
        self.len()
    }
}

/// Request-scoped context for validating one record's data.
#[derive(Debug)]
pub struct ValidationContext<'a> {
    value: &'a ContentData,
    object_id: Option<ContentId>,
    locale: Option<&'a str>,
    violations: Violations,
}

impl<'a> ValidationContext<'a> {
    pub fn new(value: &'a ContentData, object_id: Option<ContentId>) -> Self {
        Self {
            value,
            object_id,
            locale: None,
            violations: Violations::new(),
        }
    }

    pub fn with_locale(mut self, locale: Option<&'a str>) -> Self {
        self.locale = locale;
        self
    }

    /// Full data mapping of the record under validation.
    pub fn value(&self) -> &'a ContentData {
        self.value
    }

    /// Identity of the record being edited; `None` before the first save.
    pub fn object_id(&self) -> Option<ContentId> {
        self.object_id
    }

    pub fn locale(&self) -> Option<&'a str> {
        self.locale
    }

    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    pub fn into_violations(self) -> Violations {
        self.violations
    }
}

impl ViolationSink for ValidationContext<'_> {
    fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn violation_count(&self) -> usize {
        self.violations.len()
    }
}
