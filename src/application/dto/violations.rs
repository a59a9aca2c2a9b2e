use crate::domain::validation::{Violation, Violations};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViolationDto {
    /// `configuration_error` or `conflict_error`.
    pub kind: String,
    /// Message code, e.g. `slug_still_exists`.
    pub code: String,
    /// Field path the violation is attached to.
    pub path: String,
    /// Named interpolation parameters for the message code.
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl From<Violation> for ViolationDto {
    fn from(violation: Violation) -> Self {
        Self {
            kind: violation.kind.as_str().to_string(),
            code: violation.code,
            path: violation.path,
            parameters: violation.parameters,
        }
    }
}

pub fn violation_dtos(violations: Violations) -> Vec<ViolationDto> {
    violations.into_iter().map(Into::into).collect()
}
