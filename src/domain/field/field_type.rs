// src/domain/field/field_type.rs
use std::collections::BTreeSet;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::content::{ContentData, ContentTypeId};
use crate::domain::content_type::{FieldSettings, FieldableField};
use crate::domain::errors::DomainResult;
use crate::domain::validation::{ValidationContext, ViolationSink};

/// Behaviour attached to a field type. Every hook defaults to a no-op so plain
/// data fields only need a name.
#[async_trait]
pub trait FieldType: Send + Sync {
    fn type_name(&self) -> &'static str;

    /// Settings keys this type recognises.
    fn allowed_settings(&self) -> &'static [&'static str] {
        &[]
    }

    /// Type-specific settings rules. Runs only once generic checks passed.
    fn validate_settings(
        &self,
        _settings: &FieldSettings,
        _field_identifiers: &BTreeSet<String>,
        _sink: &mut dyn ViolationSink,
    ) {
    }

    /// Key of the record data this field stores its value under.
    fn storage_key<'a>(&self, field: &'a FieldableField) -> &'a str {
        &field.identifier
    }

    async fn validate_data(
        &self,
        _field: &FieldableField,
        _content_type_id: ContentTypeId,
        _value: Option<&Value>,
        _ctx: &mut ValidationContext<'_>,
    ) -> DomainResult<()> {
        Ok(())
    }

    fn on_create(&self, _field: &FieldableField, _data: &mut ContentData) {}

    fn on_update(&self, _field: &FieldableField, _old_data: &ContentData, _data: &mut ContentData) {}

    /// Value exposed to API consumers for this field.
    fn resolve_data(&self, value: Option<&Value>) -> Option<Value> {
        value.cloned()
    }

    /// Name of the input schema this field type accepts, if it has its own.
    fn input_schema(&self) -> Option<&'static str> {
        None
    }
}

/// PHP-style emptiness: missing, null, `""`, `"0"`, `false`, `0` and empty containers.
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::String(text)) => text.is_empty() || text == "0",
        Some(Value::Number(number)) => number.as_f64() == Some(0.0),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
    }
}
