// src/domain/field/registry.rs
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::domain::content::{ContentData, ContentTypeId};
use crate::domain::content_type::FieldableField;
use crate::domain::errors::DomainResult;
use crate::domain::field::field_type::FieldType;
use crate::domain::validation::{
    ADDITIONAL_DATA_NOT_ALLOWED, ValidationContext, Violation, ViolationSink, Violations,
};

/// Field types known to this process, built once at startup and injected.
#[derive(Default, Clone)]
pub struct FieldTypeRegistry {
    types: HashMap<&'static str, Arc<dyn FieldType>>,
}

impl FieldTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, field_type: Arc<dyn FieldType>) {
        self.types.insert(field_type.type_name(), field_type);
    }

    pub fn with(mut self, field_type: Arc<dyn FieldType>) -> Self {
        self.register(field_type);
        self
    }

    pub fn get(&self, type_name: &str) -> Option<&Arc<dyn FieldType>> {
        self.types.get(type_name)
    }

    /// Registered fields of `fields`, paired with their type.
    fn typed<'a>(
        &'a self,
        fields: &'a [FieldableField],
    ) -> impl Iterator<Item = (&'a FieldableField, &'a Arc<dyn FieldType>)> + 'a {
        fields
            .iter()
            .filter_map(|field| self.get(&field.field_type).map(|ty| (field, ty)))
    }

    /// Validates the settings of every field. Paths are rooted at
    /// `fields[<identifier>].settings`.
    pub fn validate_settings(
        &self,
        fields: &[FieldableField],
        field_identifiers: &BTreeSet<String>,
    ) -> Violations {
        let mut violations = Violations::new();
        for field in fields {
            let prefix = format!("fields[{}].settings", field.identifier);
            let Some(field_type) = self.get(&field.field_type) else {
                continue;
            };

            let mut field_violations = Violations::new();
            let allowed = field_type.allowed_settings();
            for key in field.settings.keys() {
                if !allowed.contains(&key.as_str()) {
                    field_violations
                        .add_violation(Violation::configuration(ADDITIONAL_DATA_NOT_ALLOWED, key));
                }
            }

            if field_violations.violation_count() == 0 {
                field_type.validate_settings(
                    &field.settings,
                    field_identifiers,
                    &mut field_violations,
                );
            }

            for violation in field_violations {
                violations.push(violation.prefixed(&prefix));
            }
        }
        violations
    }

    pub fn on_create(&self, fields: &[FieldableField], data: &mut ContentData) {
        for (field, field_type) in self.typed(fields) {
            field_type.on_create(field, data);
        }
    }

    pub fn on_update(&self, fields: &[FieldableField], old_data: &ContentData, data: &mut ContentData) {
        for (field, field_type) in self.typed(fields) {
            field_type.on_update(field, old_data, data);
        }
    }

    /// Runs every registered field's data validation against `ctx`.
    pub async fn validate_data(
        &self,
        fields: &[FieldableField],
        content_type_id: ContentTypeId,
        ctx: &mut ValidationContext<'_>,
    ) -> DomainResult<()> {
        let data = ctx.value();
        for (field, field_type) in self.typed(fields) {
            let value = data.get(field_type.storage_key(field));
            field_type
                .validate_data(field, content_type_id, value, ctx)
                .await?;
        }
        Ok(())
    }

    /// Data as exposed to API consumers, passed through each field's resolver.
    pub fn resolve(&self, fields: &[FieldableField], data: &ContentData) -> ContentData {
        let mut resolved = data.clone();
        for (field, field_type) in self.typed(fields) {
            let key = field_type.storage_key(field);
            match field_type.resolve_data(data.get(key)) {
                Some(value) => {
                    resolved.insert(key.to_string(), value);
                }
                None => {
                    resolved.remove(key);
                }
            }
        }
        resolved
    }

    /// Input schema names contributed by registered field types.
    pub fn input_schemas(&self) -> BTreeSet<&'static str> {
        self.types
            .values()
            .filter_map(|field_type| field_type.input_schema())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct Plain;

    #[async_trait]
    impl FieldType for Plain {
        fn type_name(&self) -> &'static str {
            "plain"
        }

        fn allowed_settings(&self) -> &'static [&'static str] {
            &["required"]
        }
    }

    #[test]
    fn rejects_unknown_settings_keys_before_type_rules() {
        let registry = FieldTypeRegistry::new().with(Arc::new(Plain));
        let fields = vec![
            FieldableField::new("title", "plain").with_setting("colour", "red"),
            FieldableField::new("body", "text").with_setting("anything", true),
        ];
        let identifiers: BTreeSet<String> = fields.iter().map(|f| f.identifier.clone()).collect();

        let violations = registry.validate_settings(&fields, &identifiers).into_vec();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, ADDITIONAL_DATA_NOT_ALLOWED);
        assert_eq!(violations[0].path, "fields[title].settings.colour");
    }

    #[test]
    fn resolve_keeps_unregistered_fields() {
        let registry = FieldTypeRegistry::new().with(Arc::new(Plain));
        let fields = vec![FieldableField::new("title", "plain")];
        let data = json!({ "title": "Hello", "extra": 1 }).as_object().cloned().unwrap();
        assert_eq!(registry.resolve(&fields, &data), data);
        assert!(registry.input_schemas().is_empty());
    }
}
