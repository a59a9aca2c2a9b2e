// src/domain/field/slug_field.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::content::{ContentData, ContentTypeId, SLUG_DATA_KEY};
use crate::domain::content_type::{FieldSettings, FieldableField};
use crate::domain::errors::DomainResult;
use crate::domain::field::field_type::{FieldType, is_empty_value};
use crate::domain::field::settings::{SOURCE_SETTING, SlugFieldSettings};
use crate::domain::slug::{SlugCheck, SlugGenerator, SlugUniquenessService, source_text};
use crate::domain::validation::{
    SLUG_SOURCE_NOT_EXISTS, ValidationContext, Violation, ViolationSink, Violations,
};

pub const SLUG_FIELD_TYPE: &str = "slug";
pub const SLUG_FIELD_INPUT: &str = "SlugFieldInput";
const SLUG_SETTINGS: &[&str] = &[SOURCE_SETTING];

/// Field type that derives `data["slug"]` from another field and keeps it
/// unique within the content type.
pub struct SlugFieldType {
    generator: Arc<dyn SlugGenerator>,
    uniqueness: Arc<SlugUniquenessService>,
}

impl SlugFieldType {
    pub fn new(generator: Arc<dyn SlugGenerator>, uniqueness: Arc<SlugUniquenessService>) -> Self {
        Self {
            generator,
            uniqueness,
        }
    }

    /// `source` must be a string naming a field of the owning content type.
    pub fn validate_source_settings(
        settings: &FieldSettings,
        field_identifiers: &BTreeSet<String>,
    ) -> Violations {
        let mut violations = Violations::new();
        let Some(typed) = SlugFieldSettings::from_settings(settings) else {
            violations.push(Violation::configuration(SLUG_SOURCE_NOT_EXISTS, SOURCE_SETTING));
            return violations;
        };

        if !field_identifiers.contains(&typed.source) {
            violations.push(Violation::configuration(SLUG_SOURCE_NOT_EXISTS, SOURCE_SETTING));
        }
        violations
    }

    /// Recomputes the slug from the current source value.
    fn write_slug(&self, field: &FieldableField, data: &mut ContentData) {
        let source_value = SlugFieldSettings::from_settings(&field.settings)
            .and_then(|settings| data.get(&settings.source));
        let slug = self.generator.slugify(&source_text(source_value));
        tracing::debug!(field = %field.identifier, %slug, "computed slug");
        data.insert(SLUG_DATA_KEY.to_string(), Value::String(slug));
    }
}

#[async_trait]
impl FieldType for SlugFieldType {
    fn type_name(&self) -> &'static str {
        SLUG_FIELD_TYPE
    }

    fn allowed_settings(&self) -> &'static [&'static str] {
        SLUG_SETTINGS
    }

    fn validate_settings(
        &self,
        settings: &FieldSettings,
        field_identifiers: &BTreeSet<String>,
        sink: &mut dyn ViolationSink,
    ) {
        for violation in Self::validate_source_settings(settings, field_identifiers) {
            sink.add_violation(violation);
        }
    }

    fn storage_key<'a>(&self, _field: &'a FieldableField) -> &'a str {
        SLUG_DATA_KEY
    }

    async fn validate_data(
        &self,
        field: &FieldableField,
        content_type_id: ContentTypeId,
        value: Option<&Value>,
        ctx: &mut ValidationContext<'_>,
    ) -> DomainResult<()> {
        let Some(settings) = SlugFieldSettings::from_settings(&field.settings) else {
            return Ok(());
        };
        if is_empty_value(value) || ctx.value().is_empty() || settings.source.is_empty() {
            return Ok(());
        }

        let candidate = self
            .generator
            .slugify(&source_text(ctx.value().get(&settings.source)));

        let check = SlugCheck {
            candidate: &candidate,
            content_type_id,
            exclude_id: ctx.object_id(),
            locale: ctx.locale(),
            source: &settings.source,
        };
        if let Some(violation) = self.uniqueness.check_slug_exists(check).await? {
            ctx.add_violation(violation);
        }
        Ok(())
    }

    fn on_create(&self, field: &FieldableField, data: &mut ContentData) {
        self.write_slug(field, data);
    }

    fn on_update(&self, field: &FieldableField, _old_data: &ContentData, data: &mut ContentData) {
        self.write_slug(field, data);
    }

    fn resolve_data(&self, value: Option<&Value>) -> Option<Value> {
        if is_empty_value(value) {
            return None;
        }
        Some(Value::String(source_text(value)))
    }

    fn input_schema(&self) -> Option<&'static str> {
        Some(SLUG_FIELD_INPUT)
    }
}
