//! Document template entity - ready-to-send letters and messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::DomainError;
use crate::value_objects::{RecordId, TemplateDocCategory};

/// Where a variable's value comes from when rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableSource {
    /// Filled automatically from the user's profile
    Profile,
    /// Supplied by the caller at render time
    Manual,
}

/// A placeholder declared by a document template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    pub key: String,
    pub label: String,
    pub source: VariableSource,
    pub placeholder: String,
    pub required: bool,
}

/// A fill-in-the-blanks document (landlord email, bank letter, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDoc {
    pub id: RecordId,
    pub title: String,
    pub slug: String,
    pub category: TemplateDocCategory,
    pub description: String,
    pub content: String,
    pub variables: Vec<TemplateVariable>,
    pub tags: Vec<String>,
    pub usage_count: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TemplateDoc {
    /// Render the template, substituting `{{key}}` placeholders.
    ///
    /// Values are looked up in `values`; a declared variable with no value
    /// falls back to its placeholder text unless it is required, in which
    /// case rendering fails. Placeholders not declared as variables are left
    /// untouched.
    ///
    /// # Errors
    /// Returns `DomainError::MissingVariable` when a required variable has no
    /// value.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, DomainError> {
        let mut output = self.content.clone();

        for variable in &self.variables {
            let token = format!("{{{{{}}}}}", variable.key);
            let value = match values.get(&variable.key) {
                Some(v) if !v.trim().is_empty() => v.clone(),
                _ if variable.required => {
                    return Err(DomainError::MissingVariable(variable.key.clone()));
                }
                _ => variable.placeholder.clone(),
            };
            output = output.replace(&token, &value);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deposit_template() -> TemplateDoc {
        let now = Utc::now();
        TemplateDoc {
            id: RecordId::new(1),
            title: "Deposit protection request".to_string(),
            slug: "deposit-protection-request".to_string(),
            category: TemplateDocCategory::Landlord,
            description: String::new(),
            content: "Dear {{landlord_name}},\n\nMy name is {{name}} and I rent in {{city}}."
                .to_string(),
            variables: vec![
                TemplateVariable {
                    key: "landlord_name".to_string(),
                    label: "Landlord name".to_string(),
                    source: VariableSource::Manual,
                    placeholder: "[landlord name]".to_string(),
                    required: true,
                },
                TemplateVariable {
                    key: "name".to_string(),
                    label: "Your name".to_string(),
                    source: VariableSource::Profile,
                    placeholder: "[your name]".to_string(),
                    required: false,
                },
                TemplateVariable {
                    key: "city".to_string(),
                    label: "City".to_string(),
                    source: VariableSource::Profile,
                    placeholder: "[your city]".to_string(),
                    required: false,
                },
            ],
            tags: Vec::new(),
            usage_count: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_render_substitutes_values() {
        let tpl = deposit_template();
        let mut values = HashMap::new();
        values.insert("landlord_name".to_string(), "Mr. Price".to_string());
        values.insert("name".to_string(), "Amira".to_string());
        values.insert("city".to_string(), "Leeds".to_string());

        let rendered = tpl.render(&values).unwrap();
        assert_eq!(
            rendered,
            "Dear Mr. Price,\n\nMy name is Amira and I rent in Leeds."
        );
    }

    #[test]
    fn test_render_missing_required_fails() {
        let tpl = deposit_template();
        let values = HashMap::new();
        let err = tpl.render(&values).unwrap_err();
        assert!(matches!(err, DomainError::MissingVariable(key) if key == "landlord_name"));
    }

    #[test]
    fn test_render_missing_optional_uses_placeholder() {
        let tpl = deposit_template();
        let mut values = HashMap::new();
        values.insert("landlord_name".to_string(), "Mr. Price".to_string());

        let rendered = tpl.render(&values).unwrap();
        assert!(rendered.contains("[your name]"));
        assert!(rendered.contains("[your city]"));
    }

    #[test]
    fn test_render_blank_value_counts_as_missing() {
        let tpl = deposit_template();
        let mut values = HashMap::new();
        values.insert("landlord_name".to_string(), "   ".to_string());
        assert!(tpl.render(&values).is_err());
    }
}
