//! Template service
//!
//! Lists and renders ready-to-send document templates, auto-filling
//! profile-sourced variables.

use std::collections::HashMap;

use settle_core::entities::VariableSource;
use settle_core::{DomainError, RecordId, TemplateDocCategory};
use tracing::{info, instrument};

use crate::dto::{RenderTemplateRequest, RenderedTemplateResponse, TemplateDocResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Template service
pub struct TemplateService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TemplateService<'a> {
    /// Create a new TemplateService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List active document templates, optionally by category
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        category: Option<TemplateDocCategory>,
    ) -> ServiceResult<Vec<TemplateDocResponse>> {
        let docs = self.ctx.template_doc_repo().list_active(category).await?;
        Ok(docs.iter().map(TemplateDocResponse::from).collect())
    }

    /// Get one template's metadata by slug
    #[instrument(skip(self))]
    pub async fn get(&self, slug: &str) -> ServiceResult<TemplateDocResponse> {
        let doc = self
            .ctx
            .template_doc_repo()
            .find_by_slug(slug)
            .await?
            .filter(|d| d.is_active)
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::TemplateDocNotFound(slug.to_string()))
            })?;

        Ok(TemplateDocResponse::from(&doc))
    }

    /// Render a template for the current user.
    ///
    /// Caller-supplied values win; profile-sourced variables without a value
    /// are filled from the user's account and profile.
    #[instrument(skip(self, request))]
    pub async fn render(
        &self,
        user_id: RecordId,
        slug: &str,
        request: RenderTemplateRequest,
    ) -> ServiceResult<RenderedTemplateResponse> {
        let doc = self
            .ctx
            .template_doc_repo()
            .find_by_slug(slug)
            .await?
            .filter(|d| d.is_active)
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::TemplateDocNotFound(slug.to_string()))
            })?;

        let mut values = request.values;
        self.fill_profile_values(user_id, &doc.variables, &mut values)
            .await?;

        let content = doc.render(&values)?;
        self.ctx.template_doc_repo().increment_usage(doc.id).await?;

        info!(user_id = %user_id, slug = %slug, "Template rendered");

        Ok(RenderedTemplateResponse {
            slug: doc.slug,
            title: doc.title,
            content,
        })
    }

    /// Fill missing profile-sourced variables from the account and profile
    async fn fill_profile_values(
        &self,
        user_id: RecordId,
        variables: &[settle_core::TemplateVariable],
        values: &mut HashMap<String, String>,
    ) -> ServiceResult<()> {
        let needs_profile_fill = variables
            .iter()
            .any(|v| v.source == VariableSource::Profile && !values.contains_key(&v.key));
        if !needs_profile_fill {
            return Ok(());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;
        let profile = self.ctx.profile_repo().find_by_user(user_id).await?;

        for variable in variables {
            if variable.source != VariableSource::Profile || values.contains_key(&variable.key) {
                continue;
            }

            let value = match variable.key.as_str() {
                "name" => Some(user.display_name().to_string()),
                "city" => profile.as_ref().and_then(|p| p.city.clone()),
                "postcode_area" => profile.as_ref().and_then(|p| p.postcode_area.clone()),
                "region" => profile.as_ref().map(|p| p.region.to_string()),
                _ => None,
            };

            if let Some(value) = value {
                values.insert(variable.key.clone(), value);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Rendering semantics are covered in settle-core::entities::template_doc;
    // the profile auto-fill path is covered by the integration tests
}
