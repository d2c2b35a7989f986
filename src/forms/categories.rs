use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryId, EntityName, Slug, TypeConstraintError};
use crate::forms::{non_blank, optional_reference};

/// Body of `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub slug: Option<String>,
    pub parent_id: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    #[validate(length(max = 255))]
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFormPayload {
    pub category: NewCategory,
}

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category form validation failed: {0}")]
    Validation(String),
    #[error("Category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CategoryForm> for CategoryFormPayload {
    type Error = CategoryFormError;

    fn try_from(value: CategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            category: NewCategory {
                name: EntityName::new(value.name.unwrap_or_default())?,
                slug: Slug::new(value.slug.unwrap_or_default())?,
                parent_id: optional_reference(value.parent_id, "parent_id", CategoryId::new)?,
                description: non_blank(value.description),
                image_url: non_blank(value.image_url),
                is_active: value.is_active.unwrap_or(true),
                meta_title: non_blank(value.meta_title),
                meta_description: non_blank(value.meta_description),
            },
        })
    }
}
