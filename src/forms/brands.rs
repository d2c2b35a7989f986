use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::brand::NewBrand;
use crate::domain::types::{EntityName, Slug, TypeConstraintError};
use crate::forms::non_blank;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BrandForm {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub slug: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrandFormPayload {
    pub brand: NewBrand,
}

#[derive(Debug, Error)]
pub enum BrandFormError {
    #[error("Brand form validation failed: {0}")]
    Validation(String),
    #[error("Brand form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for BrandFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for BrandFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<BrandForm> for BrandFormPayload {
    type Error = BrandFormError;

    fn try_from(value: BrandForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            brand: NewBrand {
                name: EntityName::new(value.name.unwrap_or_default())?,
                slug: Slug::new(value.slug.unwrap_or_default())?,
                logo_url: non_blank(value.logo_url),
                description: non_blank(value.description),
                meta_title: non_blank(value.meta_title),
                meta_description: non_blank(value.meta_description),
                is_active: value.is_active.unwrap_or(true),
            },
        })
    }
}
