use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::feature::NewFeature;
use crate::domain::types::{EntityName, Position, TypeConstraintError};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeatureForm {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFormPayload {
    pub feature: NewFeature,
}

#[derive(Debug, Error)]
pub enum FeatureFormError {
    #[error("Feature form validation failed: {0}")]
    Validation(String),
    #[error("Feature form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for FeatureFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for FeatureFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<FeatureForm> for FeatureFormPayload {
    type Error = FeatureFormError;

    fn try_from(value: FeatureForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            feature: NewFeature {
                name: EntityName::new(value.name.unwrap_or_default())?,
                position: Position::new(value.position.unwrap_or(0))?,
                is_active: value.is_active.unwrap_or(true),
            },
        })
    }
}
