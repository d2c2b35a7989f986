use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{EntityName, TypeConstraintError};
use crate::domain::warehouse::NewWarehouse;
use crate::forms::{non_blank, optional_email};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseForm {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    #[validate(length(max = 64))]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseFormPayload {
    pub warehouse: NewWarehouse,
}

#[derive(Debug, Error)]
pub enum WarehouseFormError {
    #[error("Warehouse form validation failed: {0}")]
    Validation(String),
    #[error("Warehouse form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for WarehouseFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for WarehouseFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<WarehouseForm> for WarehouseFormPayload {
    type Error = WarehouseFormError;

    fn try_from(value: WarehouseForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            warehouse: NewWarehouse {
                name: EntityName::new(value.name.unwrap_or_default())?,
                address: non_blank(value.address),
                city: non_blank(value.city),
                phone: non_blank(value.phone),
                email: optional_email(value.email)?,
                is_active: value.is_active.unwrap_or(true),
            },
        })
    }
}
