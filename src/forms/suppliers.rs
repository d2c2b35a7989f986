use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::supplier::NewSupplier;
use crate::domain::types::{EntityName, TypeConstraintError};
use crate::forms::{non_blank, optional_email};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SupplierForm {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    #[validate(length(max = 64))]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierFormPayload {
    pub supplier: NewSupplier,
}

#[derive(Debug, Error)]
pub enum SupplierFormError {
    #[error("Supplier form validation failed: {0}")]
    Validation(String),
    #[error("Supplier form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SupplierFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SupplierFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SupplierForm> for SupplierFormPayload {
    type Error = SupplierFormError;

    fn try_from(value: SupplierForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            supplier: NewSupplier {
                name: EntityName::new(value.name.unwrap_or_default())?,
                contact_person: non_blank(value.contact_person),
                email: optional_email(value.email)?,
                phone: non_blank(value.phone),
                address: non_blank(value.address),
                notes: non_blank(value.notes),
                is_active: value.is_active.unwrap_or(true),
            },
        })
    }
}
