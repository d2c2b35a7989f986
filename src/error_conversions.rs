//! Conversions from form and value-object errors into [`ServiceError`].
//!
//! Every one of them is a client mistake and surfaces as a 400 response.

use crate::domain::types::TypeConstraintError;
use crate::forms::attributes::AttributeFormError;
use crate::forms::brands::BrandFormError;
use crate::forms::categories::CategoryFormError;
use crate::forms::features::FeatureFormError;
use crate::forms::helpers::PriceQueryError;
use crate::forms::products::ProductFormError;
use crate::forms::suppliers::SupplierFormError;
use crate::forms::warehouses::WarehouseFormError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<ProductFormError> for ServiceError {
    fn from(val: ProductFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<CategoryFormError> for ServiceError {
    fn from(val: CategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<BrandFormError> for ServiceError {
    fn from(val: BrandFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<SupplierFormError> for ServiceError {
    fn from(val: SupplierFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<WarehouseFormError> for ServiceError {
    fn from(val: WarehouseFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<FeatureFormError> for ServiceError {
    fn from(val: FeatureFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AttributeFormError> for ServiceError {
    fn from(val: AttributeFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<PriceQueryError> for ServiceError {
    fn from(val: PriceQueryError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
