use crate::domain::attribute::AttributeWithValues;
use crate::domain::types::AttributeId;
use crate::forms::attributes::{AttributeForm, AttributeFormPayload};
use crate::repository::{AttributeReader, AttributeWriter};

use super::{ServiceError, ServiceResult};

pub fn list_attributes<R>(repo: &R) -> ServiceResult<Vec<AttributeWithValues>>
where
    R: AttributeReader,
{
    repo.list_attributes().map_err(|e| {
        log::error!("Failed to list attributes: {e}");
        ServiceError::Internal
    })
}

pub fn show_attribute<R>(attribute_id: i32, repo: &R) -> ServiceResult<AttributeWithValues>
where
    R: AttributeReader,
{
    let attribute_id = AttributeId::new(attribute_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_attribute_by_id(attribute_id) {
        Ok(Some(attribute)) => Ok(attribute),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get attribute: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_attribute<R>(form: AttributeForm, repo: &R) -> ServiceResult<AttributeWithValues>
where
    R: AttributeWriter,
{
    let payload: AttributeFormPayload = form.try_into()?;
    let values = payload.values.unwrap_or_default();

    repo.create_attribute(&payload.attribute, &values).map_err(|e| {
        log::error!("Failed to create attribute: {e}");
        ServiceError::Internal
    })
}

/// Omitting `values` leaves the stored values untouched.
pub fn update_attribute<R>(
    attribute_id: i32,
    form: AttributeForm,
    repo: &R,
) -> ServiceResult<AttributeWithValues>
where
    R: AttributeWriter,
{
    let attribute_id = AttributeId::new(attribute_id).map_err(|_| ServiceError::NotFound)?;
    let payload: AttributeFormPayload = form.try_into()?;

    match repo.update_attribute(attribute_id, &payload.attribute, payload.values.as_deref()) {
        Ok(Some(attribute)) => Ok(attribute),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update attribute: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_attribute<R>(attribute_id: i32, repo: &R) -> ServiceResult<()>
where
    R: AttributeWriter,
{
    let attribute_id = AttributeId::new(attribute_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_attribute(attribute_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete attribute: {e}");
            Err(ServiceError::Internal)
        }
    }
}
