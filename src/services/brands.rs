use crate::domain::brand::Brand;
use crate::domain::types::BrandId;
use crate::forms::brands::{BrandForm, BrandFormPayload};
use crate::repository::{BrandReader, BrandWriter};

use super::{ServiceError, ServiceResult};

pub fn list_brands<R>(repo: &R) -> ServiceResult<Vec<Brand>>
where
    R: BrandReader,
{
    repo.list_brands().map_err(|e| {
        log::error!("Failed to list brands: {e}");
        ServiceError::Internal
    })
}

pub fn show_brand<R>(brand_id: i32, repo: &R) -> ServiceResult<Brand>
where
    R: BrandReader,
{
    let brand_id = BrandId::new(brand_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_brand_by_id(brand_id) {
        Ok(Some(brand)) => Ok(brand),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get brand: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_brand<R>(form: BrandForm, repo: &R) -> ServiceResult<Brand>
where
    R: BrandWriter,
{
    let payload: BrandFormPayload = form.try_into()?;

    repo.create_brand(&payload.brand).map_err(|e| {
        log::error!("Failed to create brand: {e}");
        ServiceError::Internal
    })
}

pub fn update_brand<R>(brand_id: i32, form: BrandForm, repo: &R) -> ServiceResult<Brand>
where
    R: BrandWriter,
{
    let brand_id = BrandId::new(brand_id).map_err(|_| ServiceError::NotFound)?;
    let payload: BrandFormPayload = form.try_into()?;

    match repo.update_brand(brand_id, &payload.brand) {
        Ok(Some(brand)) => Ok(brand),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update brand: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Products of the brand keep existing with no brand.
pub fn delete_brand<R>(brand_id: i32, repo: &R) -> ServiceResult<()>
where
    R: BrandWriter,
{
    let brand_id = BrandId::new(brand_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_brand(brand_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete brand: {e}");
            Err(ServiceError::Internal)
        }
    }
}
