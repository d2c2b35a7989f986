use crate::domain::feature::Feature;
use crate::domain::types::FeatureId;
use crate::forms::features::{FeatureForm, FeatureFormPayload};
use crate::repository::{FeatureReader, FeatureWriter};

use super::{ServiceError, ServiceResult};

pub fn list_features<R>(repo: &R) -> ServiceResult<Vec<Feature>>
where
    R: FeatureReader,
{
    repo.list_features().map_err(|e| {
        log::error!("Failed to list features: {e}");
        ServiceError::Internal
    })
}

pub fn show_feature<R>(feature_id: i32, repo: &R) -> ServiceResult<Feature>
where
    R: FeatureReader,
{
    let feature_id = FeatureId::new(feature_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_feature_by_id(feature_id) {
        Ok(Some(feature)) => Ok(feature),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get feature: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_feature<R>(form: FeatureForm, repo: &R) -> ServiceResult<Feature>
where
    R: FeatureWriter,
{
    let payload: FeatureFormPayload = form.try_into()?;

    repo.create_feature(&payload.feature).map_err(|e| {
        log::error!("Failed to create feature: {e}");
        ServiceError::Internal
    })
}

pub fn update_feature<R>(feature_id: i32, form: FeatureForm, repo: &R) -> ServiceResult<Feature>
where
    R: FeatureWriter,
{
    let feature_id = FeatureId::new(feature_id).map_err(|_| ServiceError::NotFound)?;
    let payload: FeatureFormPayload = form.try_into()?;

    match repo.update_feature(feature_id, &payload.feature) {
        Ok(Some(feature)) => Ok(feature),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update feature: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Feature values set on products are removed with it.
pub fn delete_feature<R>(feature_id: i32, repo: &R) -> ServiceResult<()>
where
    R: FeatureWriter,
{
    let feature_id = FeatureId::new(feature_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_feature(feature_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete feature: {e}");
            Err(ServiceError::Internal)
        }
    }
}
