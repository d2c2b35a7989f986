use crate::domain::types::WarehouseId;
use crate::domain::warehouse::Warehouse;
use crate::forms::warehouses::{WarehouseForm, WarehouseFormPayload};
use crate::repository::{WarehouseReader, WarehouseWriter};

use super::{ServiceError, ServiceResult};

pub fn list_warehouses<R>(repo: &R) -> ServiceResult<Vec<Warehouse>>
where
    R: WarehouseReader,
{
    repo.list_warehouses().map_err(|e| {
        log::error!("Failed to list warehouses: {e}");
        ServiceError::Internal
    })
}

pub fn show_warehouse<R>(warehouse_id: i32, repo: &R) -> ServiceResult<Warehouse>
where
    R: WarehouseReader,
{
    let warehouse_id = WarehouseId::new(warehouse_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_warehouse_by_id(warehouse_id) {
        Ok(Some(warehouse)) => Ok(warehouse),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get warehouse: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_warehouse<R>(form: WarehouseForm, repo: &R) -> ServiceResult<Warehouse>
where
    R: WarehouseWriter,
{
    let payload: WarehouseFormPayload = form.try_into()?;

    repo.create_warehouse(&payload.warehouse).map_err(|e| {
        log::error!("Failed to create warehouse: {e}");
        ServiceError::Internal
    })
}

pub fn update_warehouse<R>(warehouse_id: i32, form: WarehouseForm, repo: &R) -> ServiceResult<Warehouse>
where
    R: WarehouseWriter,
{
    let warehouse_id = WarehouseId::new(warehouse_id).map_err(|_| ServiceError::NotFound)?;
    let payload: WarehouseFormPayload = form.try_into()?;

    match repo.update_warehouse(warehouse_id, &payload.warehouse) {
        Ok(Some(warehouse)) => Ok(warehouse),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update warehouse: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Stock rows held in the warehouse are removed with it.
pub fn delete_warehouse<R>(warehouse_id: i32, repo: &R) -> ServiceResult<()>
where
    R: WarehouseWriter,
{
    let warehouse_id = WarehouseId::new(warehouse_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_warehouse(warehouse_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete warehouse: {e}");
            Err(ServiceError::Internal)
        }
    }
}
