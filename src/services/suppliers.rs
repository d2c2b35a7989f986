use crate::domain::supplier::Supplier;
use crate::domain::types::SupplierId;
use crate::forms::suppliers::{SupplierForm, SupplierFormPayload};
use crate::repository::{SupplierReader, SupplierWriter};

use super::{ServiceError, ServiceResult};

pub fn list_suppliers<R>(repo: &R) -> ServiceResult<Vec<Supplier>>
where
    R: SupplierReader,
{
    repo.list_suppliers().map_err(|e| {
        log::error!("Failed to list suppliers: {e}");
        ServiceError::Internal
    })
}

pub fn show_supplier<R>(supplier_id: i32, repo: &R) -> ServiceResult<Supplier>
where
    R: SupplierReader,
{
    let supplier_id = SupplierId::new(supplier_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_supplier_by_id(supplier_id) {
        Ok(Some(supplier)) => Ok(supplier),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get supplier: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_supplier<R>(form: SupplierForm, repo: &R) -> ServiceResult<Supplier>
where
    R: SupplierWriter,
{
    let payload: SupplierFormPayload = form.try_into()?;

    repo.create_supplier(&payload.supplier).map_err(|e| {
        log::error!("Failed to create supplier: {e}");
        ServiceError::Internal
    })
}

pub fn update_supplier<R>(supplier_id: i32, form: SupplierForm, repo: &R) -> ServiceResult<Supplier>
where
    R: SupplierWriter,
{
    let supplier_id = SupplierId::new(supplier_id).map_err(|_| ServiceError::NotFound)?;
    let payload: SupplierFormPayload = form.try_into()?;

    match repo.update_supplier(supplier_id, &payload.supplier) {
        Ok(Some(supplier)) => Ok(supplier),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update supplier: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Products of the supplier keep existing with no supplier.
pub fn delete_supplier<R>(supplier_id: i32, repo: &R) -> ServiceResult<()>
where
    R: SupplierWriter,
{
    let supplier_id = SupplierId::new(supplier_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_supplier(supplier_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete supplier: {e}");
            Err(ServiceError::Internal)
        }
    }
}
