use crate::domain::product::{Product, ProductDetails, ProductSummary};
use crate::domain::types::ProductId;
use crate::forms::products::{ProductForm, ProductFormPayload};
use crate::repository::errors::RepositoryError;
use crate::repository::{ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductSummary>>
where
    R: ProductReader,
{
    repo.list_products().map_err(|e| {
        log::error!("Failed to list products: {e}");
        ServiceError::Internal
    })
}

/// Returns the full product aggregate.
pub fn show_product<R>(product_id: i32, repo: &R) -> ServiceResult<ProductDetails>
where
    R: ProductReader,
{
    let product_id = ProductId::new(product_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_product_details(product_id) {
        Ok(Some(details)) => Ok(details),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product details: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_product<R>(form: ProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let payload: ProductFormPayload = form.try_into()?;

    match repo.create_product(&payload.product, &payload.relations) {
        Ok(product) => {
            log::info!("Created product {} ({})", product.id, product.reference);
            Ok(product)
        }
        Err(RepositoryError::ValidationError(message)) => Err(ServiceError::Form(message)),
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replaces the base row and every collection present in the form.
pub fn update_product<R>(product_id: i32, form: ProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let product_id = ProductId::new(product_id).map_err(|_| ServiceError::NotFound)?;
    let payload: ProductFormPayload = form.try_into()?;

    match repo.update_product(product_id, &payload.product, &payload.relations) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(RepositoryError::ValidationError(message)) => Err(ServiceError::Form(message)),
        Err(e) => {
            log::error!("Failed to update product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Deleting an unknown product is not an error.
pub fn delete_product<R>(product_id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let Ok(product_id) = ProductId::new(product_id) else {
        return Ok(());
    };

    match repo.delete_product(product_id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(ServiceError::Internal)
        }
    }
}
