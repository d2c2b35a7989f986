use crate::db::{DbConnection, DbPool};
use crate::domain::attribute::{AttributeWithValues, NewAttribute, NewAttributeValue};
use crate::domain::brand::{Brand, NewBrand};
use crate::domain::category::{Category, NewCategory};
use crate::domain::feature::{Feature, NewFeature};
use crate::domain::product::{
    NewProduct, Product, ProductDetails, ProductRelations, ProductSummary,
};
use crate::domain::supplier::{NewSupplier, Supplier};
use crate::domain::types::{
    AttributeId, BrandId, CategoryId, FeatureId, ProductId, Slug, SupplierId, WarehouseId,
};
use crate::domain::warehouse::{NewWarehouse, Warehouse};
use crate::repository::errors::RepositoryResult;

pub mod attribute;
pub mod brand;
pub mod category;
pub mod errors;
pub mod feature;
pub mod product;
pub mod supplier;
pub mod warehouse;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for the product aggregate.
pub trait ProductReader {
    /// List products newest first with resolved reference names and the
    /// primary image URL.
    fn list_products(&self) -> RepositoryResult<Vec<ProductSummary>>;
    /// Retrieve the base product row.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Assemble the full aggregate: base row, names and every collection.
    fn get_product_details(&self, id: ProductId) -> RepositoryResult<Option<ProductDetails>>;
}

/// Write operations for the product aggregate. Each call is atomic.
pub trait ProductWriter {
    /// Insert the base row and every non-empty collection.
    fn create_product(
        &self,
        product: &NewProduct,
        relations: &ProductRelations,
    ) -> RepositoryResult<Product>;
    /// Replace the base row and each collection present in `relations`.
    /// Returns `None` when the product does not exist.
    fn update_product(
        &self,
        id: ProductId,
        product: &NewProduct,
        relations: &ProductRelations,
    ) -> RepositoryResult<Option<Product>>;
    /// Delete a product and, through cascades, its dependents.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Retrieve a category by its unique slug.
    fn get_category_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Fully replace a category. Returns `None` when it does not exist.
    fn update_category(
        &self,
        id: CategoryId,
        category: &NewCategory,
    ) -> RepositoryResult<Option<Category>>;
    /// Delete a category together with its descendants.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

pub trait BrandReader {
    fn list_brands(&self) -> RepositoryResult<Vec<Brand>>;
    fn get_brand_by_id(&self, id: BrandId) -> RepositoryResult<Option<Brand>>;
}

pub trait BrandWriter {
    fn create_brand(&self, brand: &NewBrand) -> RepositoryResult<Brand>;
    fn update_brand(&self, id: BrandId, brand: &NewBrand) -> RepositoryResult<Option<Brand>>;
    fn delete_brand(&self, id: BrandId) -> RepositoryResult<usize>;
}

pub trait SupplierReader {
    fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>>;
    fn get_supplier_by_id(&self, id: SupplierId) -> RepositoryResult<Option<Supplier>>;
}

pub trait SupplierWriter {
    fn create_supplier(&self, supplier: &NewSupplier) -> RepositoryResult<Supplier>;
    fn update_supplier(
        &self,
        id: SupplierId,
        supplier: &NewSupplier,
    ) -> RepositoryResult<Option<Supplier>>;
    fn delete_supplier(&self, id: SupplierId) -> RepositoryResult<usize>;
}

pub trait WarehouseReader {
    fn list_warehouses(&self) -> RepositoryResult<Vec<Warehouse>>;
    fn get_warehouse_by_id(&self, id: WarehouseId) -> RepositoryResult<Option<Warehouse>>;
}

pub trait WarehouseWriter {
    fn create_warehouse(&self, warehouse: &NewWarehouse) -> RepositoryResult<Warehouse>;
    fn update_warehouse(
        &self,
        id: WarehouseId,
        warehouse: &NewWarehouse,
    ) -> RepositoryResult<Option<Warehouse>>;
    fn delete_warehouse(&self, id: WarehouseId) -> RepositoryResult<usize>;
}

pub trait FeatureReader {
    /// List features ordered by position, then name.
    fn list_features(&self) -> RepositoryResult<Vec<Feature>>;
    fn get_feature_by_id(&self, id: FeatureId) -> RepositoryResult<Option<Feature>>;
}

pub trait FeatureWriter {
    fn create_feature(&self, feature: &NewFeature) -> RepositoryResult<Feature>;
    fn update_feature(
        &self,
        id: FeatureId,
        feature: &NewFeature,
    ) -> RepositoryResult<Option<Feature>>;
    fn delete_feature(&self, id: FeatureId) -> RepositoryResult<usize>;
}

/// Read-only operations for attributes; values are always embedded.
pub trait AttributeReader {
    fn list_attributes(&self) -> RepositoryResult<Vec<AttributeWithValues>>;
    fn get_attribute_by_id(&self, id: AttributeId)
    -> RepositoryResult<Option<AttributeWithValues>>;
}

/// Write operations for attributes and their values. Each call is atomic.
pub trait AttributeWriter {
    fn create_attribute(
        &self,
        attribute: &NewAttribute,
        values: &[NewAttributeValue],
    ) -> RepositoryResult<AttributeWithValues>;
    /// Replace the attribute row and, when `values` is given, reconcile its
    /// values: known ids are updated, new entries inserted, the rest removed.
    fn update_attribute(
        &self,
        id: AttributeId,
        attribute: &NewAttribute,
        values: Option<&[NewAttributeValue]>,
    ) -> RepositoryResult<Option<AttributeWithValues>>;
    fn delete_attribute(&self, id: AttributeId) -> RepositoryResult<usize>;
}
