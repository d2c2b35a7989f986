use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{
    BrandId, CategoryId, Measure, Price, ProductName, ProductReference, Slug, SupplierId,
    TypeConstraintError, Visibility,
};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub reference: String,
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub price_with_vat: String,
    pub price_without_vat: String,
    pub cost_price: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub depth: Option<String>,
    pub weight: Option<String>,
    pub delivery_time: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub visibility: String,
    pub has_variations: bool,
    pub brand_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub default_category_id: Option<i32>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewProduct {
    pub reference: String,
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub price_with_vat: String,
    pub price_without_vat: String,
    pub cost_price: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub depth: Option<String>,
    pub weight: Option<String>,
    pub delivery_time: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub visibility: String,
    pub has_variations: bool,
    pub brand_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub default_category_id: Option<i32>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full-replace changeset for the base row; `None` writes `NULL`.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductChangeset {
    pub reference: String,
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub price_with_vat: String,
    pub price_without_vat: String,
    pub cost_price: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub depth: Option<String>,
    pub weight: Option<String>,
    pub delivery_time: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub visibility: String,
    pub has_variations: bool,
    pub brand_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub default_category_id: Option<i32>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

fn optional_measure(value: Option<String>) -> Result<Option<Measure>, TypeConstraintError> {
    value.map(Measure::new).transpose()
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            reference: ProductReference::new(product.reference)?,
            name: ProductName::new(product.name)?,
            slug: Slug::new(product.slug)?,
            short_description: product.short_description,
            long_description: product.long_description,
            price_with_vat: Price::new(product.price_with_vat)?,
            price_without_vat: Price::new(product.price_without_vat)?,
            cost_price: product.cost_price.map(Price::new).transpose()?,
            width: optional_measure(product.width)?,
            height: optional_measure(product.height)?,
            depth: optional_measure(product.depth)?,
            weight: optional_measure(product.weight)?,
            delivery_time: product.delivery_time,
            meta_title: product.meta_title,
            meta_description: product.meta_description,
            canonical_url: product.canonical_url,
            visibility: Visibility::try_from(product.visibility)?,
            has_variations: product.has_variations,
            brand_id: product.brand_id.map(BrandId::new).transpose()?,
            supplier_id: product.supplier_id.map(SupplierId::new).transpose()?,
            default_category_id: product
                .default_category_id
                .map(CategoryId::new)
                .transpose()?,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl NewProduct {
    /// Builds the insertable row, stamping both timestamps with `now`.
    pub fn from_domain(product: DomainNewProduct, now: NaiveDateTime) -> Self {
        Self {
            reference: product.reference.into_inner(),
            name: product.name.into_inner(),
            slug: product.slug.into_inner(),
            short_description: product.short_description,
            long_description: product.long_description,
            price_with_vat: product.price_with_vat.into_inner(),
            price_without_vat: product.price_without_vat.into_inner(),
            cost_price: product.cost_price.map(Price::into_inner),
            width: product.width.map(Measure::into_inner),
            height: product.height.map(Measure::into_inner),
            depth: product.depth.map(Measure::into_inner),
            weight: product.weight.map(Measure::into_inner),
            delivery_time: product.delivery_time,
            meta_title: product.meta_title,
            meta_description: product.meta_description,
            canonical_url: product.canonical_url,
            visibility: product.visibility.as_str().to_string(),
            has_variations: product.has_variations,
            brand_id: product.brand_id.map(|id| id.get()),
            supplier_id: product.supplier_id.map(|id| id.get()),
            default_category_id: product.default_category_id.map(|id| id.get()),
            is_active: product.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ProductChangeset {
    /// Builds the replacement changeset, stamping `updated_at` with `now`.
    pub fn from_domain(product: DomainNewProduct, now: NaiveDateTime) -> Self {
        let row = NewProduct::from_domain(product, now);
        Self {
            reference: row.reference,
            name: row.name,
            slug: row.slug,
            short_description: row.short_description,
            long_description: row.long_description,
            price_with_vat: row.price_with_vat,
            price_without_vat: row.price_without_vat,
            cost_price: row.cost_price,
            width: row.width,
            height: row.height,
            depth: row.depth,
            weight: row.weight,
            delivery_time: row.delivery_time,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            canonical_url: row.canonical_url,
            visibility: row.visibility,
            has_variations: row.has_variations,
            brand_id: row.brand_id,
            supplier_id: row.supplier_id,
            default_category_id: row.default_category_id,
            is_active: row.is_active,
            updated_at: now,
        }
    }
}
