//! Rows of the tables that hang off a product: category links, feature
//! values, stock levels and variations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProductFeature as DomainNewProductFeature,
    NewProductVariation as DomainNewProductVariation, NewStockLevel as DomainNewStockLevel,
    NewVariationAttribute as DomainNewVariationAttribute,
    ProductVariation as DomainProductVariation,
};
use crate::domain::types::{Delta, Quantity, TypeConstraintError, VariationReference};

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_categories)]
pub struct NewProductCategory {
    pub product_id: i32,
    pub category_id: i32,
}

/// Diesel model representing the `product_features` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_features)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductFeature {
    pub id: i32,
    pub product_id: i32,
    pub feature_id: i32,
    pub value: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_features)]
pub struct NewProductFeature {
    pub product_id: i32,
    pub feature_id: i32,
    pub value: String,
}

impl NewProductFeature {
    pub fn from_domain(product_id: i32, feature: &DomainNewProductFeature) -> Self {
        Self {
            product_id,
            feature_id: feature.feature_id.get(),
            value: feature.value.as_str().to_string(),
        }
    }
}

/// Diesel model representing the `product_stock` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_stock)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductStock {
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_stock)]
pub struct NewProductStock {
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity: i32,
    pub updated_at: NaiveDateTime,
}

impl NewProductStock {
    pub fn from_domain(product_id: i32, level: &DomainNewStockLevel, now: NaiveDateTime) -> Self {
        Self {
            product_id,
            warehouse_id: level.warehouse_id.get(),
            quantity: level.quantity.get(),
            updated_at: now,
        }
    }
}

/// Diesel model representing the `product_variations` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_variations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductVariation {
    pub id: i32,
    pub product_id: i32,
    pub reference: String,
    pub price_impact: String,
    pub weight_impact: String,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_variations)]
pub struct NewProductVariation {
    pub product_id: i32,
    pub reference: String,
    pub price_impact: String,
    pub weight_impact: String,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewProductVariation {
    pub fn from_domain(
        product_id: i32,
        variation: &DomainNewProductVariation,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            product_id,
            reference: variation.reference.as_str().to_string(),
            price_impact: variation.price_impact.as_str().to_string(),
            weight_impact: variation.weight_impact.as_str().to_string(),
            quantity: variation.quantity.get(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Converts a variation row; attributes are attached by the caller.
impl TryFrom<ProductVariation> for DomainProductVariation {
    type Error = TypeConstraintError;

    fn try_from(variation: ProductVariation) -> Result<Self, Self::Error> {
        Ok(Self {
            id: variation.id.try_into()?,
            product_id: variation.product_id.try_into()?,
            reference: VariationReference::new(variation.reference)?,
            price_impact: Delta::new(variation.price_impact)?,
            weight_impact: Delta::new(variation.weight_impact)?,
            quantity: Quantity::new(variation.quantity)?,
            created_at: variation.created_at,
            updated_at: variation.updated_at,
            attributes: Vec::new(),
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_variation_attributes)]
pub struct NewProductVariationAttribute {
    pub variation_id: i32,
    pub attribute_id: i32,
    pub attribute_value_id: i32,
}

impl NewProductVariationAttribute {
    pub fn from_domain(variation_id: i32, selection: &DomainNewVariationAttribute) -> Self {
        Self {
            variation_id,
            attribute_id: selection.attribute_id.get(),
            attribute_value_id: selection.attribute_value_id.get(),
        }
    }
}
