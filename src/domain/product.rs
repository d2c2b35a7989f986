use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AttributeId, AttributeValueId, BrandId, CategoryId, Delta, FeatureId, FeatureValue, ImageUrl,
    Measure, Position, Price, ProductFeatureId, ProductId, ProductImageId, ProductName,
    ProductReference, Quantity, Slug, SupplierId, VariationAttributeId, VariationId,
    VariationReference, Visibility, WarehouseId,
};

/// Root record of the product aggregate, without its dependent collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub reference: ProductReference,
    pub name: ProductName,
    pub slug: Slug,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub price_with_vat: Price,
    pub price_without_vat: Price,
    pub cost_price: Option<Price>,
    pub width: Option<Measure>,
    pub height: Option<Measure>,
    pub depth: Option<Measure>,
    pub weight: Option<Measure>,
    pub delivery_time: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub visibility: Visibility,
    pub has_variations: bool,
    pub brand_id: Option<BrandId>,
    pub supplier_id: Option<SupplierId>,
    pub default_category_id: Option<CategoryId>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Base fields written on create and fully replaced on update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub reference: ProductReference,
    pub name: ProductName,
    pub slug: Slug,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub price_with_vat: Price,
    pub price_without_vat: Price,
    pub cost_price: Option<Price>,
    pub width: Option<Measure>,
    pub height: Option<Measure>,
    pub depth: Option<Measure>,
    pub weight: Option<Measure>,
    pub delivery_time: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub visibility: Visibility,
    pub has_variations: bool,
    pub brand_id: Option<BrandId>,
    pub supplier_id: Option<SupplierId>,
    pub default_category_id: Option<CategoryId>,
    pub is_active: bool,
}

/// Image attached to a product, ordered by `position`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: ProductImageId,
    pub product_id: ProductId,
    pub image_url: ImageUrl,
    pub alt_text: Option<String>,
    pub position: Position,
    pub is_primary: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProductImage {
    pub image_url: ImageUrl,
    pub alt_text: Option<String>,
    pub position: Position,
    pub is_primary: bool,
}

/// Ensures exactly one image of a non-empty set is primary.
///
/// The first image flagged as primary keeps the flag; when none is flagged the
/// first image in the given order becomes primary.
pub fn normalize_primary_image(images: &mut [NewProductImage]) {
    let primary = images.iter().position(|image| image.is_primary).unwrap_or(0);
    for (index, image) in images.iter_mut().enumerate() {
        image.is_primary = index == primary;
    }
}

/// Category membership with the resolved category name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryLink {
    pub category_id: CategoryId,
    pub category_name: Option<String>,
}

/// Feature value of a product with the resolved feature name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFeatureValue {
    pub id: ProductFeatureId,
    pub feature_id: FeatureId,
    pub feature_name: Option<String>,
    pub value: FeatureValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProductFeature {
    pub feature_id: FeatureId,
    pub value: FeatureValue,
}

/// Stock held in a single warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub warehouse_id: WarehouseId,
    pub warehouse_name: Option<String>,
    pub quantity: Quantity,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewStockLevel {
    pub warehouse_id: WarehouseId,
    pub quantity: Quantity,
}

/// One (attribute, value) pair of a variation combination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariationAttribute {
    pub id: VariationAttributeId,
    pub variation_id: VariationId,
    pub attribute_id: AttributeId,
    pub attribute_name: Option<String>,
    pub attribute_value_id: AttributeValueId,
    pub attribute_value: Option<String>,
}

/// A concrete combination of attribute values with its own deltas and stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariation {
    pub id: VariationId,
    pub product_id: ProductId,
    pub reference: VariationReference,
    pub price_impact: Delta,
    pub weight_impact: Delta,
    pub quantity: Quantity,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub attributes: Vec<VariationAttribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVariationAttribute {
    pub attribute_id: AttributeId,
    pub attribute_value_id: AttributeValueId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProductVariation {
    pub reference: VariationReference,
    pub price_impact: Delta,
    pub weight_impact: Delta,
    pub quantity: Quantity,
    pub attributes: Vec<NewVariationAttribute>,
}

/// Replacement sets for the dependent collections of a product.
///
/// `None` leaves the stored collection untouched, `Some(vec![])` clears it and
/// any other value replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRelations {
    pub images: Option<Vec<NewProductImage>>,
    pub category_ids: Option<Vec<CategoryId>>,
    pub features: Option<Vec<NewProductFeature>>,
    pub stock: Option<Vec<NewStockLevel>>,
    pub variations: Option<Vec<NewProductVariation>>,
}

/// Fully assembled product aggregate as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    #[serde(flatten)]
    pub product: Product,
    pub brand_name: Option<String>,
    pub supplier_name: Option<String>,
    pub default_category_name: Option<String>,
    pub images: Vec<ProductImage>,
    pub categories: Vec<ProductCategoryLink>,
    pub features: Vec<ProductFeatureValue>,
    pub stock: Vec<StockLevel>,
    pub total_stock: i64,
    pub variations: Vec<ProductVariation>,
}

impl ProductDetails {
    /// Sum of the quantities held across all warehouses.
    pub fn sum_stock(stock: &[StockLevel]) -> i64 {
        stock.iter().map(|s| i64::from(s.quantity.get())).sum()
    }
}

/// Row of the product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub reference: ProductReference,
    pub name: ProductName,
    pub slug: Slug,
    pub price_with_vat: Price,
    pub price_without_vat: Price,
    pub visibility: Visibility,
    pub has_variations: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub brand_name: Option<String>,
    pub supplier_name: Option<String>,
    pub default_category_name: Option<String>,
    pub primary_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str, is_primary: bool) -> NewProductImage {
        NewProductImage {
            image_url: ImageUrl::new(url).unwrap(),
            alt_text: None,
            position: Position::default(),
            is_primary,
        }
    }

    #[test]
    fn first_image_becomes_primary_when_none_flagged() {
        let mut images = vec![image("a.jpg", false), image("b.jpg", false)];
        normalize_primary_image(&mut images);
        assert!(images[0].is_primary);
        assert!(!images[1].is_primary);
    }

    #[test]
    fn only_first_flagged_image_stays_primary() {
        let mut images = vec![
            image("a.jpg", false),
            image("b.jpg", true),
            image("c.jpg", true),
        ];
        normalize_primary_image(&mut images);
        let flags: Vec<bool> = images.iter().map(|i| i.is_primary).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn normalizing_empty_set_is_a_no_op() {
        let mut images: Vec<NewProductImage> = vec![];
        normalize_primary_image(&mut images);
        assert!(images.is_empty());
    }
}
