use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{
    NewProduct, NewProductFeature, NewProductImage, NewProductVariation, NewStockLevel,
    NewVariationAttribute, ProductRelations, normalize_primary_image,
};
use crate::domain::types::{
    AttributeId, AttributeValueId, BrandId, CategoryId, Delta, FeatureId, FeatureValue, ImageUrl,
    Measure, Position, Price, ProductName, ProductReference, Quantity, Slug, SupplierId,
    TypeConstraintError, VariationReference, Visibility, WarehouseId,
};
use crate::forms::{DecimalInput, non_blank, optional_decimal, optional_reference};

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// Collections that are absent (or `null`) leave stored rows untouched on
/// update; an empty array clears them.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[validate(length(max = 64))]
    pub reference: Option<String>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub price_with_vat: Option<DecimalInput>,
    pub price_without_vat: Option<DecimalInput>,
    pub cost_price: Option<DecimalInput>,
    pub width: Option<DecimalInput>,
    pub height: Option<DecimalInput>,
    pub depth: Option<DecimalInput>,
    pub weight: Option<DecimalInput>,
    pub delivery_time: Option<String>,
    #[validate(length(max = 255))]
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub visibility: Option<String>,
    pub has_variations: Option<bool>,
    pub brand_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub default_category_id: Option<i32>,
    pub is_active: Option<bool>,
    pub images: Option<Vec<ProductImageForm>>,
    pub category_ids: Option<Vec<i32>>,
    pub features: Option<Vec<ProductFeatureForm>>,
    pub stock_by_warehouse: Option<Vec<StockForm>>,
    pub variations: Option<Vec<VariationForm>>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductImageForm {
    #[validate(length(min = 1))]
    pub image_url: String,
    pub alt_text: Option<String>,
    pub position: Option<i32>,
    pub is_primary: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFeatureForm {
    pub feature_id: i32,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockForm {
    pub warehouse_id: i32,
    #[serde(default)]
    pub quantity: i32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VariationForm {
    #[validate(length(min = 1, max = 64))]
    pub reference: String,
    pub price_impact: Option<DecimalInput>,
    pub weight_impact: Option<DecimalInput>,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub attributes: Vec<VariationAttributeForm>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationAttributeForm {
    pub attribute_id: i32,
    pub attribute_value_id: i32,
}

/// Validated product write: base fields plus collection replacements.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormPayload {
    pub product: NewProduct,
    pub relations: ProductRelations,
}

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("Product form validation failed: {0}")]
    Validation(String),
    #[error("Product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn required_price(value: Option<DecimalInput>) -> Result<Price, TypeConstraintError> {
    Price::new(value.map(DecimalInput::into_literal).unwrap_or_default())
}

fn delta_or_zero(value: Option<DecimalInput>) -> Result<Delta, TypeConstraintError> {
    match optional_decimal(value, Delta::new)? {
        Some(delta) => Ok(delta),
        None => Delta::new("0"),
    }
}

fn images_payload(
    images: Vec<ProductImageForm>,
) -> Result<Vec<NewProductImage>, ProductFormError> {
    let mut result = Vec::with_capacity(images.len());
    for (index, image) in images.into_iter().enumerate() {
        image.validate()?;
        let position = match image.position {
            Some(position) => position,
            None => i32::try_from(index)
                .map_err(|_| TypeConstraintError::InvalidValue("too many images".to_string()))?,
        };
        result.push(NewProductImage {
            image_url: ImageUrl::new(image.image_url)?,
            alt_text: non_blank(image.alt_text),
            position: Position::new(position)?,
            is_primary: image.is_primary.unwrap_or(false),
        });
    }
    normalize_primary_image(&mut result);
    Ok(result)
}

/// Drops repeated ids, keeping the first occurrence.
fn category_ids_payload(ids: Vec<i32>) -> Result<Vec<CategoryId>, ProductFormError> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(ids.len());
    for id in ids {
        let id = CategoryId::new(id)?;
        if seen.insert(id) {
            result.push(id);
        }
    }
    Ok(result)
}

fn features_payload(
    features: Vec<ProductFeatureForm>,
) -> Result<Vec<NewProductFeature>, ProductFormError> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(features.len());
    for feature in features {
        let feature_id = FeatureId::new(feature.feature_id)?;
        if !seen.insert(feature_id) {
            return Err(ProductFormError::Validation(format!(
                "feature {feature_id} is listed more than once"
            )));
        }
        result.push(NewProductFeature {
            feature_id,
            value: FeatureValue::new(feature.value)?,
        });
    }
    Ok(result)
}

fn stock_payload(stock: Vec<StockForm>) -> Result<Vec<NewStockLevel>, ProductFormError> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(stock.len());
    for level in stock {
        let warehouse_id = WarehouseId::new(level.warehouse_id)?;
        if !seen.insert(warehouse_id) {
            return Err(ProductFormError::Validation(format!(
                "warehouse {warehouse_id} is listed more than once"
            )));
        }
        result.push(NewStockLevel {
            warehouse_id,
            quantity: Quantity::new(level.quantity)?,
        });
    }
    Ok(result)
}

fn variations_payload(
    variations: Vec<VariationForm>,
) -> Result<Vec<NewProductVariation>, ProductFormError> {
    let mut result = Vec::with_capacity(variations.len());
    for variation in variations {
        variation.validate()?;

        let mut attributes = Vec::with_capacity(variation.attributes.len());
        let mut seen = HashSet::new();
        for selection in variation.attributes {
            let attribute_id = AttributeId::new(selection.attribute_id)?;
            if !seen.insert(attribute_id) {
                return Err(ProductFormError::Validation(format!(
                    "attribute {attribute_id} is selected more than once in variation {}",
                    variation.reference
                )));
            }
            attributes.push(NewVariationAttribute {
                attribute_id,
                attribute_value_id: AttributeValueId::new(selection.attribute_value_id)?,
            });
        }

        result.push(NewProductVariation {
            reference: VariationReference::new(variation.reference)?,
            price_impact: delta_or_zero(variation.price_impact)?,
            weight_impact: delta_or_zero(variation.weight_impact)?,
            quantity: Quantity::new(variation.quantity)?,
            attributes,
        });
    }
    Ok(result)
}

impl TryFrom<ProductForm> for ProductFormPayload {
    type Error = ProductFormError;

    fn try_from(value: ProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let visibility = match non_blank(value.visibility) {
            Some(visibility) => Visibility::try_from(visibility)?,
            None => Visibility::default(),
        };

        let product = NewProduct {
            reference: ProductReference::new(value.reference.unwrap_or_default())?,
            name: ProductName::new(value.name.unwrap_or_default())?,
            slug: Slug::new(value.slug.unwrap_or_default())?,
            short_description: non_blank(value.short_description),
            long_description: non_blank(value.long_description),
            price_with_vat: required_price(value.price_with_vat)?,
            price_without_vat: required_price(value.price_without_vat)?,
            cost_price: optional_decimal(value.cost_price, Price::new)?,
            width: optional_decimal(value.width, Measure::new)?,
            height: optional_decimal(value.height, Measure::new)?,
            depth: optional_decimal(value.depth, Measure::new)?,
            weight: optional_decimal(value.weight, Measure::new)?,
            delivery_time: non_blank(value.delivery_time),
            meta_title: non_blank(value.meta_title),
            meta_description: non_blank(value.meta_description),
            canonical_url: non_blank(value.canonical_url),
            visibility,
            has_variations: value.has_variations.unwrap_or(false),
            brand_id: optional_reference(value.brand_id, "brand_id", BrandId::new)?,
            supplier_id: optional_reference(value.supplier_id, "supplier_id", SupplierId::new)?,
            default_category_id: optional_reference(
                value.default_category_id,
                "default_category_id",
                CategoryId::new,
            )?,
            is_active: value.is_active.unwrap_or(true),
        };

        let relations = ProductRelations {
            images: value.images.map(images_payload).transpose()?,
            category_ids: value.category_ids.map(category_ids_payload).transpose()?,
            features: value.features.map(features_payload).transpose()?,
            stock: value.stock_by_warehouse.map(stock_payload).transpose()?,
            variations: value.variations.map(variations_payload).transpose()?,
        };

        Ok(Self { product, relations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> ProductForm {
        serde_json::from_value(serde_json::json!({
            "reference": "SKU-1",
            "name": "Lamp",
            "slug": "lamp",
            "priceWithVat": "120.00",
            "priceWithoutVat": 100
        }))
        .unwrap()
    }

    #[test]
    fn minimal_form_applies_defaults() {
        let payload = ProductFormPayload::try_from(lamp()).unwrap();
        assert_eq!(payload.product.reference, "SKU-1");
        assert_eq!(payload.product.price_with_vat, "120.00");
        assert_eq!(payload.product.price_without_vat, "100");
        assert_eq!(payload.product.visibility, Visibility::Visible);
        assert!(payload.product.is_active);
        assert!(!payload.product.has_variations);
        assert_eq!(payload.relations, ProductRelations::default());
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let mut form = lamp();
        form.slug = Some("   ".to_string());
        assert!(matches!(
            ProductFormPayload::try_from(form),
            Err(ProductFormError::TypeConstraint(_))
        ));

        let mut form = lamp();
        form.price_with_vat = None;
        assert!(ProductFormPayload::try_from(form).is_err());
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let form: ProductForm = serde_json::from_value(serde_json::json!({
            "reference": "SKU-1",
            "name": "Lamp",
            "slug": "lamp",
            "priceWithVat": "120.00",
            "priceWithoutVat": "100.00",
            "shortDescription": "",
            "costPrice": "",
            "brandId": 0
        }))
        .unwrap();
        let payload = ProductFormPayload::try_from(form).unwrap();
        assert_eq!(payload.product.short_description, None);
        assert_eq!(payload.product.cost_price, None);
        assert_eq!(payload.product.brand_id, None);
    }

    #[test]
    fn json_numbers_keep_their_exact_digits() {
        let form: ProductForm = serde_json::from_str(
            r#"{
                "reference": "SKU-1",
                "name": "Lamp",
                "slug": "lamp",
                "priceWithVat": 1234567.123456789012345,
                "priceWithoutVat": 0.30000000000000000001,
                "costPrice": 12345678901234567.89,
                "weight": 1.5e-7
            }"#,
        )
        .unwrap();
        let payload = ProductFormPayload::try_from(form).unwrap();
        assert_eq!(payload.product.price_with_vat, "1234567.123456789012345");
        assert_eq!(payload.product.price_without_vat, "0.30000000000000000001");
        assert_eq!(
            payload.product.cost_price,
            Some(Price::new("12345678901234567.89").unwrap())
        );
        assert_eq!(payload.product.weight, Some(Measure::new("0.00000015").unwrap()));
    }

    #[test]
    fn null_collections_are_treated_as_omitted() {
        let form: ProductForm = serde_json::from_value(serde_json::json!({
            "reference": "SKU-1",
            "name": "Lamp",
            "slug": "lamp",
            "priceWithVat": "120.00",
            "priceWithoutVat": "100.00",
            "images": null,
            "categoryIds": []
        }))
        .unwrap();
        let payload = ProductFormPayload::try_from(form).unwrap();
        assert_eq!(payload.relations.images, None);
        assert_eq!(payload.relations.category_ids, Some(vec![]));
    }

    #[test]
    fn images_get_index_positions_and_a_primary() {
        let form: ProductForm = serde_json::from_value(serde_json::json!({
            "reference": "SKU-1",
            "name": "Lamp",
            "slug": "lamp",
            "priceWithVat": "120.00",
            "priceWithoutVat": "100.00",
            "images": [
                { "imageUrl": "a.jpg" },
                { "imageUrl": "b.jpg", "position": 7 }
            ]
        }))
        .unwrap();
        let images = ProductFormPayload::try_from(form)
            .unwrap()
            .relations
            .images
            .unwrap();
        assert_eq!(images[0].position, 0);
        assert_eq!(images[1].position, 7);
        assert!(images[0].is_primary);
        assert!(!images[1].is_primary);
    }

    #[test]
    fn duplicate_category_ids_are_collapsed() {
        let mut form = lamp();
        form.category_ids = Some(vec![3, 1, 3]);
        let payload = ProductFormPayload::try_from(form).unwrap();
        let ids: Vec<i32> = payload
            .relations
            .category_ids
            .unwrap()
            .into_iter()
            .map(|id| id.get())
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn duplicate_warehouses_are_rejected() {
        let mut form = lamp();
        form.stock_by_warehouse = Some(vec![
            StockForm {
                warehouse_id: 1,
                quantity: 2,
            },
            StockForm {
                warehouse_id: 1,
                quantity: 5,
            },
        ]);
        assert!(matches!(
            ProductFormPayload::try_from(form),
            Err(ProductFormError::Validation(_))
        ));
    }

    #[test]
    fn duplicate_features_are_rejected() {
        let mut form = lamp();
        form.features = Some(vec![
            ProductFeatureForm {
                feature_id: 4,
                value: "Steel".into(),
            },
            ProductFeatureForm {
                feature_id: 4,
                value: "Wood".into(),
            },
        ]);
        assert!(ProductFormPayload::try_from(form).is_err());
    }

    #[test]
    fn negative_stock_is_rejected() {
        let mut form = lamp();
        form.stock_by_warehouse = Some(vec![StockForm {
            warehouse_id: 1,
            quantity: -1,
        }]);
        assert!(ProductFormPayload::try_from(form).is_err());
    }

    #[test]
    fn variation_impacts_default_to_zero() {
        let form: ProductForm = serde_json::from_value(serde_json::json!({
            "reference": "SKU-1",
            "name": "Lamp",
            "slug": "lamp",
            "priceWithVat": "120.00",
            "priceWithoutVat": "100.00",
            "variations": [{
                "reference": "SKU-1-RED",
                "priceImpact": "-5.50",
                "quantity": 3,
                "attributes": [{ "attributeId": 1, "attributeValueId": 2 }]
            }]
        }))
        .unwrap();
        let variations = ProductFormPayload::try_from(form)
            .unwrap()
            .relations
            .variations
            .unwrap();
        assert_eq!(variations[0].price_impact, "-5.50");
        assert_eq!(variations[0].weight_impact, "0");
        assert_eq!(variations[0].attributes.len(), 1);
    }

    #[test]
    fn invalid_visibility_is_rejected() {
        let mut form = lamp();
        form.visibility = Some("secret".into());
        assert!(ProductFormPayload::try_from(form).is_err());
    }
}
