use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::{
    NewProduct, Product, ProductCategoryLink, ProductDetails, ProductFeatureValue, ProductImage,
    ProductRelations, ProductSummary, ProductVariation, StockLevel, VariationAttribute,
};
use crate::domain::types::{
    AttributeId, AttributeValueId, CategoryId, FeatureId, FeatureValue, ProductFeatureId,
    ProductId, Quantity, VariationAttributeId, VariationId, WarehouseId,
};
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChangeset as DbProductChangeset,
};
use crate::models::product_image::{
    NewProductImage as DbNewProductImage, ProductImage as DbProductImage,
};
use crate::models::product_relations::{
    NewProductCategory as DbNewProductCategory, NewProductFeature as DbNewProductFeature,
    NewProductStock as DbNewProductStock, NewProductVariation as DbNewProductVariation,
    NewProductVariationAttribute as DbNewProductVariationAttribute,
    ProductFeature as DbProductFeature, ProductStock as DbProductStock,
    ProductVariation as DbProductVariation,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

type ProductWithNames = (DbProduct, Option<String>, Option<String>, Option<String>);

type VariationAttributeRow = (i32, i32, i32, Option<String>, i32, Option<String>);

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<ProductSummary>> {
        use crate::schema::{brands, categories, product_images, products, suppliers};

        let mut conn = self.conn()?;

        let rows: Vec<ProductWithNames> = products::table
            .left_join(brands::table.on(products::brand_id.eq(brands::id.nullable())))
            .left_join(suppliers::table.on(products::supplier_id.eq(suppliers::id.nullable())))
            .left_join(
                categories::table.on(products::default_category_id.eq(categories::id.nullable())),
            )
            .select((
                DbProduct::as_select(),
                brands::name.nullable(),
                suppliers::name.nullable(),
                categories::name.nullable(),
            ))
            .order((products::created_at.desc(), products::id.desc()))
            .load(&mut conn)?;

        let ids: Vec<i32> = rows.iter().map(|(product, ..)| product.id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // Primary image first, otherwise the lowest position wins.
        let images: Vec<(i32, String)> = product_images::table
            .filter(product_images::product_id.eq_any(ids))
            .select((product_images::product_id, product_images::image_url))
            .order((
                product_images::product_id.asc(),
                product_images::is_primary.desc(),
                product_images::position.asc(),
                product_images::id.asc(),
            ))
            .load(&mut conn)?;

        let mut primary_images: HashMap<i32, String> = HashMap::new();
        for (product_id, url) in images {
            primary_images.entry(product_id).or_insert(url);
        }

        rows.into_iter()
            .map(|(product, brand_name, supplier_name, category_name)| -> RepositoryResult<_> {
                let primary_image = primary_images.remove(&product.id);
                let product: Product = product.try_into()?;
                Ok(ProductSummary {
                    id: product.id,
                    reference: product.reference,
                    name: product.name,
                    slug: product.slug,
                    price_with_vat: product.price_with_vat,
                    price_without_vat: product.price_without_vat,
                    visibility: product.visibility,
                    has_variations: product.has_variations,
                    is_active: product.is_active,
                    created_at: product.created_at,
                    updated_at: product.updated_at,
                    brand_name,
                    supplier_name,
                    default_category_name: category_name,
                    primary_image,
                })
            })
            .collect()
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id.get())
            .select(DbProduct::as_select())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }

    fn get_product_details(&self, id: ProductId) -> RepositoryResult<Option<ProductDetails>> {
        use crate::schema::{brands, categories, products, suppliers};

        let mut conn = self.conn()?;

        let row: Option<ProductWithNames> = products::table
            .left_join(brands::table.on(products::brand_id.eq(brands::id.nullable())))
            .left_join(suppliers::table.on(products::supplier_id.eq(suppliers::id.nullable())))
            .left_join(
                categories::table.on(products::default_category_id.eq(categories::id.nullable())),
            )
            .filter(products::id.eq(id.get()))
            .select((
                DbProduct::as_select(),
                brands::name.nullable(),
                suppliers::name.nullable(),
                categories::name.nullable(),
            ))
            .first(&mut conn)
            .optional()?;

        let Some((product, brand_name, supplier_name, default_category_name)) = row else {
            return Ok(None);
        };

        let product: Product = product.try_into()?;
        let images = load_images(&mut conn, id.get())?;
        let categories = load_category_links(&mut conn, id.get())?;
        let features = load_features(&mut conn, id.get())?;
        let stock = load_stock(&mut conn, id.get())?;
        let variations = load_variations(&mut conn, id.get())?;
        let total_stock = ProductDetails::sum_stock(&stock);

        Ok(Some(ProductDetails {
            product,
            brand_name,
            supplier_name,
            default_category_name,
            images,
            categories,
            features,
            stock,
            total_stock,
            variations,
        }))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(
        &self,
        product: &NewProduct,
        relations: &ProductRelations,
    ) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        let row = DbNewProduct::from_domain(product.clone(), now);

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(products::table)
                .values(&row)
                .returning(DbProduct::as_returning())
                .get_result::<DbProduct>(conn)?;

            write_relations(conn, created.id, relations, now)?;
            Ok(created)
        })?;

        Ok(created.try_into()?)
    }

    fn update_product(
        &self,
        id: ProductId,
        product: &NewProduct,
        relations: &ProductRelations,
    ) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        let changeset = DbProductChangeset::from_domain(product.clone(), now);

        let updated = conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(products::table.find(id.get()))
                .set(&changeset)
                .returning(DbProduct::as_returning())
                .get_result::<DbProduct>(conn)
                .optional()?;

            let Some(updated) = updated else {
                return Ok(None);
            };

            clear_relations(conn, id.get(), relations)?;
            write_relations(conn, id.get(), relations, now)?;
            Ok(Some(updated))
        })?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::delete(products::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}

/// Deletes every stored collection that `relations` is about to replace.
fn clear_relations(
    conn: &mut SqliteConnection,
    product_id: i32,
    relations: &ProductRelations,
) -> RepositoryResult<()> {
    use crate::schema::{
        product_categories, product_features, product_images, product_stock, product_variations,
    };

    if relations.images.is_some() {
        diesel::delete(product_images::table.filter(product_images::product_id.eq(product_id)))
            .execute(conn)?;
    }
    if relations.category_ids.is_some() {
        diesel::delete(
            product_categories::table.filter(product_categories::product_id.eq(product_id)),
        )
        .execute(conn)?;
    }
    if relations.features.is_some() {
        diesel::delete(product_features::table.filter(product_features::product_id.eq(product_id)))
            .execute(conn)?;
    }
    if relations.stock.is_some() {
        diesel::delete(product_stock::table.filter(product_stock::product_id.eq(product_id)))
            .execute(conn)?;
    }
    if relations.variations.is_some() {
        // Variation attribute rows go with their variation through the cascade.
        diesel::delete(
            product_variations::table.filter(product_variations::product_id.eq(product_id)),
        )
        .execute(conn)?;
    }
    Ok(())
}

/// Inserts every non-empty collection of `relations` for `product_id`.
fn write_relations(
    conn: &mut SqliteConnection,
    product_id: i32,
    relations: &ProductRelations,
    now: NaiveDateTime,
) -> RepositoryResult<()> {
    use crate::schema::{
        product_categories, product_features, product_images, product_stock,
        product_variation_attributes, product_variations,
    };

    if let Some(images) = relations.images.as_deref().filter(|i| !i.is_empty()) {
        let rows: Vec<DbNewProductImage> = images
            .iter()
            .map(|image| DbNewProductImage::from_domain(product_id, image, now))
            .collect();
        diesel::insert_into(product_images::table)
            .values(&rows)
            .execute(conn)?;
    }

    if let Some(category_ids) = relations.category_ids.as_deref().filter(|c| !c.is_empty()) {
        let rows: Vec<DbNewProductCategory> = category_ids
            .iter()
            .map(|category_id| DbNewProductCategory {
                product_id,
                category_id: category_id.get(),
            })
            .collect();
        diesel::insert_into(product_categories::table)
            .values(&rows)
            .execute(conn)?;
    }

    if let Some(features) = relations.features.as_deref().filter(|f| !f.is_empty()) {
        let rows: Vec<DbNewProductFeature> = features
            .iter()
            .map(|feature| DbNewProductFeature::from_domain(product_id, feature))
            .collect();
        diesel::insert_into(product_features::table)
            .values(&rows)
            .execute(conn)?;
    }

    if let Some(stock) = relations.stock.as_deref().filter(|s| !s.is_empty()) {
        let rows: Vec<DbNewProductStock> = stock
            .iter()
            .map(|level| DbNewProductStock::from_domain(product_id, level, now))
            .collect();
        diesel::insert_into(product_stock::table)
            .values(&rows)
            .execute(conn)?;
    }

    if let Some(variations) = relations.variations.as_deref().filter(|v| !v.is_empty()) {
        for variation in variations {
            for selection in &variation.attributes {
                ensure_value_belongs_to_attribute(
                    conn,
                    selection.attribute_id.get(),
                    selection.attribute_value_id.get(),
                )?;
            }

            let row = DbNewProductVariation::from_domain(product_id, variation, now);
            let variation_id = diesel::insert_into(product_variations::table)
                .values(&row)
                .returning(product_variations::id)
                .get_result::<i32>(conn)?;

            if variation.attributes.is_empty() {
                continue;
            }

            let rows: Vec<DbNewProductVariationAttribute> = variation
                .attributes
                .iter()
                .map(|selection| DbNewProductVariationAttribute::from_domain(variation_id, selection))
                .collect();
            diesel::insert_into(product_variation_attributes::table)
                .values(&rows)
                .execute(conn)?;
        }
    }

    Ok(())
}

fn ensure_value_belongs_to_attribute(
    conn: &mut SqliteConnection,
    attribute_id: i32,
    attribute_value_id: i32,
) -> RepositoryResult<()> {
    use crate::schema::attribute_values;

    let owner = attribute_values::table
        .find(attribute_value_id)
        .select(attribute_values::attribute_id)
        .first::<i32>(conn)
        .optional()?;

    match owner {
        Some(owner) if owner == attribute_id => Ok(()),
        Some(_) => Err(RepositoryError::ValidationError(format!(
            "attribute value {attribute_value_id} does not belong to attribute {attribute_id}"
        ))),
        None => Err(RepositoryError::ValidationError(format!(
            "attribute value {attribute_value_id} does not exist"
        ))),
    }
}

fn load_images(conn: &mut SqliteConnection, product_id: i32) -> RepositoryResult<Vec<ProductImage>> {
    use crate::schema::product_images;

    let images = product_images::table
        .filter(product_images::product_id.eq(product_id))
        .select(DbProductImage::as_select())
        .order((product_images::position.asc(), product_images::id.asc()))
        .load::<DbProductImage>(conn)?
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<ProductImage>, _>>()?;

    Ok(images)
}

fn load_category_links(
    conn: &mut SqliteConnection,
    product_id: i32,
) -> RepositoryResult<Vec<ProductCategoryLink>> {
    use crate::schema::{categories, product_categories};

    let rows: Vec<(i32, Option<String>)> = product_categories::table
        .left_join(categories::table.on(product_categories::category_id.eq(categories::id)))
        .filter(product_categories::product_id.eq(product_id))
        .select((product_categories::category_id, categories::name.nullable()))
        .order(product_categories::category_id.asc())
        .load(conn)?;

    rows.into_iter()
        .map(|(category_id, category_name)| -> RepositoryResult<_> {
            Ok(ProductCategoryLink {
                category_id: CategoryId::new(category_id)?,
                category_name,
            })
        })
        .collect()
}

fn load_features(
    conn: &mut SqliteConnection,
    product_id: i32,
) -> RepositoryResult<Vec<ProductFeatureValue>> {
    use crate::schema::{features, product_features};

    let rows: Vec<(DbProductFeature, Option<String>)> = product_features::table
        .left_join(features::table.on(product_features::feature_id.eq(features::id)))
        .filter(product_features::product_id.eq(product_id))
        .select((DbProductFeature::as_select(), features::name.nullable()))
        .order((features::position.asc(), product_features::id.asc()))
        .load(conn)?;

    rows.into_iter()
        .map(|(row, feature_name)| -> RepositoryResult<_> {
            Ok(ProductFeatureValue {
                id: ProductFeatureId::new(row.id)?,
                feature_id: FeatureId::new(row.feature_id)?,
                feature_name,
                value: FeatureValue::new(row.value)?,
            })
        })
        .collect()
}

fn load_stock(conn: &mut SqliteConnection, product_id: i32) -> RepositoryResult<Vec<StockLevel>> {
    use crate::schema::{product_stock, warehouses};

    let rows: Vec<(DbProductStock, Option<String>)> = product_stock::table
        .left_join(warehouses::table.on(product_stock::warehouse_id.eq(warehouses::id)))
        .filter(product_stock::product_id.eq(product_id))
        .select((DbProductStock::as_select(), warehouses::name.nullable()))
        .order(product_stock::warehouse_id.asc())
        .load(conn)?;

    rows.into_iter()
        .map(|(row, warehouse_name)| -> RepositoryResult<_> {
            Ok(StockLevel {
                warehouse_id: WarehouseId::new(row.warehouse_id)?,
                warehouse_name,
                quantity: Quantity::new(row.quantity)?,
                updated_at: row.updated_at,
            })
        })
        .collect()
}

/// Loads variations and attaches their attribute selections fetched with a
/// single joined query.
fn load_variations(
    conn: &mut SqliteConnection,
    product_id: i32,
) -> RepositoryResult<Vec<ProductVariation>> {
    use crate::schema::{
        attribute_values, attributes, product_variation_attributes, product_variations,
    };

    let mut variations = product_variations::table
        .filter(product_variations::product_id.eq(product_id))
        .select(DbProductVariation::as_select())
        .order(product_variations::id.asc())
        .load::<DbProductVariation>(conn)?
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<ProductVariation>, _>>()?;

    if variations.is_empty() {
        return Ok(variations);
    }

    let rows: Vec<VariationAttributeRow> = product_variation_attributes::table
        .inner_join(
            product_variations::table
                .on(product_variation_attributes::variation_id.eq(product_variations::id)),
        )
        .left_join(
            attributes::table.on(product_variation_attributes::attribute_id.eq(attributes::id)),
        )
        .left_join(
            attribute_values::table
                .on(product_variation_attributes::attribute_value_id.eq(attribute_values::id)),
        )
        .filter(product_variations::product_id.eq(product_id))
        .select((
            product_variation_attributes::id,
            product_variation_attributes::variation_id,
            product_variation_attributes::attribute_id,
            attributes::name.nullable(),
            product_variation_attributes::attribute_value_id,
            attribute_values::value.nullable(),
        ))
        .order((
            product_variation_attributes::variation_id.asc(),
            product_variation_attributes::id.asc(),
        ))
        .load(conn)?;

    let mut grouped: HashMap<i32, Vec<VariationAttribute>> = HashMap::new();
    for (id, variation_id, attribute_id, attribute_name, attribute_value_id, attribute_value) in
        rows
    {
        grouped
            .entry(variation_id)
            .or_default()
            .push(VariationAttribute {
                id: VariationAttributeId::new(id)?,
                variation_id: VariationId::new(variation_id)?,
                attribute_id: AttributeId::new(attribute_id)?,
                attribute_name,
                attribute_value_id: AttributeValueId::new(attribute_value_id)?,
                attribute_value,
            });
    }

    for variation in &mut variations {
        if let Some(attributes) = grouped.remove(&variation.id.get()) {
            variation.attributes = attributes;
        }
    }

    Ok(variations)
}
