use catalog_admin::domain::product::Product;
use catalog_admin::domain::types::{AttributeId, CategoryId, ProductId};
use catalog_admin::forms::attributes::{AttributeForm, AttributeFormPayload};
use catalog_admin::forms::brands::{BrandForm, BrandFormPayload};
use catalog_admin::forms::categories::{CategoryForm, CategoryFormPayload};
use catalog_admin::forms::features::{FeatureForm, FeatureFormPayload};
use catalog_admin::forms::products::{ProductForm, ProductFormPayload};
use catalog_admin::forms::warehouses::{WarehouseForm, WarehouseFormPayload};
use catalog_admin::repository::errors::RepositoryError;
use catalog_admin::repository::{
    AttributeReader, AttributeWriter, BrandWriter, CategoryReader, CategoryWriter,
    DieselRepository, FeatureWriter, ProductReader, ProductWriter, WarehouseWriter,
};
use catalog_admin::schema::{
    product_categories, product_features, product_images, product_stock,
    product_variation_attributes, product_variations, products,
};
use diesel::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

mod common;

/// Parses `body` as form `F` and converts it into payload `P`.
fn payload<F, P>(body: Value) -> P
where
    F: DeserializeOwned,
    P: TryFrom<F>,
    P::Error: std::fmt::Debug,
{
    let form: F = serde_json::from_value(body).expect("form should deserialize");
    P::try_from(form).expect("form should be valid")
}

fn product_body() -> Value {
    json!({
        "reference": "SKU-1",
        "name": "Lamp",
        "slug": "lamp",
        "priceWithVat": "120.00",
        "priceWithoutVat": "100.00"
    })
}

fn with(mut body: Value, key: &str, value: Value) -> Value {
    body[key] = value;
    body
}

fn create_product(repo: &DieselRepository, body: Value) -> Product {
    let payload: ProductFormPayload = payload::<ProductForm, _>(body);
    repo.create_product(&payload.product, &payload.relations)
        .expect("should create product")
}

fn create_category(repo: &DieselRepository, name: &str, slug: &str, parent: Option<i32>) -> i32 {
    let payload: CategoryFormPayload =
        payload::<CategoryForm, _>(json!({ "name": name, "slug": slug, "parentId": parent }));
    repo.create_category(&payload.category)
        .expect("should create category")
        .id
        .get()
}

fn create_warehouse(repo: &DieselRepository, name: &str) -> i32 {
    let payload: WarehouseFormPayload = payload::<WarehouseForm, _>(json!({ "name": name }));
    repo.create_warehouse(&payload.warehouse)
        .expect("should create warehouse")
        .id
        .get()
}

fn create_feature(repo: &DieselRepository, name: &str) -> i32 {
    let payload: FeatureFormPayload = payload::<FeatureForm, _>(json!({ "name": name }));
    repo.create_feature(&payload.feature)
        .expect("should create feature")
        .id
        .get()
}

/// Creates an attribute and returns its id with the ids of its values.
fn create_attribute(repo: &DieselRepository, name: &str, values: &[&str]) -> (i32, Vec<i32>) {
    let values: Vec<Value> = values.iter().map(|v| json!({ "value": v })).collect();
    let payload: AttributeFormPayload =
        payload::<AttributeForm, _>(json!({ "name": name, "type": "select", "values": values }));
    let created = repo
        .create_attribute(&payload.attribute, &payload.values.unwrap_or_default())
        .expect("should create attribute");
    (
        created.attribute.id.get(),
        created.values.iter().map(|v| v.id.get()).collect(),
    )
}

macro_rules! count_rows {
    ($test_db:expr, $table:expr) => {{
        let mut conn = $test_db.pool().get().expect("connection");
        $table.count().get_result::<i64>(&mut conn).expect("count")
    }};
}

#[test]
fn created_product_without_collections_has_empty_aggregate() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let product = create_product(&repo, product_body());
    assert_eq!(product.price_with_vat.as_str(), "120.00");

    let details = repo
        .get_product_details(product.id)
        .expect("should load details")
        .expect("product should exist");
    assert_eq!(details.product, product);
    assert!(details.images.is_empty());
    assert!(details.categories.is_empty());
    assert!(details.features.is_empty());
    assert!(details.stock.is_empty());
    assert!(details.variations.is_empty());
    assert_eq!(details.total_stock, 0);
}

#[test]
fn update_replaces_collections_instead_of_appending() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let category_id = create_category(&repo, "Lamps", "lamps", None);
    let warehouse_id = create_warehouse(&repo, "Main");
    let feature_id = create_feature(&repo, "Material");
    let product = create_product(&repo, product_body());

    let body = with(
        with(
            with(
                with(
                    product_body(),
                    "images",
                    json!([
                        { "imageUrl": "https://cdn.example.com/a.jpg" },
                        { "imageUrl": "https://cdn.example.com/b.jpg" }
                    ]),
                ),
                "categoryIds",
                json!([category_id]),
            ),
            "features",
            json!([{ "featureId": feature_id, "value": "Brass" }]),
        ),
        "stockByWarehouse",
        json!([{ "warehouseId": warehouse_id, "quantity": 7 }]),
    );

    for _ in 0..2 {
        let payload: ProductFormPayload = payload::<ProductForm, _>(body.clone());
        repo.update_product(product.id, &payload.product, &payload.relations)
            .expect("should update")
            .expect("product should exist");
    }

    let details = repo
        .get_product_details(product.id)
        .expect("should load details")
        .expect("product should exist");
    assert_eq!(details.images.len(), 2);
    assert!(details.images[0].is_primary);
    assert!(!details.images[1].is_primary);
    assert_eq!(details.categories.len(), 1);
    assert_eq!(details.categories[0].category_name.as_deref(), Some("Lamps"));
    assert_eq!(details.features.len(), 1);
    assert_eq!(details.features[0].value.as_str(), "Brass");
    assert_eq!(details.stock.len(), 1);
    assert_eq!(details.total_stock, 7);
}

#[test]
fn absent_collections_are_left_untouched_on_update() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let category_id = create_category(&repo, "Lamps", "lamps", None);
    let product = create_product(
        &repo,
        with(product_body(), "categoryIds", json!([category_id])),
    );

    let payload: ProductFormPayload =
        payload::<ProductForm, _>(with(product_body(), "name", json!("Desk lamp")));
    let updated = repo
        .update_product(product.id, &payload.product, &payload.relations)
        .expect("should update")
        .expect("product should exist");
    assert_eq!(updated.name.as_str(), "Desk lamp");

    let details = repo
        .get_product_details(product.id)
        .expect("should load details")
        .expect("product should exist");
    assert_eq!(details.categories.len(), 1);
}

#[test]
fn update_of_missing_product_writes_nothing() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let payload: ProductFormPayload = payload::<ProductForm, _>(with(
        product_body(),
        "images",
        json!([{ "imageUrl": "https://cdn.example.com/a.jpg" }]),
    ));
    let result = repo
        .update_product(
            ProductId::new(42).unwrap(),
            &payload.product,
            &payload.relations,
        )
        .expect("should not fail");
    assert!(result.is_none());
    assert_eq!(count_rows!(test_db, product_images::table), 0);
}

#[test]
fn delete_removes_every_dependent_row() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let category_id = create_category(&repo, "Lamps", "lamps", None);
    let warehouse_id = create_warehouse(&repo, "Main");
    let feature_id = create_feature(&repo, "Material");
    let (size_id, size_values) = create_attribute(&repo, "Size", &["S", "M"]);

    let body = json!({
        "reference": "SKU-1",
        "name": "Lamp",
        "slug": "lamp",
        "priceWithVat": "120.00",
        "priceWithoutVat": "100.00",
        "images": [{ "imageUrl": "https://cdn.example.com/a.jpg", "isPrimary": true }],
        "categoryIds": [category_id],
        "features": [{ "featureId": feature_id, "value": "Brass" }],
        "stockByWarehouse": [{ "warehouseId": warehouse_id, "quantity": 3 }],
        "variations": [{
            "reference": "SKU-1-S",
            "priceImpact": "-5.00",
            "attributes": [{ "attributeId": size_id, "attributeValueId": size_values[0] }]
        }]
    });
    let product = create_product(&repo, body);

    let details = repo
        .get_product_details(product.id)
        .expect("should load details")
        .expect("product should exist");
    assert_eq!(details.variations.len(), 1);
    assert_eq!(details.variations[0].attributes.len(), 1);
    assert_eq!(
        details.variations[0].attributes[0].attribute_value.as_deref(),
        Some("S")
    );
    assert_eq!(details.variations[0].weight_impact.as_str(), "0");

    assert_eq!(repo.delete_product(product.id).expect("should delete"), 1);
    assert!(
        repo.get_product_details(product.id)
            .expect("should query")
            .is_none()
    );
    assert_eq!(count_rows!(test_db, product_images::table), 0);
    assert_eq!(count_rows!(test_db, product_categories::table), 0);
    assert_eq!(count_rows!(test_db, product_features::table), 0);
    assert_eq!(count_rows!(test_db, product_stock::table), 0);
    assert_eq!(count_rows!(test_db, product_variations::table), 0);
    assert_eq!(count_rows!(test_db, product_variation_attributes::table), 0);

    assert_eq!(repo.delete_product(product.id).expect("should delete"), 0);
}

#[test]
fn failed_relation_write_rolls_back_the_product() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let payload: ProductFormPayload = payload::<ProductForm, _>(with(
        with(
            product_body(),
            "images",
            json!([{ "imageUrl": "https://cdn.example.com/a.jpg" }]),
        ),
        "categoryIds",
        json!([999]),
    ));
    let result = repo.create_product(&payload.product, &payload.relations);
    assert!(result.is_err());

    assert!(repo.list_products().expect("should list").is_empty());
    assert_eq!(count_rows!(test_db, product_images::table), 0);
}

#[test]
fn variation_value_of_another_attribute_is_rejected() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let (size_id, _) = create_attribute(&repo, "Size", &["S"]);
    let (_, colour_values) = create_attribute(&repo, "Colour", &["Red"]);

    let payload: ProductFormPayload = payload::<ProductForm, _>(with(
        product_body(),
        "variations",
        json!([{
            "reference": "SKU-1-RED",
            "attributes": [{ "attributeId": size_id, "attributeValueId": colour_values[0] }]
        }]),
    ));
    let result = repo.create_product(&payload.product, &payload.relations);
    assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    assert!(repo.list_products().expect("should list").is_empty());
}

#[test]
fn list_reports_names_and_primary_image() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let brand: BrandFormPayload =
        payload::<BrandForm, _>(json!({ "name": "Acme", "slug": "acme" }));
    let brand_id = repo.create_brand(&brand.brand).expect("brand").id.get();
    let category_id = create_category(&repo, "Lamps", "lamps", None);

    create_product(&repo, product_body());
    let body = json!({
        "reference": "SKU-2",
        "name": "Desk lamp",
        "slug": "desk-lamp",
        "priceWithVat": 60,
        "priceWithoutVat": 50,
        "brandId": brand_id,
        "defaultCategoryId": category_id,
        "images": [
            { "imageUrl": "https://cdn.example.com/side.jpg", "position": 2 },
            { "imageUrl": "https://cdn.example.com/front.jpg", "position": 1, "isPrimary": true }
        ]
    });
    create_product(&repo, body);

    let products = repo.list_products().expect("should list");
    assert_eq!(products.len(), 2);
    let newest = &products[0];
    assert_eq!(newest.reference.as_str(), "SKU-2");
    assert_eq!(newest.brand_name.as_deref(), Some("Acme"));
    assert_eq!(newest.default_category_name.as_deref(), Some("Lamps"));
    assert_eq!(
        newest.primary_image.as_deref(),
        Some("https://cdn.example.com/front.jpg")
    );
    assert_eq!(products[1].primary_image, None);
    assert_eq!(products[1].brand_name, None);
}

#[test]
fn list_picks_each_products_own_image() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    assert!(repo.list_products().expect("should list").is_empty());

    let first = with(
        product_body(),
        "images",
        json!([{ "imageUrl": "https://cdn.example.com/lamp.jpg" }]),
    );
    create_product(&repo, first);
    let second = json!({
        "reference": "SKU-2",
        "name": "Desk lamp",
        "slug": "desk-lamp",
        "priceWithVat": "60",
        "priceWithoutVat": "50",
        "images": [
            { "imageUrl": "https://cdn.example.com/desk-2.jpg", "position": 2 },
            { "imageUrl": "https://cdn.example.com/desk-1.jpg", "position": 1 }
        ]
    });
    create_product(&repo, second);

    let images: Vec<Option<String>> = repo
        .list_products()
        .expect("should list")
        .into_iter()
        .map(|p| p.primary_image)
        .collect();
    assert_eq!(
        images,
        vec![
            Some("https://cdn.example.com/desk-2.jpg".to_string()),
            Some("https://cdn.example.com/lamp.jpg".to_string()),
        ]
    );
}

#[test]
fn undecodable_stored_row_is_reported_as_corrupt() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let product = create_product(&repo, product_body());

    let mut conn = test_db.pool().get().expect("connection");
    diesel::update(products::table.find(product.id.get()))
        .set(products::price_with_vat.eq("twelve"))
        .execute(&mut conn)
        .expect("update");

    assert!(matches!(
        repo.list_products(),
        Err(RepositoryError::CorruptRow(_))
    ));
    assert!(matches!(
        repo.get_product_details(product.id),
        Err(RepositoryError::CorruptRow(_))
    ));
}

#[test]
fn deleting_a_brand_detaches_its_products() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let brand: BrandFormPayload =
        payload::<BrandForm, _>(json!({ "name": "Acme", "slug": "acme" }));
    let brand_id = repo.create_brand(&brand.brand).expect("brand").id;
    let product = create_product(&repo, with(product_body(), "brandId", json!(brand_id.get())));
    assert_eq!(product.brand_id, Some(brand_id));

    assert_eq!(repo.delete_brand(brand_id).expect("should delete"), 1);
    let reloaded = repo
        .get_product_by_id(product.id)
        .expect("should query")
        .expect("product should survive");
    assert_eq!(reloaded.brand_id, None);
}

#[test]
fn deleting_a_category_removes_its_descendants() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let root = create_category(&repo, "Lighting", "lighting", None);
    let child = create_category(&repo, "Lamps", "lamps", Some(root));
    let product = create_product(
        &repo,
        with(
            with(product_body(), "defaultCategoryId", json!(child)),
            "categoryIds",
            json!([child]),
        ),
    );

    let deleted = repo
        .delete_category(CategoryId::new(root).unwrap())
        .expect("should delete");
    assert_eq!(deleted, 1);
    assert!(
        repo.get_category_by_id(CategoryId::new(child).unwrap())
            .expect("should query")
            .is_none()
    );

    let details = repo
        .get_product_details(product.id)
        .expect("should load details")
        .expect("product should survive");
    assert_eq!(details.product.default_category_id, None);
    assert!(details.categories.is_empty());
}

#[test]
fn attribute_values_are_reconciled_by_id() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let (size_id, values) = create_attribute(&repo, "Size", &["S", "M"]);

    let update: AttributeFormPayload = payload::<AttributeForm, _>(json!({
        "name": "Size",
        "type": "select",
        "values": [
            { "id": values[0], "value": "Small" },
            { "value": "L" }
        ]
    }));
    let updated = repo
        .update_attribute(
            AttributeId::new(size_id).unwrap(),
            &update.attribute,
            update.values.as_deref(),
        )
        .expect("should update")
        .expect("attribute should exist");

    assert_eq!(updated.values.len(), 2);
    assert_eq!(updated.values[0].id.get(), values[0]);
    assert_eq!(updated.values[0].value.as_str(), "Small");
    assert_eq!(updated.values[1].value.as_str(), "L");
    assert!(updated.values.iter().all(|v| v.id.get() != values[1]));

    let listed = repo.list_attributes().expect("should list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].values.len(), 2);
}
