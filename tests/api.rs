use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, test, web};
use catalog_admin::routes;
use serde_json::{Value, json};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($test_db.repo()))
                .service(web::scope("/api").configure(routes::configure)),
        )
        .await
    };
}

fn lamp() -> Value {
    json!({
        "reference": "SKU-1",
        "name": "Lamp",
        "slug": "lamp",
        "priceWithVat": "120.00",
        "priceWithoutVat": "100.00"
    })
}

#[actix_web::test]
async fn created_product_reads_back_with_empty_collections() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(lamp())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let details: Value = test::read_body_json(resp).await;

    for field in ["reference", "name", "slug", "priceWithVat", "priceWithoutVat"] {
        assert_eq!(details[field], created[field], "{field} differs");
    }
    assert_eq!(details["priceWithVat"], "120.00");
    for collection in ["images", "categories", "features", "stock", "variations"] {
        assert_eq!(details[collection], json!([]), "{collection} is not empty");
    }
}

#[actix_web::test]
async fn update_with_images_marks_the_first_primary() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(lamp())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().expect("id");

    let mut body = lamp();
    body["images"] = json!([
        { "imageUrl": "https://cdn.example.com/a.jpg", "altText": "Front" },
        { "imageUrl": "https://cdn.example.com/b.jpg" }
    ]);
    let req = test::TestRequest::put()
        .uri(&format!("/api/products/{id}"))
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{id}"))
        .to_request();
    let details: Value = test::call_and_read_body_json(&app, req).await;
    let images = details["images"].as_array().expect("images");
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["imageUrl"], "https://cdn.example.com/a.jpg");
    assert_eq!(images[0]["isPrimary"], true);
    assert_eq!(images[1]["isPrimary"], false);

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list[0]["primaryImage"], "https://cdn.example.com/a.jpg");
}

#[actix_web::test]
async fn updating_a_missing_product_is_not_found() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::put()
        .uri("/api/products/999")
        .set_json(lamp())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list, json!([]));
}

#[actix_web::test]
async fn deleted_product_is_gone() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(lamp())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().expect("id");

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri(&format!("/api/products/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true }));
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn invalid_product_bodies_are_bad_requests() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let mut missing_name = lamp();
    missing_name["name"] = Value::Null;
    let mut bad_price = lamp();
    bad_price["priceWithVat"] = json!("twelve");
    let mut negative_brand = lamp();
    negative_brand["brandId"] = json!(-4);

    for body in [missing_name, bad_price, negative_brand] {
        let req = test::TestRequest::post()
            .uri("/api/products")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
        let error: Value = test::read_body_json(resp).await;
        assert!(error["error"].is_string());
    }

    let req = test::TestRequest::post()
        .uri("/api/products")
        .insert_header(ContentType::json())
        .set_payload("{\"reference\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert!(error["error"].is_string());

    let req = test::TestRequest::get()
        .uri("/api/products/lamp")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list, json!([]));
}

#[actix_web::test]
async fn json_number_prices_are_stored_digit_for_digit() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .insert_header(ContentType::json())
        .set_payload(
            r#"{
                "reference": "SKU-9",
                "name": "Lamp",
                "slug": "lamp",
                "priceWithVat": 1234567.123456789012345,
                "priceWithoutVat": 0.30000000000000000001,
                "costPrice": 12345678901234567.89,
                "weight": 1.5e-7
            }"#,
        )
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{id}"))
        .to_request();
    let details: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(details["priceWithVat"], "1234567.123456789012345");
    assert_eq!(details["priceWithoutVat"], "0.30000000000000000001");
    assert_eq!(details["costPrice"], "12345678901234567.89");
    assert_eq!(details["weight"], "0.00000015");
}

#[actix_web::test]
async fn duplicate_category_slug_is_a_conflict() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "name": "Lamps", "slug": "lamps" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "name": "More lamps", "slug": "lamps" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().expect("message").contains("lamps"));

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn brand_lifecycle() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/brands")
        .set_json(json!({ "name": "Acme", "slug": "acme" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let brand: Value = test::read_body_json(resp).await;
    let id = brand["id"].as_i64().expect("id");
    assert_eq!(brand["isActive"], true);

    let req = test::TestRequest::put()
        .uri(&format!("/api/brands/{id}"))
        .set_json(json!({ "name": "Acme Corp", "slug": "acme", "isActive": false }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["name"], "Acme Corp");
    assert_eq!(updated["isActive"], false);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/brands/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/brands/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn supplier_email_must_be_valid() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/suppliers")
        .set_json(json!({ "name": "Lumen Ltd", "email": "sales-at-lumen" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/suppliers")
        .set_json(json!({ "name": "Lumen Ltd", "email": "sales@lumen.example" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn attribute_values_are_embedded() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/attributes")
        .set_json(json!({
            "name": "Colour",
            "type": "color",
            "values": [
                { "value": "Red", "colorCode": "#ff0000" },
                { "value": "Blue", "colorCode": "#0000ff" }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/api/attributes/{id}"))
        .to_request();
    let attribute: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(attribute["type"], "color");
    let values = attribute["values"].as_array().expect("values");
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["value"], "Red");
    assert_eq!(values[1]["colorCode"], "#0000ff");

    let req = test::TestRequest::post()
        .uri("/api/attributes")
        .set_json(json!({ "name": "Size" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn helpers_suggest_slugs_and_prices() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/helpers/slug?text=Desk%20Lamp%20XL")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "slug": "desk-lamp-xl" }));

    let req = test::TestRequest::get()
        .uri("/api/helpers/prices?priceWithVat=120&costPrice=80")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["priceWithoutVat"], "100.00");
    assert_eq!(body["margin"], "20.00");
    assert_eq!(body["marginPercent"], "25.00");

    let req = test::TestRequest::get()
        .uri("/api/helpers/prices?priceWithVat=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
