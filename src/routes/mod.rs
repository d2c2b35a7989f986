//! actix-web handlers. Each handler parses the request, calls the matching
//! service with the shared repository and renders the result as JSON.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::dto::ErrorDto;
use crate::services::ServiceError;

pub mod attributes;
pub mod brands;
pub mod categories;
pub mod features;
pub mod helpers;
pub mod products;
pub mod suppliers;
pub mod warehouses;

/// Registers every resource on `cfg`. Mounted under the configured API prefix.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(products::list_products)
        .service(products::show_product)
        .service(products::create_product)
        .service(products::update_product)
        .service(products::delete_product)
        .service(categories::list_categories)
        .service(categories::show_category)
        .service(categories::create_category)
        .service(categories::update_category)
        .service(categories::delete_category)
        .service(brands::list_brands)
        .service(brands::show_brand)
        .service(brands::create_brand)
        .service(brands::update_brand)
        .service(brands::delete_brand)
        .service(suppliers::list_suppliers)
        .service(suppliers::show_supplier)
        .service(suppliers::create_supplier)
        .service(suppliers::update_supplier)
        .service(suppliers::delete_supplier)
        .service(warehouses::list_warehouses)
        .service(warehouses::show_warehouse)
        .service(warehouses::create_warehouse)
        .service(warehouses::update_warehouse)
        .service(warehouses::delete_warehouse)
        .service(features::list_features)
        .service(features::show_feature)
        .service(features::create_feature)
        .service(features::update_feature)
        .service(features::delete_feature)
        .service(attributes::list_attributes)
        .service(attributes::show_attribute)
        .service(attributes::create_attribute)
        .service(attributes::update_attribute)
        .service(attributes::delete_attribute)
        .service(helpers::suggest_slug)
        .service(helpers::price_breakdown);
}

/// Renders a service failure. `entity` names the resource in 404 messages.
pub fn error_response(err: ServiceError, entity: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ErrorDto::new(format!("{entity} not found")))
        }
        ServiceError::Form(message) => HttpResponse::BadRequest().json(ErrorDto::new(message)),
        ServiceError::Conflict(message) => HttpResponse::Conflict().json(ErrorDto::new(message)),
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ErrorDto::new("Internal server error"))
        }
    }
}

fn bad_request(message: String) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorDto::new(message.clone()));
    InternalError::from_response(message, response).into()
}

/// Malformed or mistyped JSON bodies are reported as 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        log::debug!("Rejected JSON body: {err}");
        bad_request(format!("Invalid request body: {err}"))
    })
}

/// Non-numeric ids in the path are reported as 400.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        bad_request(format!("Invalid path: {err}"))
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        bad_request(format!("Invalid query string: {err}"))
    })
}
