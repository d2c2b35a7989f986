use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::SuccessDto;
use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    list_products as list_products_service, show_product as show_product_service,
    update_product as update_product_service,
};

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err, "Product"),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(err) => error_response(err, "Product"),
    }
}

#[post("/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    match create_product_service(form, repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response(err, "Product"),
    }
}

#[put("/products/{product_id}")]
pub async fn update_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    match update_product_service(product_id.into_inner(), form, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, "Product"),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessDto::ok()),
        Err(err) => error_response(err, "Product"),
    }
}
