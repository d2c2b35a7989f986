use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::SuccessDto;
use crate::forms::brands::BrandForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::brands::{
    create_brand as create_brand_service, delete_brand as delete_brand_service,
    list_brands as list_brands_service, show_brand as show_brand_service,
    update_brand as update_brand_service,
};

#[get("/brands")]
pub async fn list_brands(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_brands_service(repo.get_ref()) {
        Ok(brands) => HttpResponse::Ok().json(brands),
        Err(err) => error_response(err, "Brand"),
    }
}

#[get("/brands/{brand_id}")]
pub async fn show_brand(
    brand_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_brand_service(brand_id.into_inner(), repo.get_ref()) {
        Ok(brand) => HttpResponse::Ok().json(brand),
        Err(err) => error_response(err, "Brand"),
    }
}

#[post("/brands")]
pub async fn create_brand(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BrandForm>,
) -> impl Responder {
    match create_brand_service(form, repo.get_ref()) {
        Ok(brand) => HttpResponse::Created().json(brand),
        Err(err) => error_response(err, "Brand"),
    }
}

#[put("/brands/{brand_id}")]
pub async fn update_brand(
    brand_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BrandForm>,
) -> impl Responder {
    match update_brand_service(brand_id.into_inner(), form, repo.get_ref()) {
        Ok(brand) => HttpResponse::Ok().json(brand),
        Err(err) => error_response(err, "Brand"),
    }
}

#[delete("/brands/{brand_id}")]
pub async fn delete_brand(
    brand_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_brand_service(brand_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessDto::ok()),
        Err(err) => error_response(err, "Brand"),
    }
}
