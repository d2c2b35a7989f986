use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::SuccessDto;
use crate::forms::attributes::AttributeForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::attributes::{
    create_attribute as create_attribute_service, delete_attribute as delete_attribute_service,
    list_attributes as list_attributes_service, show_attribute as show_attribute_service,
    update_attribute as update_attribute_service,
};

#[get("/attributes")]
pub async fn list_attributes(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_attributes_service(repo.get_ref()) {
        Ok(attributes) => HttpResponse::Ok().json(attributes),
        Err(err) => error_response(err, "Attribute"),
    }
}

#[get("/attributes/{attribute_id}")]
pub async fn show_attribute(
    attribute_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_attribute_service(attribute_id.into_inner(), repo.get_ref()) {
        Ok(attribute) => HttpResponse::Ok().json(attribute),
        Err(err) => error_response(err, "Attribute"),
    }
}

#[post("/attributes")]
pub async fn create_attribute(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AttributeForm>,
) -> impl Responder {
    match create_attribute_service(form, repo.get_ref()) {
        Ok(attribute) => HttpResponse::Created().json(attribute),
        Err(err) => error_response(err, "Attribute"),
    }
}

#[put("/attributes/{attribute_id}")]
pub async fn update_attribute(
    attribute_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AttributeForm>,
) -> impl Responder {
    match update_attribute_service(attribute_id.into_inner(), form, repo.get_ref()) {
        Ok(attribute) => HttpResponse::Ok().json(attribute),
        Err(err) => error_response(err, "Attribute"),
    }
}

#[delete("/attributes/{attribute_id}")]
pub async fn delete_attribute(
    attribute_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_attribute_service(attribute_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessDto::ok()),
        Err(err) => error_response(err, "Attribute"),
    }
}
