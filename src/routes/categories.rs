use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::SuccessDto;
use crate::forms::categories::CategoryForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    list_categories as list_categories_service, show_category as show_category_service,
    update_category as update_category_service,
};

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err, "Category"),
    }
}

#[get("/categories/{category_id}")]
pub async fn show_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_category_service(category_id.into_inner(), repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, "Category"),
    }
}

#[post("/categories")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    match create_category_service(form, repo.get_ref()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => error_response(err, "Category"),
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    match update_category_service(category_id.into_inner(), form, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, "Category"),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_category_service(category_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessDto::ok()),
        Err(err) => error_response(err, "Category"),
    }
}
