use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::SuccessDto;
use crate::forms::suppliers::SupplierForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::suppliers::{
    create_supplier as create_supplier_service, delete_supplier as delete_supplier_service,
    list_suppliers as list_suppliers_service, show_supplier as show_supplier_service,
    update_supplier as update_supplier_service,
};

#[get("/suppliers")]
pub async fn list_suppliers(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_suppliers_service(repo.get_ref()) {
        Ok(suppliers) => HttpResponse::Ok().json(suppliers),
        Err(err) => error_response(err, "Supplier"),
    }
}

#[get("/suppliers/{supplier_id}")]
pub async fn show_supplier(
    supplier_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_supplier_service(supplier_id.into_inner(), repo.get_ref()) {
        Ok(supplier) => HttpResponse::Ok().json(supplier),
        Err(err) => error_response(err, "Supplier"),
    }
}

#[post("/suppliers")]
pub async fn create_supplier(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SupplierForm>,
) -> impl Responder {
    match create_supplier_service(form, repo.get_ref()) {
        Ok(supplier) => HttpResponse::Created().json(supplier),
        Err(err) => error_response(err, "Supplier"),
    }
}

#[put("/suppliers/{supplier_id}")]
pub async fn update_supplier(
    supplier_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SupplierForm>,
) -> impl Responder {
    match update_supplier_service(supplier_id.into_inner(), form, repo.get_ref()) {
        Ok(supplier) => HttpResponse::Ok().json(supplier),
        Err(err) => error_response(err, "Supplier"),
    }
}

#[delete("/suppliers/{supplier_id}")]
pub async fn delete_supplier(
    supplier_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_supplier_service(supplier_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessDto::ok()),
        Err(err) => error_response(err, "Supplier"),
    }
}
