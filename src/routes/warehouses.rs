use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::SuccessDto;
use crate::forms::warehouses::WarehouseForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::warehouses::{
    create_warehouse as create_warehouse_service, delete_warehouse as delete_warehouse_service,
    list_warehouses as list_warehouses_service, show_warehouse as show_warehouse_service,
    update_warehouse as update_warehouse_service,
};

#[get("/warehouses")]
pub async fn list_warehouses(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_warehouses_service(repo.get_ref()) {
        Ok(warehouses) => HttpResponse::Ok().json(warehouses),
        Err(err) => error_response(err, "Warehouse"),
    }
}

#[get("/warehouses/{warehouse_id}")]
pub async fn show_warehouse(
    warehouse_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_warehouse_service(warehouse_id.into_inner(), repo.get_ref()) {
        Ok(warehouse) => HttpResponse::Ok().json(warehouse),
        Err(err) => error_response(err, "Warehouse"),
    }
}

#[post("/warehouses")]
pub async fn create_warehouse(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<WarehouseForm>,
) -> impl Responder {
    match create_warehouse_service(form, repo.get_ref()) {
        Ok(warehouse) => HttpResponse::Created().json(warehouse),
        Err(err) => error_response(err, "Warehouse"),
    }
}

#[put("/warehouses/{warehouse_id}")]
pub async fn update_warehouse(
    warehouse_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<WarehouseForm>,
) -> impl Responder {
    match update_warehouse_service(warehouse_id.into_inner(), form, repo.get_ref()) {
        Ok(warehouse) => HttpResponse::Ok().json(warehouse),
        Err(err) => error_response(err, "Warehouse"),
    }
}

#[delete("/warehouses/{warehouse_id}")]
pub async fn delete_warehouse(
    warehouse_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_warehouse_service(warehouse_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessDto::ok()),
        Err(err) => error_response(err, "Warehouse"),
    }
}
