use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::SuccessDto;
use crate::forms::features::FeatureForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::features::{
    create_feature as create_feature_service, delete_feature as delete_feature_service,
    list_features as list_features_service, show_feature as show_feature_service,
    update_feature as update_feature_service,
};

#[get("/features")]
pub async fn list_features(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_features_service(repo.get_ref()) {
        Ok(features) => HttpResponse::Ok().json(features),
        Err(err) => error_response(err, "Feature"),
    }
}

#[get("/features/{feature_id}")]
pub async fn show_feature(
    feature_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_feature_service(feature_id.into_inner(), repo.get_ref()) {
        Ok(feature) => HttpResponse::Ok().json(feature),
        Err(err) => error_response(err, "Feature"),
    }
}

#[post("/features")]
pub async fn create_feature(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<FeatureForm>,
) -> impl Responder {
    match create_feature_service(form, repo.get_ref()) {
        Ok(feature) => HttpResponse::Created().json(feature),
        Err(err) => error_response(err, "Feature"),
    }
}

#[put("/features/{feature_id}")]
pub async fn update_feature(
    feature_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<FeatureForm>,
) -> impl Responder {
    match update_feature_service(feature_id.into_inner(), form, repo.get_ref()) {
        Ok(feature) => HttpResponse::Ok().json(feature),
        Err(err) => error_response(err, "Feature"),
    }
}

#[delete("/features/{feature_id}")]
pub async fn delete_feature(
    feature_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_feature_service(feature_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessDto::ok()),
        Err(err) => error_response(err, "Feature"),
    }
}
