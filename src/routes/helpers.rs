use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::helpers::{PriceQuery, SlugQuery};
use crate::routes::error_response;
use crate::services::helpers::{
    price_breakdown as price_breakdown_service, suggest_slug as suggest_slug_service,
};

/// `GET /helpers/slug?text=Desk%20Lamp` -> `{"slug": "desk-lamp"}`.
#[get("/helpers/slug")]
pub async fn suggest_slug(web::Query(query): web::Query<SlugQuery>) -> impl Responder {
    HttpResponse::Ok().json(suggest_slug_service(query))
}

#[get("/helpers/prices")]
pub async fn price_breakdown(web::Query(query): web::Query<PriceQuery>) -> impl Responder {
    match price_breakdown_service(query) {
        Ok(breakdown) => HttpResponse::Ok().json(breakdown),
        Err(err) => error_response(err, "Price"),
    }
}
