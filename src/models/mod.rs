//! Diesel row types and their conversions to and from domain entities.

pub mod attribute;
pub mod brand;
pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod feature;
pub mod product;
pub mod product_image;
pub mod product_relations;
pub mod supplier;
pub mod warehouse;
