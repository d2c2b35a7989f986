//! Catalog entities and the value objects they are built from.
//!
//! Nothing in here knows about Diesel or HTTP.

pub mod attribute;
pub mod brand;
pub mod category;
pub mod feature;
pub mod pricing;
pub mod product;
pub mod slug;
pub mod supplier;
pub mod types;
pub mod warehouse;
