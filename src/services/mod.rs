pub mod attributes;
pub mod brands;
pub mod categories;
pub mod errors;
pub mod features;
pub mod helpers;
pub mod products;
pub mod suppliers;
pub mod warehouses;

pub use errors::{ServiceError, ServiceResult};
