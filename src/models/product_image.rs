use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProductImage as DomainNewProductImage, ProductImage as DomainProductImage,
};
use crate::domain::types::{ImageUrl, Position, TypeConstraintError};

/// Diesel model representing the `product_images` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_images)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub position: i32,
    pub is_primary: bool,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`ProductImage`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_images)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewProductImage {
    pub product_id: i32,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub position: i32,
    pub is_primary: bool,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ProductImage> for DomainProductImage {
    type Error = TypeConstraintError;

    fn try_from(image: ProductImage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: image.id.try_into()?,
            product_id: image.product_id.try_into()?,
            image_url: ImageUrl::new(image.image_url)?,
            alt_text: image.alt_text,
            position: Position::new(image.position)?,
            is_primary: image.is_primary,
            created_at: image.created_at,
        })
    }
}

impl NewProductImage {
    pub fn from_domain(product_id: i32, image: &DomainNewProductImage, now: NaiveDateTime) -> Self {
        Self {
            product_id,
            image_url: image.image_url.as_str().to_string(),
            alt_text: image.alt_text.clone(),
            position: image.position.get(),
            is_primary: image.is_primary,
            created_at: now,
        }
    }
}
