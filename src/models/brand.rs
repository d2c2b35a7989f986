use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::brand::{Brand as DomainBrand, NewBrand as DomainNewBrand};
use crate::domain::types::{EntityName, Slug, TypeConstraintError};

/// Diesel model representing the `brands` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::brands)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::brands)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewBrand {
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::brands)]
#[diesel(treat_none_as_null = true)]
pub struct BrandChangeset {
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Brand> for DomainBrand {
    type Error = TypeConstraintError;

    fn try_from(brand: Brand) -> Result<Self, Self::Error> {
        Ok(Self {
            id: brand.id.try_into()?,
            name: EntityName::new(brand.name)?,
            slug: Slug::new(brand.slug)?,
            logo_url: brand.logo_url,
            description: brand.description,
            meta_title: brand.meta_title,
            meta_description: brand.meta_description,
            is_active: brand.is_active,
            created_at: brand.created_at,
            updated_at: brand.updated_at,
        })
    }
}

impl NewBrand {
    pub fn from_domain(brand: DomainNewBrand, now: NaiveDateTime) -> Self {
        Self {
            name: brand.name.into_inner(),
            slug: brand.slug.into_inner(),
            logo_url: brand.logo_url,
            description: brand.description,
            meta_title: brand.meta_title,
            meta_description: brand.meta_description,
            is_active: brand.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl BrandChangeset {
    pub fn from_domain(brand: DomainNewBrand, now: NaiveDateTime) -> Self {
        Self {
            name: brand.name.into_inner(),
            slug: brand.slug.into_inner(),
            logo_url: brand.logo_url,
            description: brand.description,
            meta_title: brand.meta_title,
            meta_description: brand.meta_description,
            is_active: brand.is_active,
            updated_at: now,
        }
    }
}
