use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::types::{CategoryId, EntityName, Slug, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub parent_id: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full-replace changeset for a category.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(treat_none_as_null = true)]
pub struct CategoryChangeset {
    pub name: String,
    pub slug: String,
    pub parent_id: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: EntityName::new(category.name)?,
            slug: Slug::new(category.slug)?,
            parent_id: category.parent_id.map(CategoryId::new).transpose()?,
            description: category.description,
            image_url: category.image_url,
            is_active: category.is_active,
            meta_title: category.meta_title,
            meta_description: category.meta_description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}

impl NewCategory {
    pub fn from_domain(category: DomainNewCategory, now: NaiveDateTime) -> Self {
        Self {
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            parent_id: category.parent_id.map(|id| id.get()),
            description: category.description,
            image_url: category.image_url,
            is_active: category.is_active,
            meta_title: category.meta_title,
            meta_description: category.meta_description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl CategoryChangeset {
    pub fn from_domain(category: DomainNewCategory, now: NaiveDateTime) -> Self {
        Self {
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            parent_id: category.parent_id.map(|id| id.get()),
            description: category.description,
            image_url: category.image_url,
            is_active: category.is_active,
            meta_title: category.meta_title,
            meta_description: category.meta_description,
            updated_at: now,
        }
    }
}
