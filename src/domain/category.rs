use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, EntityName, Slug};

/// Node of the category tree. Deleting a category deletes its descendants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: EntityName,
    pub slug: Slug,
    pub parent_id: Option<CategoryId>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert or fully replace a [`Category`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: EntityName,
    pub slug: Slug,
    pub parent_id: Option<CategoryId>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}
