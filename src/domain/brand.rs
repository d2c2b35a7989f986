use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BrandId, EntityName, Slug};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: EntityName,
    pub slug: Slug,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBrand {
    pub name: EntityName,
    pub slug: Slug,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_active: bool,
}
