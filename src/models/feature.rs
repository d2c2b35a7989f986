use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::feature::{Feature as DomainFeature, NewFeature as DomainNewFeature};
use crate::domain::types::{EntityName, Position, TypeConstraintError};

/// Diesel model representing the `features` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::features)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Feature {
    pub id: i32,
    pub name: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::features)]
pub struct NewFeature {
    pub name: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::features)]
pub struct FeatureChangeset {
    pub name: String,
    pub position: i32,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Feature> for DomainFeature {
    type Error = TypeConstraintError;

    fn try_from(feature: Feature) -> Result<Self, Self::Error> {
        Ok(Self {
            id: feature.id.try_into()?,
            name: EntityName::new(feature.name)?,
            position: Position::new(feature.position)?,
            is_active: feature.is_active,
            created_at: feature.created_at,
            updated_at: feature.updated_at,
        })
    }
}

impl NewFeature {
    pub fn from_domain(feature: DomainNewFeature, now: NaiveDateTime) -> Self {
        Self {
            name: feature.name.into_inner(),
            position: feature.position.get(),
            is_active: feature.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl FeatureChangeset {
    pub fn from_domain(feature: DomainNewFeature, now: NaiveDateTime) -> Self {
        Self {
            name: feature.name.into_inner(),
            position: feature.position.get(),
            is_active: feature.is_active,
            updated_at: now,
        }
    }
}
