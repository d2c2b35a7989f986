use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{EntityName, TypeConstraintError};
use crate::domain::warehouse::{NewWarehouse as DomainNewWarehouse, Warehouse as DomainWarehouse};

/// Diesel model representing the `warehouses` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::warehouses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Warehouse {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::warehouses)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewWarehouse {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::warehouses)]
#[diesel(treat_none_as_null = true)]
pub struct WarehouseChangeset {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Warehouse> for DomainWarehouse {
    type Error = TypeConstraintError;

    fn try_from(warehouse: Warehouse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: warehouse.id.try_into()?,
            name: EntityName::new(warehouse.name)?,
            address: warehouse.address,
            city: warehouse.city,
            phone: warehouse.phone,
            email: warehouse.email,
            is_active: warehouse.is_active,
            created_at: warehouse.created_at,
            updated_at: warehouse.updated_at,
        })
    }
}

impl NewWarehouse {
    pub fn from_domain(warehouse: DomainNewWarehouse, now: NaiveDateTime) -> Self {
        Self {
            name: warehouse.name.into_inner(),
            address: warehouse.address,
            city: warehouse.city,
            phone: warehouse.phone,
            email: warehouse.email,
            is_active: warehouse.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl WarehouseChangeset {
    pub fn from_domain(warehouse: DomainNewWarehouse, now: NaiveDateTime) -> Self {
        Self {
            name: warehouse.name.into_inner(),
            address: warehouse.address,
            city: warehouse.city,
            phone: warehouse.phone,
            email: warehouse.email,
            is_active: warehouse.is_active,
            updated_at: now,
        }
    }
}
