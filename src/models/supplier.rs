use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::supplier::{NewSupplier as DomainNewSupplier, Supplier as DomainSupplier};
use crate::domain::types::{EntityName, TypeConstraintError};

/// Diesel model representing the `suppliers` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::suppliers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::suppliers)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewSupplier {
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::suppliers)]
#[diesel(treat_none_as_null = true)]
pub struct SupplierChangeset {
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Supplier> for DomainSupplier {
    type Error = TypeConstraintError;

    fn try_from(supplier: Supplier) -> Result<Self, Self::Error> {
        Ok(Self {
            id: supplier.id.try_into()?,
            name: EntityName::new(supplier.name)?,
            contact_person: supplier.contact_person,
            email: supplier.email,
            phone: supplier.phone,
            address: supplier.address,
            notes: supplier.notes,
            is_active: supplier.is_active,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        })
    }
}

impl NewSupplier {
    pub fn from_domain(supplier: DomainNewSupplier, now: NaiveDateTime) -> Self {
        Self {
            name: supplier.name.into_inner(),
            contact_person: supplier.contact_person,
            email: supplier.email,
            phone: supplier.phone,
            address: supplier.address,
            notes: supplier.notes,
            is_active: supplier.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl SupplierChangeset {
    pub fn from_domain(supplier: DomainNewSupplier, now: NaiveDateTime) -> Self {
        Self {
            name: supplier.name.into_inner(),
            contact_person: supplier.contact_person,
            email: supplier.email,
            phone: supplier.phone,
            address: supplier.address,
            notes: supplier.notes,
            is_active: supplier.is_active,
            updated_at: now,
        }
    }
}
