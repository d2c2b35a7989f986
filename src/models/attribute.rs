use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::attribute::{
    Attribute as DomainAttribute, AttributeValue as DomainAttributeValue,
    NewAttribute as DomainNewAttribute, NewAttributeValue as DomainNewAttributeValue,
};
use crate::domain::types::{
    AttributeType, AttributeValueText, EntityName, Position, TypeConstraintError,
};

/// Diesel model representing the `attributes` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::attributes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Attribute {
    pub id: i32,
    pub name: String,
    pub attribute_type: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::attributes)]
pub struct NewAttribute {
    pub name: String,
    pub attribute_type: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::attributes)]
pub struct AttributeChangeset {
    pub name: String,
    pub attribute_type: String,
    pub position: i32,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

/// Diesel model representing the `attribute_values` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::attribute_values)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AttributeValue {
    pub id: i32,
    pub attribute_id: i32,
    pub value: String,
    pub color_code: Option<String>,
    pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::attribute_values)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewAttributeValue {
    pub attribute_id: i32,
    pub value: String,
    pub color_code: Option<String>,
    pub position: i32,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::attribute_values)]
#[diesel(treat_none_as_null = true)]
pub struct AttributeValueChangeset {
    pub value: String,
    pub color_code: Option<String>,
    pub position: i32,
}

impl TryFrom<Attribute> for DomainAttribute {
    type Error = TypeConstraintError;

    fn try_from(attribute: Attribute) -> Result<Self, Self::Error> {
        Ok(Self {
            id: attribute.id.try_into()?,
            name: EntityName::new(attribute.name)?,
            attribute_type: AttributeType::try_from(attribute.attribute_type)?,
            position: Position::new(attribute.position)?,
            is_active: attribute.is_active,
            created_at: attribute.created_at,
            updated_at: attribute.updated_at,
        })
    }
}

impl TryFrom<AttributeValue> for DomainAttributeValue {
    type Error = TypeConstraintError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.try_into()?,
            attribute_id: value.attribute_id.try_into()?,
            value: AttributeValueText::new(value.value)?,
            color_code: value.color_code,
            position: Position::new(value.position)?,
        })
    }
}

impl NewAttribute {
    pub fn from_domain(attribute: &DomainNewAttribute, now: NaiveDateTime) -> Self {
        Self {
            name: attribute.name.as_str().to_string(),
            attribute_type: attribute.attribute_type.as_str().to_string(),
            position: attribute.position.get(),
            is_active: attribute.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl AttributeChangeset {
    pub fn from_domain(attribute: &DomainNewAttribute, now: NaiveDateTime) -> Self {
        Self {
            name: attribute.name.as_str().to_string(),
            attribute_type: attribute.attribute_type.as_str().to_string(),
            position: attribute.position.get(),
            is_active: attribute.is_active,
            updated_at: now,
        }
    }
}

impl NewAttributeValue {
    pub fn from_domain(attribute_id: i32, value: &DomainNewAttributeValue) -> Self {
        Self {
            attribute_id,
            value: value.value.as_str().to_string(),
            color_code: value.color_code.clone(),
            position: value.position.get(),
        }
    }
}

impl From<&DomainNewAttributeValue> for AttributeValueChangeset {
    fn from(value: &DomainNewAttributeValue) -> Self {
        Self {
            value: value.value.as_str().to_string(),
            color_code: value.color_code.clone(),
            position: value.position.get(),
        }
    }
}
