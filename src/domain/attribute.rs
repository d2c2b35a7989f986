use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AttributeId, AttributeType, AttributeValueId, AttributeValueText, EntityName, Position,
};

/// Attribute used to build variation combinations (Color, Size...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: AttributeId,
    pub name: EntityName,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub position: Position,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Selectable value owned by an [`Attribute`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValue {
    pub id: AttributeValueId,
    pub attribute_id: AttributeId,
    pub value: AttributeValueText,
    pub color_code: Option<String>,
    pub position: Position,
}

/// Attribute together with its values, ordered by position.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeWithValues {
    #[serde(flatten)]
    pub attribute: Attribute,
    pub values: Vec<AttributeValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAttribute {
    pub name: EntityName,
    pub attribute_type: AttributeType,
    pub position: Position,
    pub is_active: bool,
}

/// Value submitted with an attribute write. Values carrying the `id` of an
/// existing row are updated in place so variation selections survive.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttributeValue {
    pub id: Option<AttributeValueId>,
    pub value: AttributeValueText,
    pub color_code: Option<String>,
    pub position: Position,
}
