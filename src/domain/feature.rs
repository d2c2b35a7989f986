use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityName, FeatureId, Position};

/// Named product characteristic ("Material", "Power") whose value is free text
/// stored per product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: FeatureId,
    pub name: EntityName,
    pub position: Position,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFeature {
    pub name: EntityName,
    pub position: Position,
    pub is_active: bool,
}
