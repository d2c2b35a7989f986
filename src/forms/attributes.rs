use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::attribute::{NewAttribute, NewAttributeValue};
use crate::domain::types::{
    AttributeType, AttributeValueId, AttributeValueText, EntityName, Position, TypeConstraintError,
};
use crate::forms::{non_blank, optional_reference};

/// Body of `POST /attributes` and `PUT /attributes/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttributeForm {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub attribute_type: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
    pub values: Option<Vec<AttributeValueForm>>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValueForm {
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub value: String,
    /// Hex colour shown for `color` attributes.
    #[validate(length(max = 32))]
    pub color_code: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeFormPayload {
    pub attribute: NewAttribute,
    /// `None` when the body carried no `values` key.
    pub values: Option<Vec<NewAttributeValue>>,
}

#[derive(Debug, Error)]
pub enum AttributeFormError {
    #[error("Attribute form validation failed: {0}")]
    Validation(String),
    #[error("Attribute form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AttributeFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AttributeFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn values_payload(
    values: Vec<AttributeValueForm>,
) -> Result<Vec<NewAttributeValue>, AttributeFormError> {
    let mut result = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        value.validate()?;
        let position = match value.position {
            Some(position) => position,
            None => i32::try_from(index)
                .map_err(|_| TypeConstraintError::InvalidValue("too many values".to_string()))?,
        };
        result.push(NewAttributeValue {
            id: optional_reference(value.id, "attribute_value_id", AttributeValueId::new)?,
            value: AttributeValueText::new(value.value)?,
            color_code: non_blank(value.color_code),
            position: Position::new(position)?,
        });
    }
    Ok(result)
}

impl TryFrom<AttributeForm> for AttributeFormPayload {
    type Error = AttributeFormError;

    fn try_from(value: AttributeForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let attribute_type = non_blank(value.attribute_type)
            .ok_or(TypeConstraintError::EmptyString("type"))?;

        Ok(Self {
            attribute: NewAttribute {
                name: EntityName::new(value.name.unwrap_or_default())?,
                attribute_type: AttributeType::try_from(attribute_type)?,
                position: Position::new(value.position.unwrap_or(0))?,
                is_active: value.is_active.unwrap_or(true),
            },
            values: value.values.map(values_payload).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_type_and_values() {
        let form: AttributeForm = serde_json::from_value(serde_json::json!({
            "name": "Colour",
            "type": "color",
            "values": [
                { "value": "Red", "colorCode": "#ff0000" },
                { "id": 9, "value": "Blue", "colorCode": "" }
            ]
        }))
        .unwrap();
        let payload = AttributeFormPayload::try_from(form).unwrap();
        assert_eq!(payload.attribute.attribute_type, AttributeType::Color);
        let values = payload.values.unwrap();
        assert_eq!(values[0].position, 0);
        assert_eq!(values[1].position, 1);
        assert_eq!(values[1].id.map(|id| id.get()), Some(9));
        assert_eq!(values[1].color_code, None);
    }

    #[test]
    fn type_is_required() {
        let form = AttributeForm {
            name: Some("Size".into()),
            ..Default::default()
        };
        assert!(AttributeFormPayload::try_from(form).is_err());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let form = AttributeForm {
            name: Some("Size".into()),
            attribute_type: Some("slider".into()),
            ..Default::default()
        };
        assert!(AttributeFormPayload::try_from(form).is_err());
    }
}
