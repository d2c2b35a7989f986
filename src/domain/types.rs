//! Strongly-typed value objects used by catalog entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers, required text and decimal amounts are validated once at the
//! boundary and can be trusted everywhere else.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A decimal literal could not be parsed.
    #[error("{0} must be a decimal number")]
    InvalidDecimal(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Parses `value` as an exact decimal (`12`, `-3.5`, `0.00`, `1.5e-7`) and
/// returns its canonical text.
///
/// The scale of plain literals is preserved, so `"120.00"` stays `"120.00"`.
/// Exponent forms are expanded (`1.5e-7` becomes `0.00000015`).
fn parse_decimal_literal(
    value: &str,
    field: &'static str,
    allow_negative: bool,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString(field));
    }
    if trimmed.contains('_') {
        return Err(TypeConstraintError::InvalidDecimal(field));
    }

    let literal = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let parsed = if literal.contains(['e', 'E']) {
        Decimal::from_scientific(&literal.to_ascii_lowercase())
    } else {
        Decimal::from_str_exact(literal)
    };
    let mut decimal = parsed.map_err(|_| TypeConstraintError::InvalidDecimal(field))?;

    if decimal.is_zero() {
        decimal.set_sign_positive(true);
    } else if decimal.is_sign_negative() && !allow_negative {
        return Err(TypeConstraintError::NegativeNumber(field));
    }

    Ok(decimal.to_string())
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        Self::new_for_field(value, "value")
    }

    /// Same as [`Self::new`] but with field-specific error context.
    pub fn new_for_field<S: Into<String>>(
        value: S,
        field: &'static str,
    ) -> Result<Self, TypeConstraintError> {
        trim_and_require_non_empty(value, field).map(Self)
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new_for_field(value, $field)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

/// Decimal amounts are stored as exact text (`TEXT` columns) to avoid
/// floating-point drift between what the operator typed and what is stored.
macro_rules! decimal_text_newtype {
    ($name:ident, $doc:expr, $field:expr, allow_negative = $allow_negative:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Parses and validates a decimal literal.
            pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
                parse_decimal_literal(value.as_ref(), $field, $allow_negative).map(Self)
            }

            /// Borrow the decimal literal.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned literal.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

macro_rules! non_negative_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            Serialize,
            Deserialize,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value that must be zero or greater.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value >= 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

id_newtype!(ProductId, "Unique identifier for a product.", "product_id");
id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category_id"
);
id_newtype!(BrandId, "Unique identifier for a brand.", "brand_id");
id_newtype!(
    SupplierId,
    "Unique identifier for a supplier.",
    "supplier_id"
);
id_newtype!(
    WarehouseId,
    "Unique identifier for a warehouse.",
    "warehouse_id"
);
id_newtype!(
    AttributeId,
    "Unique identifier for an attribute.",
    "attribute_id"
);
id_newtype!(
    AttributeValueId,
    "Unique identifier for an attribute value.",
    "attribute_value_id"
);
id_newtype!(FeatureId, "Unique identifier for a feature.", "feature_id");
id_newtype!(
    ProductImageId,
    "Unique identifier for a product image.",
    "image_id"
);
id_newtype!(
    ProductFeatureId,
    "Unique identifier for a product feature value row.",
    "product_feature_id"
);
id_newtype!(
    VariationId,
    "Unique identifier for a product variation.",
    "variation_id"
);
id_newtype!(
    VariationAttributeId,
    "Unique identifier for a variation attribute selection.",
    "variation_attribute_id"
);

non_empty_string_newtype!(
    ProductReference,
    "Product reference (SKU) enforcing non-empty values.",
    "reference"
);
non_empty_string_newtype!(
    ProductName,
    "Product name enforcing non-empty values.",
    "name"
);
non_empty_string_newtype!(
    Slug,
    "URL slug enforcing non-empty values. Uniqueness is checked by the store.",
    "slug"
);
non_empty_string_newtype!(
    EntityName,
    "Display name of a reference entity (brand, supplier, category...).",
    "name"
);
non_empty_string_newtype!(ImageUrl, "Product image location.", "image url");
non_empty_string_newtype!(
    FeatureValue,
    "Free-text value of a product feature.",
    "feature value"
);
non_empty_string_newtype!(
    AttributeValueText,
    "Display text of an attribute value.",
    "attribute value"
);
non_empty_string_newtype!(
    VariationReference,
    "Variation reference (SKU) enforcing non-empty values.",
    "variation reference"
);

decimal_text_newtype!(
    Price,
    "Non-negative price stored as an exact decimal literal.",
    "price",
    allow_negative = false
);
decimal_text_newtype!(
    Measure,
    "Non-negative physical dimension or weight stored as an exact decimal literal.",
    "measure",
    allow_negative = false
);
decimal_text_newtype!(
    Delta,
    "Signed adjustment (price or weight impact) stored as an exact decimal literal.",
    "impact",
    allow_negative = true
);

non_negative_i32_newtype!(Quantity, "Stock quantity, zero or greater.", "quantity");
non_negative_i32_newtype!(Position, "Ordering position, zero or greater.", "position");

/// Whether a product is shown in the storefront.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

impl Display for Visibility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Visibility {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "visible" => Ok(Self::Visible),
            "hidden" => Ok(Self::Hidden),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "visibility: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for Visibility {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// How an attribute is rendered when a shopper picks a value.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    #[default]
    Select,
    Radio,
    Color,
}

impl AttributeType {
    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Color => "color",
        }
    }
}

impl Display for AttributeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for AttributeType {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "select" => Ok(Self::Select),
            "radio" => Ok(Self::Radio),
            "color" => Ok(Self::Color),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "attribute type: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for AttributeType {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_non_empty_strings() {
        let value = NonEmptyString::new("  lamp  ").unwrap();
        assert_eq!(value.as_str(), "lamp");
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = ProductId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("product_id"));
    }

    #[test]
    fn price_keeps_exact_literal() {
        assert_eq!(Price::new("120.00").unwrap().as_str(), "120.00");
        assert_eq!(Price::new(" +7 ").unwrap().as_str(), "7");
        assert_eq!(Price::new("0").unwrap().as_str(), "0");
    }

    #[test]
    fn price_rejects_negative_numbers() {
        assert_eq!(
            Price::new("-0.01").unwrap_err(),
            TypeConstraintError::NegativeNumber("price")
        );
    }

    #[test]
    fn negative_zero_is_accepted_as_zero() {
        assert_eq!(Price::new("-0.00").unwrap().as_str(), "0.00");
    }

    #[test]
    fn decimals_reject_garbage() {
        for input in ["abc", "1,5", "--1", "1_000", "1e", "12.3.4", ""] {
            assert!(Measure::new(input).is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn decimals_keep_every_digit() {
        assert_eq!(
            Price::new("1234567.123456789012345").unwrap().as_str(),
            "1234567.123456789012345"
        );
        assert_eq!(
            Price::new("0.30000000000000000001").unwrap().as_str(),
            "0.30000000000000000001"
        );
        assert_eq!(
            Price::new("12345678901234567.89").unwrap().as_str(),
            "12345678901234567.89"
        );
    }

    #[test]
    fn exponent_forms_are_expanded() {
        assert_eq!(Price::new("1.5e-7").unwrap().as_str(), "0.00000015");
        assert_eq!(Measure::new("2E3").unwrap().as_str(), "2000");
        assert_eq!(Delta::new("-2.5e1").unwrap().as_str(), "-25");
        assert_eq!(
            Price::new("-1e-2").unwrap_err(),
            TypeConstraintError::NegativeNumber("price")
        );
    }

    #[test]
    fn delta_allows_negative_values() {
        assert_eq!(Delta::new("-2.50").unwrap().as_str(), "-2.50");
    }

    #[test]
    fn parses_visibility_and_attribute_type() {
        assert_eq!(Visibility::try_from("hidden").unwrap(), Visibility::Hidden);
        assert!(Visibility::try_from("draft").is_err());
        assert_eq!(AttributeType::try_from("color").unwrap(), AttributeType::Color);
        assert_eq!(Visibility::default().as_str(), "visible");
    }

    #[test]
    fn quantity_rejects_negative_numbers() {
        assert_eq!(
            Quantity::new(-1).unwrap_err(),
            TypeConstraintError::NegativeNumber("quantity")
        );
    }
}
