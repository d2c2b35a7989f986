use serde::Deserialize;
use thiserror::Error;

/// Query of `GET /helpers/slug`.
#[derive(Debug, Deserialize)]
pub struct SlugQuery {
    #[serde(default)]
    pub text: String,
}

/// Query of `GET /helpers/prices`. Exactly one of the two prices is given.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    pub price_with_vat: Option<f64>,
    pub price_without_vat: Option<f64>,
    pub cost_price: Option<f64>,
}

/// The price the breakdown is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceBasis {
    WithVat(f64),
    WithoutVat(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQueryPayload {
    pub basis: PriceBasis,
    pub cost_price: Option<f64>,
}

#[derive(Debug, Error)]
pub enum PriceQueryError {
    #[error("provide exactly one of priceWithVat or priceWithoutVat")]
    AmbiguousBasis,
    #[error("{0} must be a finite, non-negative number")]
    InvalidAmount(&'static str),
}

fn checked(value: f64, field: &'static str) -> Result<f64, PriceQueryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PriceQueryError::InvalidAmount(field))
    }
}

impl TryFrom<PriceQuery> for PriceQueryPayload {
    type Error = PriceQueryError;

    fn try_from(value: PriceQuery) -> Result<Self, Self::Error> {
        let basis = match (value.price_with_vat, value.price_without_vat) {
            (Some(with), None) => PriceBasis::WithVat(checked(with, "priceWithVat")?),
            (None, Some(without)) => PriceBasis::WithoutVat(checked(without, "priceWithoutVat")?),
            _ => return Err(PriceQueryError::AmbiguousBasis),
        };
        let cost_price = value
            .cost_price
            .map(|cost| checked(cost, "costPrice"))
            .transpose()?;

        Ok(Self { basis, cost_price })
    }
}
