//! Derived pricing figures shown next to the price fields of the product form.
//!
//! The two stored prices are independent values; nothing here is applied on
//! write.

use serde::Serialize;

/// Fixed VAT rate used to link the gross and net price fields.
pub const VAT_RATE: f64 = 0.2;

/// Both prices plus the optional margin against the cost price, each rendered
/// with two decimals.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub price_with_vat: String,
    pub price_without_vat: String,
    pub margin: Option<String>,
    pub margin_percent: Option<String>,
}

fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

/// Net price for a gross price at [`VAT_RATE`].
pub fn without_vat(price_with_vat: f64) -> f64 {
    price_with_vat / (1.0 + VAT_RATE)
}

/// Gross price for a net price at [`VAT_RATE`].
pub fn with_vat(price_without_vat: f64) -> f64 {
    price_without_vat * (1.0 + VAT_RATE)
}

/// Absolute margin and margin percentage relative to the cost price.
///
/// The percentage is `0` when the cost is not positive.
pub fn margin(price_without_vat: f64, cost_price: f64) -> (f64, f64) {
    let margin = price_without_vat - cost_price;
    let percent = if cost_price > 0.0 {
        margin / cost_price * 100.0
    } else {
        0.0
    };
    (margin, percent)
}

impl PriceBreakdown {
    fn build(with: f64, without: f64, cost_price: Option<f64>) -> Self {
        let (margin, margin_percent) = match cost_price {
            Some(cost) => {
                let (margin, percent) = margin(without, cost);
                (Some(two_decimals(margin)), Some(two_decimals(percent)))
            }
            None => (None, None),
        };
        Self {
            price_with_vat: two_decimals(with),
            price_without_vat: two_decimals(without),
            margin,
            margin_percent,
        }
    }

    /// Derives the net price from a gross price.
    pub fn from_price_with_vat(price_with_vat: f64, cost_price: Option<f64>) -> Self {
        Self::build(price_with_vat, without_vat(price_with_vat), cost_price)
    }

    /// Derives the gross price from a net price.
    pub fn from_price_without_vat(price_without_vat: f64, cost_price: Option<f64>) -> Self {
        Self::build(with_vat(price_without_vat), price_without_vat, cost_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_net_price_from_gross() {
        let breakdown = PriceBreakdown::from_price_with_vat(120.0, None);
        assert_eq!(breakdown.price_with_vat, "120.00");
        assert_eq!(breakdown.price_without_vat, "100.00");
        assert_eq!(breakdown.margin, None);
    }

    #[test]
    fn derives_gross_price_from_net() {
        let breakdown = PriceBreakdown::from_price_without_vat(10.0, None);
        assert_eq!(breakdown.price_with_vat, "12.00");
    }

    #[test]
    fn computes_margin_against_cost() {
        let breakdown = PriceBreakdown::from_price_without_vat(100.0, Some(80.0));
        assert_eq!(breakdown.margin.as_deref(), Some("20.00"));
        assert_eq!(breakdown.margin_percent.as_deref(), Some("25.00"));
    }

    #[test]
    fn zero_cost_yields_zero_percent() {
        assert_eq!(margin(50.0, 0.0), (50.0, 0.0));
    }
}
