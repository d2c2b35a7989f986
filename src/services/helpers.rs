//! Stateless helpers backing the admin product form.

use crate::domain::pricing::PriceBreakdown;
use crate::domain::slug::generate_slug;
use crate::dto::SlugDto;
use crate::forms::helpers::{PriceBasis, PriceQuery, PriceQueryPayload, SlugQuery};

use super::ServiceResult;

pub fn suggest_slug(query: SlugQuery) -> SlugDto {
    SlugDto {
        slug: generate_slug(&query.text),
    }
}

pub fn price_breakdown(query: PriceQuery) -> ServiceResult<PriceBreakdown> {
    let payload: PriceQueryPayload = query.try_into()?;

    Ok(match payload.basis {
        PriceBasis::WithVat(price) => PriceBreakdown::from_price_with_vat(price, payload.cost_price),
        PriceBasis::WithoutVat(price) => {
            PriceBreakdown::from_price_without_vat(price, payload.cost_price)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;

    #[test]
    fn slug_is_generated_from_text() {
        let dto = suggest_slug(SlugQuery {
            text: "Desk Lamp 2000".to_string(),
        });
        assert_eq!(dto.slug, "desk-lamp-2000");
    }

    #[test]
    fn breakdown_from_net_price_with_margin() {
        let query = PriceQuery {
            price_with_vat: None,
            price_without_vat: Some(100.0),
            cost_price: Some(80.0),
        };
        let breakdown = price_breakdown(query).unwrap();
        assert_eq!(breakdown.price_with_vat, "120.00");
        assert_eq!(breakdown.margin.as_deref(), Some("20.00"));
        assert_eq!(breakdown.margin_percent.as_deref(), Some("25.00"));
    }

    #[test]
    fn missing_basis_is_a_form_error() {
        assert!(matches!(
            price_breakdown(PriceQuery::default()),
            Err(ServiceError::Form(_))
        ));
    }
}
