use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::warn;
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::QuoteError;
use crate::types::{InterestRateBasis, LoanQuoteRequest, TermUnit};

/// financing terms a catalog item is offered under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingTerms {
    pub product_id: Uuid,
    pub price: Money,
    /// longest term offered, in `term_unit`
    pub max_term: u32,
    pub term_unit: TermUnit,
    /// percentage, 12.0 for 12%
    pub interest_rate: Decimal,
    pub interest_rate_basis: InterestRateBasis,
    /// share of the price that must be paid upfront, 0..=100
    #[serde(default)]
    pub minimum_down_payment_percentage: Option<Decimal>,
}

impl FinancingTerms {
    pub fn new(
        product_id: Uuid,
        price: Money,
        max_term: u32,
        term_unit: TermUnit,
        interest_rate: Decimal,
        interest_rate_basis: InterestRateBasis,
    ) -> Self {
        Self {
            product_id,
            price,
            max_term,
            term_unit,
            interest_rate,
            interest_rate_basis,
            minimum_down_payment_percentage: None,
        }
    }

    /// equipment sale: yearly rate, up to `max_months` months, 20% down
    pub fn equipment(price: Money, yearly_rate: Decimal, max_months: u32) -> Self {
        Self {
            minimum_down_payment_percentage: Some(dec!(20)),
            ..Self::new(
                Uuid::new_v4(),
                price,
                max_months,
                TermUnit::Months,
                yearly_rate,
                InterestRateBasis::Yearly,
            )
        }
    }

    /// property or large project: yearly rate, term in years, 10% down
    pub fn property(price: Money, yearly_rate: Decimal, max_years: u32) -> Self {
        Self {
            minimum_down_payment_percentage: Some(dec!(10)),
            ..Self::new(
                Uuid::new_v4(),
                price,
                max_years,
                TermUnit::Years,
                yearly_rate,
                InterestRateBasis::Yearly,
            )
        }
    }

    pub fn with_minimum_down_payment(mut self, percentage: Decimal) -> Self {
        self.minimum_down_payment_percentage = Some(percentage);
        self
    }

    /// load terms handed over by the catalog
    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        let terms: Self = serde_json::from_str(json)?;
        terms.validate()?;
        Ok(terms)
    }

    pub fn to_json(&self) -> Result<String, QuoteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), QuoteError> {
        let problem = if self.price.is_negative() {
            Some(format!("price {} is negative", self.price))
        } else if self.max_term == 0 {
            Some("maximum term must be at least one period".to_string())
        } else if self.interest_rate < Decimal::ZERO {
            Some(format!("interest rate {}% is negative", self.interest_rate))
        } else {
            self.minimum_down_payment_percentage
                .filter(|p| *p < Decimal::ZERO || *p > Decimal::ONE_HUNDRED)
                .map(|p| format!("minimum down payment {}% outside 0..=100", p))
        };

        match problem {
            Some(message) => {
                warn!(product_id = %self.product_id, %message, "rejected financing terms");
                Err(QuoteError::InvalidConfiguration { message })
            }
            None => Ok(()),
        }
    }

    /// smallest acceptable down payment
    pub fn minimum_down_payment(&self) -> Money {
        self.minimum_down_payment_percentage
            .map(|p| self.price.percentage(p))
            .unwrap_or(Money::ZERO)
    }

    /// slider range for the down payment
    pub fn down_payment_bounds(&self) -> (Money, Money) {
        (self.minimum_down_payment(), self.price)
    }

    /// slider range for the term, in `term_unit`
    pub fn term_bounds(&self) -> RangeInclusive<u32> {
        1..=self.max_term
    }

    /// Build an engine request for a slider selection.
    ///
    /// The request always carries this item's own term unit. Policy checks
    /// (maximum term, minimum down payment) happen here so the engine stays
    /// purely computational.
    pub fn quote_request(&self, selection: &QuoteSelection) -> Result<LoanQuoteRequest, QuoteError> {
        if selection.term_count > self.max_term {
            return Err(QuoteError::TermExceedsMaximum {
                maximum: self.max_term,
                requested: selection.term_count,
            });
        }

        let minimum = self.minimum_down_payment();
        if selection.down_payment < minimum {
            return Err(QuoteError::DownPaymentBelowMinimum {
                minimum,
                provided: selection.down_payment,
            });
        }

        Ok(LoanQuoteRequest {
            price: self.price,
            down_payment: selection.down_payment,
            term_count: selection.term_count,
            term_unit: self.term_unit,
            interest_rate: self.interest_rate,
            interest_rate_basis: self.interest_rate_basis,
        })
    }
}

/// user-adjustable slider values for a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSelection {
    pub down_payment: Money,
    /// in the financing terms' own unit
    pub term_count: u32,
}

impl QuoteSelection {
    pub fn new(down_payment: Money, term_count: u32) -> Self {
        Self {
            down_payment,
            term_count,
        }
    }

    /// initial slider position: least money down over the longest term
    pub fn defaults_for(terms: &FinancingTerms) -> Self {
        Self::new(terms.minimum_down_payment(), terms.max_term)
    }

    /// snap slider values into the ranges the terms allow
    pub fn clamp_to(&self, terms: &FinancingTerms) -> Self {
        let (min_down, max_down) = terms.down_payment_bounds();
        Self {
            down_payment: self.down_payment.max(min_down).min(max_down),
            term_count: self.term_count.clamp(1, terms.max_term.max(1)),
        }
    }
}
