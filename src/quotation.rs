use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{FinancingTerms, QuoteSelection};
use crate::decimal::Money;
use crate::engine::AmortizationEngine;
use crate::errors::QuoteError;
use crate::types::{LoanQuoteRequest, LoanQuoteResult};

/// a financed product quote as shown on the quotation screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    pub terms: FinancingTerms,
    pub selection: QuoteSelection,
    pub request: LoanQuoteRequest,
    pub result: LoanQuoteResult,
}

/// headline numbers of a quotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub price: Money,
    pub down_payment: Money,
    pub loan_amount: Money,
    pub months: u32,
    pub monthly_payment: Money,
    pub final_payment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl Quotation {
    /// quote the terms for a slider selection
    pub fn prepare(terms: &FinancingTerms, selection: &QuoteSelection) -> Result<Self, QuoteError> {
        terms.validate()?;
        let request = terms.quote_request(selection)?;
        let result = AmortizationEngine::new().compute_schedule(&request)?;

        debug!(
            product_id = %terms.product_id,
            down_payment = %selection.down_payment,
            term_count = selection.term_count,
            monthly_payment = %result.monthly_payment,
            "prepared quotation"
        );

        Ok(Self {
            terms: terms.clone(),
            selection: *selection,
            request,
            result,
        })
    }

    /// quote after snapping the selection into the allowed slider ranges
    pub fn prepare_clamped(
        terms: &FinancingTerms,
        selection: &QuoteSelection,
    ) -> Result<Self, QuoteError> {
        Self::prepare(terms, &selection.clamp_to(terms))
    }

    /// re-quote the same terms with a new selection
    pub fn reselect(&self, selection: &QuoteSelection) -> Result<Self, QuoteError> {
        Self::prepare(&self.terms, selection)
    }

    pub fn summary(&self) -> QuoteSummary {
        QuoteSummary {
            price: self.request.price,
            down_payment: self.request.down_payment,
            loan_amount: self.result.loan_amount,
            months: self.result.schedule.len() as u32,
            monthly_payment: self.result.monthly_payment,
            final_payment: self.result.final_payment().unwrap_or(Money::ZERO),
            total_interest: self.result.total_interest,
            total_payment: self.result.total_payment,
        }
    }
}
