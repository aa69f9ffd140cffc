use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{LoanQuoteRequest, LoanQuoteResult};

/// how the customer pays at the point of sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// settle the financed amount in one go
    FullPayment,
    /// first level installment
    Installment,
    /// upfront portion only
    DownPayment,
}

/// cash amount pre-filled for a payment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashAutoFill {
    pub payment_type: PaymentType,
    pub amount: Money,
}

impl CashAutoFill {
    pub fn new(request: &LoanQuoteRequest, result: &LoanQuoteResult, payment_type: PaymentType) -> Self {
        Self {
            payment_type,
            amount: auto_fill_amount(request, result, payment_type),
        }
    }
}

/// Amount to pre-populate the cash field with.
///
/// Values are taken from the computed quote as is, never re-derived.
pub fn auto_fill_amount(
    request: &LoanQuoteRequest,
    result: &LoanQuoteResult,
    payment_type: PaymentType,
) -> Money {
    match payment_type {
        PaymentType::FullPayment if result.is_financed() => result.loan_amount,
        // nothing financed, the sale is paid at the price
        PaymentType::FullPayment => request.price.max(Money::ZERO),
        PaymentType::Installment => result.monthly_payment,
        PaymentType::DownPayment => request.down_payment.min(request.price).max(Money::ZERO),
    }
}
