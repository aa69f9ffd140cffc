use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::Money;
use crate::engine::MAX_TERM_MONTHS;
use crate::types::TermUnit;

/// failures reported by the amortization engine; no partial schedule is ever returned
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmortizationError {
    #[error("invalid principal: price {price}, down payment {down_payment}")]
    InvalidPrincipal {
        price: Money,
        down_payment: Money,
    },

    /// term of zero periods, or one longer than [`MAX_TERM_MONTHS`] once
    /// normalized to months
    #[error("invalid term: {term_count} {term_unit}, expected 1 to {} months", MAX_TERM_MONTHS)]
    InvalidTerm {
        term_count: u32,
        term_unit: TermUnit,
    },

    /// negative rate, or a rate so large the payment schedule cannot be
    /// represented in decimal range
    #[error("invalid interest rate: {rate}%, negative or too large to amortize")]
    InvalidRate {
        rate: Decimal,
    },
}

/// failures from the caller-side quotation layers (terms, sliders, export)
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error(transparent)]
    Amortization(#[from] AmortizationError),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("term exceeds maximum: maximum {maximum}, requested {requested}")]
    TermExceedsMaximum {
        maximum: u32,
        requested: u32,
    },

    #[error("down payment below minimum: minimum {minimum}, provided {provided}")]
    DownPaymentBelowMinimum {
        minimum: Money,
        provided: Money,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AmortizationError>;
