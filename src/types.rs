use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;

const MONTHS_PER_YEAR: u32 = 12;

/// unit in which a term count is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TermUnit {
    #[default]
    Months,
    Years,
}

impl fmt::Display for TermUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermUnit::Months => write!(f, "months"),
            TermUnit::Years => write!(f, "years"),
        }
    }
}

/// whether a quoted interest rate is already monthly or must be spread over 12 months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterestRateBasis {
    Monthly,
    #[default]
    Yearly,
}

/// loan quote request, built fresh for every quote interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanQuoteRequest {
    /// price of the financed item before any payment
    pub price: Money,
    /// upfront amount; may exceed the price
    pub down_payment: Money,
    pub term_count: u32,
    pub term_unit: TermUnit,
    /// percentage, 12.0 for 12%
    pub interest_rate: Decimal,
    pub interest_rate_basis: InterestRateBasis,
}

impl LoanQuoteRequest {
    pub fn builder() -> LoanQuoteRequestBuilder {
        LoanQuoteRequestBuilder::new()
    }

    /// term expressed in months, `None` if years overflow the month count
    pub fn normalized_months(&self) -> Option<u32> {
        match self.term_unit {
            TermUnit::Months => Some(self.term_count),
            TermUnit::Years => self.term_count.checked_mul(MONTHS_PER_YEAR),
        }
    }

    /// per-period rate as a fraction (0.01 for 1% a month)
    pub fn monthly_rate(&self) -> Decimal {
        let fraction = self.interest_rate / Decimal::ONE_HUNDRED;
        match self.interest_rate_basis {
            InterestRateBasis::Monthly => fraction,
            InterestRateBasis::Yearly => fraction / Decimal::from(MONTHS_PER_YEAR),
        }
    }

    /// financed principal, never below zero
    pub fn loan_amount(&self) -> Money {
        (self.price - self.down_payment).max(Money::ZERO)
    }
}

/// builder for loan quote requests
#[derive(Debug, Clone, Default)]
pub struct LoanQuoteRequestBuilder {
    price: Option<Money>,
    down_payment: Option<Money>,
    term_count: Option<u32>,
    term_unit: Option<TermUnit>,
    interest_rate: Option<Decimal>,
    interest_rate_basis: Option<InterestRateBasis>,
}

impl LoanQuoteRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn down_payment(mut self, amount: Money) -> Self {
        self.down_payment = Some(amount);
        self
    }

    pub fn term(mut self, count: u32, unit: TermUnit) -> Self {
        self.term_count = Some(count);
        self.term_unit = Some(unit);
        self
    }

    pub fn term_months(self, months: u32) -> Self {
        self.term(months, TermUnit::Months)
    }

    pub fn term_years(self, years: u32) -> Self {
        self.term(years, TermUnit::Years)
    }

    pub fn interest_rate(mut self, rate: Decimal, basis: InterestRateBasis) -> Self {
        self.interest_rate = Some(rate);
        self.interest_rate_basis = Some(basis);
        self
    }

    pub fn yearly_rate(self, rate: Decimal) -> Self {
        self.interest_rate(rate, InterestRateBasis::Yearly)
    }

    pub fn monthly_rate(self, rate: Decimal) -> Self {
        self.interest_rate(rate, InterestRateBasis::Monthly)
    }

    /// build the request; validation is left to the engine
    pub fn build(self) -> LoanQuoteRequest {
        LoanQuoteRequest {
            price: self.price.unwrap_or(Money::ZERO),
            down_payment: self.down_payment.unwrap_or(Money::ZERO),
            term_count: self.term_count.unwrap_or(0),
            term_unit: self.term_unit.unwrap_or_default(),
            interest_rate: self.interest_rate.unwrap_or(Decimal::ZERO),
            interest_rate_basis: self.interest_rate_basis.unwrap_or_default(),
        }
    }
}

/// one period of a payment schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentScheduleEntry {
    /// 1-indexed period number
    pub period: u32,
    pub payment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    /// outstanding principal after this period
    pub remaining_balance: Money,
}

/// computed quote: level payment, totals and the full schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanQuoteResult {
    pub loan_amount: Money,
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    pub schedule: Vec<PaymentScheduleEntry>,
}

impl LoanQuoteResult {
    /// result for a purchase that is not financed at all
    pub fn not_financed() -> Self {
        Self {
            loan_amount: Money::ZERO,
            monthly_payment: Money::ZERO,
            total_interest: Money::ZERO,
            total_payment: Money::ZERO,
            schedule: Vec::new(),
        }
    }

    pub fn is_financed(&self) -> bool {
        !self.schedule.is_empty()
    }

    /// get entry for a 1-indexed period
    pub fn entry(&self, period: u32) -> Option<&PaymentScheduleEntry> {
        let index = period.checked_sub(1)?;
        self.schedule.get(index as usize)
    }

    /// balance after a period; period 0 is the opening loan amount
    pub fn balance_after(&self, period: u32) -> Option<Money> {
        if period == 0 {
            return Some(self.loan_amount);
        }
        self.entry(period).map(|e| e.remaining_balance)
    }

    /// last payment, which carries any rounding drift
    pub fn final_payment(&self) -> Option<Money> {
        self.schedule.last().map(|e| e.payment_amount)
    }
}
