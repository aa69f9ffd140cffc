use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::decimal::Money;
use crate::errors::{AmortizationError, Result};
use crate::types::{LoanQuoteRequest, LoanQuoteResult, PaymentScheduleEntry};

/// longest schedule the engine will produce (100 years of monthly periods)
pub const MAX_TERM_MONTHS: u32 = 1_200;

/// Level-payment amortization engine.
///
/// Stateless: every call builds a fresh [`LoanQuoteResult`] from the request
/// alone, so one engine can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizationEngine;

impl AmortizationEngine {
    pub fn new() -> Self {
        Self
    }

    /// validate a request and compute its full payment schedule
    pub fn compute_schedule(&self, request: &LoanQuoteRequest) -> Result<LoanQuoteResult> {
        let months = validate(request)?;
        let monthly_rate = request.monthly_rate();
        let loan_amount = request.loan_amount();

        if loan_amount.is_zero() {
            debug!(
                price = %request.price,
                down_payment = %request.down_payment,
                "down payment covers price, nothing financed"
            );
            return Ok(LoanQuoteResult::not_financed());
        }

        // a non-negative rate can still be too large to amortize in decimal range
        let unrepresentable = AmortizationError::InvalidRate {
            rate: request.interest_rate,
        };

        let monthly_payment = level_payment(loan_amount, monthly_rate, months)
            .ok_or_else(|| unrepresentable.clone())?;

        let schedule = build_schedule(loan_amount, monthly_rate, monthly_payment, months)
            .ok_or_else(|| unrepresentable.clone())?;

        let total_interest = checked_total(schedule.iter().map(|e| e.interest_portion))
            .ok_or_else(|| unrepresentable.clone())?;
        let total_payment = checked_total(schedule.iter().map(|e| e.payment_amount))
            .ok_or(unrepresentable)?;

        debug!(
            %loan_amount,
            months,
            %monthly_rate,
            %monthly_payment,
            %total_interest,
            "computed amortization schedule"
        );

        Ok(LoanQuoteResult {
            loan_amount,
            monthly_payment,
            total_interest,
            total_payment,
            schedule,
        })
    }

    /// Shortest term whose level payment fits within `budget`.
    ///
    /// Level payments never grow with the term, so this is a binary search
    /// over `1..=MAX_TERM_MONTHS`. `None` when even the longest term costs
    /// more than the budget.
    pub fn shortest_term_for_payment(
        &self,
        loan_amount: Money,
        monthly_rate: Decimal,
        budget: Money,
    ) -> Option<u32> {
        if loan_amount.is_negative() || monthly_rate < Decimal::ZERO {
            return None;
        }
        if loan_amount.is_zero() {
            return Some(0);
        }

        let fits = |months: u32| {
            level_payment(loan_amount, monthly_rate, months).is_some_and(|p| p <= budget)
        };
        if !fits(MAX_TERM_MONTHS) {
            return None;
        }

        let (mut low, mut high) = (1, MAX_TERM_MONTHS);
        while low < high {
            let mid = low + (high - low) / 2;
            if fits(mid) {
                high = mid;
            } else {
                low = mid + 1;
            }
        }

        Some(low)
    }
}

/// compute a schedule with a throwaway engine
pub fn compute_schedule(request: &LoanQuoteRequest) -> Result<LoanQuoteResult> {
    AmortizationEngine::new().compute_schedule(request)
}

/// reject malformed requests, returning the normalized month count
fn validate(request: &LoanQuoteRequest) -> Result<u32> {
    if request.price.is_negative() || request.down_payment.is_negative() {
        debug!(price = %request.price, down_payment = %request.down_payment, "rejected principal");
        return Err(AmortizationError::InvalidPrincipal {
            price: request.price,
            down_payment: request.down_payment,
        });
    }

    let months = request
        .normalized_months()
        .filter(|m| (1..=MAX_TERM_MONTHS).contains(m))
        .ok_or(AmortizationError::InvalidTerm {
            term_count: request.term_count,
            term_unit: request.term_unit,
        })?;

    if request.interest_rate < Decimal::ZERO {
        return Err(AmortizationError::InvalidRate {
            rate: request.interest_rate,
        });
    }

    Ok(months)
}

/// Level payment rounded to cents.
///
/// P * r(1+r)^n / ((1+r)^n - 1), or P / n when r is zero.
/// `None` only when the payment itself is beyond the decimal range.
fn level_payment(loan_amount: Money, monthly_rate: Decimal, months: u32) -> Option<Money> {
    if monthly_rate.is_zero() {
        return Some(loan_amount.div_rounded(Decimal::from(months)));
    }

    let annuity = match compound_factor(monthly_rate, months) {
        Some(compound) => {
            let growth = compound - Decimal::ONE;
            if growth.is_zero() {
                // rate too small to register over this term
                return Some(loan_amount.div_rounded(Decimal::from(months)));
            }
            compound.checked_div(growth)?.checked_mul(monthly_rate)?
        }
        // (1+r)^n beyond decimal range, so (1+r)^n / ((1+r)^n - 1) is 1
        None => monthly_rate,
    };

    loan_amount
        .as_decimal()
        .checked_mul(annuity)
        .map(Money::from_decimal)
}

/// (1+r)^n by repeated multiplication, `None` on overflow
fn compound_factor(monthly_rate: Decimal, months: u32) -> Option<Decimal> {
    let base = Decimal::ONE + monthly_rate;
    let mut compound = Decimal::ONE;
    for _ in 0..months {
        compound = compound.checked_mul(base)?;
    }
    Some(compound)
}

/// sum of amounts, `None` past the decimal range
fn checked_total(mut amounts: impl Iterator<Item = Money>) -> Option<Money> {
    amounts.try_fold(Money::ZERO, |acc, x| acc.checked_add(x))
}

/// `None` when an amount leaves the decimal range
fn build_schedule(
    loan_amount: Money,
    monthly_rate: Decimal,
    monthly_payment: Money,
    months: u32,
) -> Option<Vec<PaymentScheduleEntry>> {
    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = loan_amount;

    for period in 1..=months {
        let interest_portion = balance.checked_mul_rounded(monthly_rate)?;

        let principal_portion = if period == months {
            // final period absorbs all rounding drift
            balance
        } else {
            let level = (monthly_payment - interest_portion).max(Money::ZERO);
            if level > balance {
                trace!(period, %level, %balance, "principal capped at remaining balance");
            }
            level.min(balance)
        };

        // equals the level payment unless this is the final or a capped period
        let payment_amount = principal_portion.checked_add(interest_portion)?;
        balance = (balance - principal_portion).max(Money::ZERO);

        schedule.push(PaymentScheduleEntry {
            period,
            payment_amount,
            interest_portion,
            principal_portion,
            remaining_balance: balance,
        });
    }

    Some(schedule)
}
