//! serializable schedule views for spreadsheet and pdf formatters
use serde::{Deserialize, Serialize};

use crate::errors::QuoteError;
use crate::types::{LoanQuoteResult, PaymentScheduleEntry};

/// One printable schedule row.
///
/// Amounts are the engine's own 2-place values rendered verbatim; formatters
/// add currency symbols and separators but must not re-round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub payment_amount: String,
    pub interest_portion: String,
    pub principal_portion: String,
    pub remaining_balance: String,
}

impl From<&PaymentScheduleEntry> for ScheduleRow {
    fn from(entry: &PaymentScheduleEntry) -> Self {
        ScheduleRow {
            period: entry.period,
            payment_amount: entry.payment_amount.to_string(),
            interest_portion: entry.interest_portion.to_string(),
            principal_portion: entry.principal_portion.to_string(),
            remaining_balance: entry.remaining_balance.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsRow {
    pub loan_amount: String,
    pub monthly_payment: String,
    pub total_interest: String,
    pub total_payment: String,
}

/// full export of a computed quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleExport {
    pub rows: Vec<ScheduleRow>,
    pub totals: TotalsRow,
}

impl ScheduleExport {
    pub fn from_result(result: &LoanQuoteResult) -> Self {
        ScheduleExport {
            rows: result.schedule.iter().map(ScheduleRow::from).collect(),
            totals: TotalsRow {
                loan_amount: result.loan_amount.to_string(),
                monthly_payment: result.monthly_payment.to_string(),
                total_interest: result.total_interest.to_string(),
                total_payment: result.total_payment.to_string(),
            },
        }
    }

    pub fn column_headers() -> [&'static str; 5] {
        ["period", "payment", "interest", "principal", "balance"]
    }

    pub fn to_json(&self) -> Result<String, QuoteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::engine::compute_schedule;
    use crate::types::LoanQuoteRequest;
    use rust_decimal_macros::dec;

    fn result() -> LoanQuoteResult {
        let request = LoanQuoteRequest::builder()
            .price(Money::from_major(1_000_000))
            .down_payment(Money::from_major(200_000))
            .term_months(12)
            .yearly_rate(dec!(12))
            .build();
        compute_schedule(&request).unwrap()
    }

    #[test]
    fn test_rows_are_verbatim() {
        let result = result();
        let export = ScheduleExport::from_result(&result);

        assert_eq!(export.rows.len(), result.schedule.len());
        for (row, entry) in export.rows.iter().zip(&result.schedule) {
            assert_eq!(row.period, entry.period);
            assert_eq!(Money::from_str_exact(&row.payment_amount).unwrap(), entry.payment_amount);
            assert_eq!(Money::from_str_exact(&row.principal_portion).unwrap(), entry.principal_portion);
        }

        assert_eq!(export.rows[0].interest_portion, "8000.00");
        assert_eq!(export.rows[11].payment_amount, "71079.04");
        assert_eq!(export.rows[11].remaining_balance, "0.00");
        assert_eq!(export.totals.loan_amount, "800000.00");
        assert_eq!(export.totals.total_interest, "52948.37");
    }

    #[test]
    fn test_json_export() {
        let export = ScheduleExport::from_result(&result());
        let json: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();

        assert_eq!(json["rows"].as_array().map(|r| r.len()), Some(12));
        assert_eq!(json["rows"][0]["period"], 1);
        assert_eq!(json["totals"]["monthly_payment"], "71079.03");
    }

    #[test]
    fn test_unfinanced_export() {
        let export = ScheduleExport::from_result(&LoanQuoteResult::not_financed());
        assert!(export.rows.is_empty());
        assert_eq!(export.totals.total_payment, "0.00");
        assert_eq!(ScheduleExport::column_headers().len(), 5);
    }
}
