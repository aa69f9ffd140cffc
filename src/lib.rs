pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod export;
pub mod pos;
pub mod quotation;
pub mod types;

// re-export key types
pub use config::{FinancingTerms, QuoteSelection};
pub use decimal::{Money, MONEY_DP, ROUNDING_STRATEGY};
pub use engine::{compute_schedule, AmortizationEngine, MAX_TERM_MONTHS};
pub use errors::{AmortizationError, QuoteError, Result};
pub use export::{ScheduleExport, ScheduleRow, TotalsRow};
pub use pos::{auto_fill_amount, CashAutoFill, PaymentType};
pub use quotation::{QuoteSummary, Quotation};
pub use types::{
    InterestRateBasis, LoanQuoteRequest, LoanQuoteRequestBuilder, LoanQuoteResult,
    PaymentScheduleEntry, TermUnit,
};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
