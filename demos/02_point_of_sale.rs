/// point of sale - pre-fill the cash field from a quote
use loan_quote_rs::{
    compute_schedule, CashAutoFill, Decimal, LoanQuoteRequest, Money, PaymentType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = LoanQuoteRequest::builder()
        .price(Money::from_str_exact("185000.00")?)
        .down_payment(Money::from_str_exact("35000.00")?)
        .term_months(18)
        .monthly_rate(Decimal::new(15, 1))
        .build();
    let result = compute_schedule(&request)?;

    for payment_type in [
        PaymentType::DownPayment,
        PaymentType::Installment,
        PaymentType::FullPayment,
    ] {
        let fill = CashAutoFill::new(&request, &result, payment_type);
        println!("{:?}: {}", fill.payment_type, fill.amount);
    }

    Ok(())
}
