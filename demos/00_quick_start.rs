/// quick start - compute a payment schedule for a financed item
use loan_quote_rs::{compute_schedule, Decimal, LoanQuoteRequest, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = LoanQuoteRequest::builder()
        .price(Money::from_major(1_000_000))
        .down_payment(Money::from_major(200_000))
        .term_months(12)
        .yearly_rate(Decimal::from(12))
        .build();

    let result = compute_schedule(&request)?;

    println!("loan amount:     {}", result.loan_amount);
    println!("monthly payment: {}", result.monthly_payment);
    for entry in &result.schedule {
        println!(
            "{:>3}  {:>12}  {:>10}  {:>12}  {:>12}",
            entry.period,
            entry.payment_amount,
            entry.interest_portion,
            entry.principal_portion,
            entry.remaining_balance
        );
    }
    println!("total interest:  {}", result.total_interest);
    println!("total payment:   {}", result.total_payment);

    Ok(())
}
