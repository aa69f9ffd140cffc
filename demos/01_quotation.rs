/// quotation screen - catalog terms, slider moves and a json export
use loan_quote_rs::{FinancingTerms, Quotation, QuoteSelection, ScheduleExport};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let terms = FinancingTerms::from_json(
        r#"{
            "product_id": "6f1c1a0e-2b7d-4c55-9a4e-7d0b2b9f3e11",
            "price": "2450000.00",
            "max_term": 5,
            "term_unit": "years",
            "interest_rate": "10.5",
            "interest_rate_basis": "yearly",
            "minimum_down_payment_percentage": "15"
        }"#,
    )?;

    // initial slider position
    let quote = Quotation::prepare(&terms, &QuoteSelection::defaults_for(&terms))?;
    println!("{:#?}", quote.summary());

    // customer drags both sliders
    let moved = quote.reselect(&QuoteSelection::new(
        terms.price.percentage(30.into()),
        3,
    ))?;
    println!("{:#?}", moved.summary());

    println!("{}", ScheduleExport::from_result(&moved.result).to_json()?);

    Ok(())
}
