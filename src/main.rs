use billable_weight::utils::{logger, validation::Validate};
use billable_weight::{
    BillableWeightCalculator, BillingError, CliConfig, OutputFormat, PackageDimensions, Weight,
};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "Billing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }
}

fn run(config: &CliConfig) -> Result<String, BillingError> {
    config.validate()?;
    let (limits, carrier) = config.resolve()?;

    let dimensions =
        PackageDimensions::with_limits(config.width, config.height, config.length, &limits)?;
    let weight = Weight::with_limits(config.weight, &limits)?;

    let quote = BillableWeightCalculator::new().quote(&dimensions, &weight, carrier);
    tracing::info!(
        "Billed {} with divisor {}: {} lb",
        carrier,
        carrier.value(),
        quote.billable_weight
    );

    let output = match config.format {
        OutputFormat::Text => format!("{} lb", quote.billable_weight),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "dimensions": dimensions,
            "carrier": carrier,
            "divisor": carrier.value(),
            "actual_weight": quote.actual_weight,
            "dimensional_weight": quote.dimensional_weight,
            "billable_weight": quote.billable_weight,
        }))?,
    };

    Ok(output)
}
