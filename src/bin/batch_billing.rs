use billable_weight::domain::ReportFormat;
use billable_weight::utils::validation::{validate_required_field, Validate};
use billable_weight::utils::logger;
use billable_weight::{BatchBilling, BillingConfig, BillingError, CsvManifest, FileReportSink};
use clap::Parser;

#[derive(Parser)]
#[command(name = "batch-billing")]
#[command(about = "Compute billable weights for a CSV manifest of packages")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "billing.toml")]
    config: String,

    /// Override the manifest path from config
    #[arg(short, long)]
    input: Option<String>,

    /// Override the output directory from config
    #[arg(short, long)]
    output: Option<String>,

    /// Override the report format from config
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Loading configuration from: {}", args.config);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    tracing::info!("Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("DRY RUN MODE - No packages will be billed");
        return;
    }

    if let Err(e) = run(&config) {
        fail(&e);
    }
}

fn load_config(args: &Args) -> Result<BillingConfig, BillingError> {
    let mut config = BillingConfig::from_file(&args.config)?;

    if let Some(input) = &args.input {
        config.input.manifest = Some(input.clone());
        tracing::info!("Manifest overridden to: {}", input);
    }
    if let Some(output) = &args.output {
        config.output.path = output.clone();
        tracing::info!("Output path overridden to: {}", output);
    }
    if let Some(format) = args.format {
        config.output.format = format;
        tracing::info!("Report format overridden to: {}", format);
    }

    config.validate()?;
    validate_required_field("input.manifest", &config.input.manifest)?;
    Ok(config)
}

fn run(config: &BillingConfig) -> Result<(), BillingError> {
    let manifest = validate_required_field("input.manifest", &config.input.manifest)?;
    let settings = config.batch_settings()?;

    let engine = BatchBilling::new(
        CsvManifest::new(manifest),
        FileReportSink::new(&config.output.path),
        settings,
    );
    let (report, destination) = engine.run()?;

    println!(
        "Billed {} packages ({} rejected), total billable weight {} lb",
        report.lines.len(),
        report.rejected.len(),
        report.total_billable_weight
    );
    println!("Report saved to: {}", destination);
    Ok(())
}

fn fail(e: &BillingError) -> ! {
    tracing::error!(
        "Batch billing failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

fn display_config_summary(config: &BillingConfig, args: &Args) {
    println!("Configuration Summary:");
    println!("  Manifest: {}", config.input.manifest.as_deref().unwrap_or("-"));
    println!("  Output: {} ({})", config.output.path, config.output.format);
    println!("  Default carrier: {}", config.billing.default_carrier);
    println!("  Invalid rows: {:?}", config.billing.on_invalid);
    println!(
        "  Limits: width <= {}, height <= {}, length <= {}, weight <= {}",
        config.limits.max_width,
        config.limits.max_height,
        config.limits.max_length,
        config.limits.max_weight
    );

    if args.dry_run {
        println!("  DRY RUN MODE ENABLED");
    }

    println!();
}
