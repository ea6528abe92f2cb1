use clap::Parser;
use rain_harvest::core::ConfigProvider;
use rain_harvest::utils::error::ErrorSeverity;
use rain_harvest::utils::{logger, validation::Validate};
use rain_harvest::{
    CliConfig, HarvestError, HarvestForm, HttpRainfallPipeline, LookupOutcome, TomlConfig,
};

fn fail(e: HarvestError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn build_pipeline<C: ConfigProvider + Validate>(config: &C) -> HttpRainfallPipeline {
    if let Err(e) = config.validate() {
        fail(e);
    }
    HttpRainfallPipeline::from_config(config).unwrap_or_else(|e| fail(e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting rain-harvest");
    tracing::debug!("CLI config: {:?}", cli);

    let pipeline = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut file_config = TomlConfig::from_file(path).unwrap_or_else(|e| fail(e));
            cli.apply_overrides(&mut file_config);
            build_pipeline(&file_config)
        }
        None => build_pipeline(&cli),
    };

    let mut form = HarvestForm::new(cli.zip.clone(), cli.area.clone().unwrap_or_default());

    match &cli.rainfall {
        Some(rainfall) => {
            tracing::info!("Using entered rainfall of {} inches, skipping lookup", rainfall);
            form.rainfall = rainfall.clone();
        }
        None => match form.fetch_rainfall(&pipeline).await {
            LookupOutcome::Populated(rainfall) => {
                tracing::info!("🌧️ Rainfall field set to {} inches", rainfall);
            }
            LookupOutcome::Prompted(message) => {
                eprintln!("{}", message);
                std::process::exit(2);
            }
            LookupOutcome::Alerted(message) => {
                eprintln!("❌ {}", message);
                std::process::exit(1);
            }
        },
    }

    for line in form.summary() {
        println!("{}", line);
    }

    Ok(())
}
