use clap::Parser;
use email_harvester::core::fetcher::normalize_website;
use email_harvester::core::{ConfigProvider, Pipeline};
use email_harvester::utils::{
    logger,
    validation::{validate_existing_file, Validate},
};
use email_harvester::{
    CliConfig, EmailPipeline, HarvestEngine, HarvestError, HarvestSettings, HttpFetcher,
    LocalStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Input file: {}", config.input);
    tracing::info!("Output file: {}", config.output);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match prepare(&config) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let fetcher = match HttpFetcher::new(settings.fetch_settings()) {
        Ok(fetcher) => fetcher,
        Err(e) => exit_with(&e),
    };

    let pipeline = EmailPipeline::new(LocalStorage::default(), fetcher, settings);
    let engine = HarvestEngine::new(pipeline);

    if config.dry_run {
        tracing::info!("DRY RUN MODE - no requests will be sent");
        let table = match engine.pipeline().extract().await {
            Ok(table) => table,
            Err(e) => exit_with(&e),
        };
        for record in &table.records {
            match record.website().and_then(normalize_website) {
                Some(url) => println!("{}\t{}", record.name(), url),
                None => println!("{}\t(no website)", record.name()),
            }
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Completed! Results saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Email extraction failed: {}", e);
            exit_with(&e);
        }
    }

    Ok(())
}

fn prepare(config: &CliConfig) -> email_harvester::Result<HarvestSettings> {
    validate_existing_file(&config.input)?;
    let settings = config.resolve()?;
    settings.validate()?;
    Ok(settings)
}

fn exit_with(e: &HarvestError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
