use clap::Parser;
use std::time::Duration;
use vacancy_stats::config;
use vacancy_stats::domain::ports::VacancySource;
use vacancy_stats::report;
use vacancy_stats::utils::{logger, validation::Validate};
use vacancy_stats::{AppConfig, Cli, HeadHunterSource, Orchestrator, SalaryNormalizer, SuperJobSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting vacancy-stats");

    // .env is optional; the token check below is what decides.
    dotenvy::dotenv().ok();

    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    if cli.verbose {
        tracing::debug!("Effective config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Fatal before any network call, not a per-request failure.
    let token = match config::superjob_token() {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch.request_timeout_secs))
        .build()?;

    let sources: Vec<Box<dyn VacancySource>> = vec![
        Box::new(HeadHunterSource::new(
            client.clone(),
            config.headhunter.clone(),
            config.fetch.page_size,
        )),
        Box::new(SuperJobSource::new(
            client,
            config.superjob.clone(),
            config.fetch.page_size,
            token,
        )),
    ];

    let normalizer = SalaryNormalizer::new(&config.salary);
    let orchestrator = Orchestrator::new(sources, normalizer, cli.on_error, config.fetch.max_pages);

    match orchestrator.run(&config.languages).await {
        Ok(statistics) => {
            report::print_all(&statistics);
            tracing::info!("✅ Statistics collected for {} languages", config.languages.len());
        }
        Err(e) => {
            tracing::error!("❌ Statistics run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
