use anyhow::Result;
use tracing::info;

use job_tracker::config::Config;
use job_tracker::notify::MailNotifier;
use job_tracker::pipeline;
use job_tracker::scrapers;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env();
    info!("keywords: {:?}", config.keywords);
    info!("locations: {:?}", config.locations);

    let scrapers = scrapers::registry(&config)?;
    let notifier = MailNotifier::new(config.mail.clone());

    let summary = pipeline::run(
        &scrapers,
        &notifier,
        &config.keywords,
        &config.locations,
        &config.sent_jobs_path,
    )?;

    info!(
        "run complete: {} plugins, {} scraped, {} matched, {} delivered",
        summary.plugins, summary.scraped, summary.matched, summary.delivered
    );

    Ok(())
}
