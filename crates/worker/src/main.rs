use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "saleslens_worker")]
struct Args {
    /// Generate the seed batch and print it as JSON instead of writing to the database.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = saleslens_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if args.dry_run {
        let batch = saleslens_core::seed::generate_batch(&mut rand::thread_rng());
        println!("{}", serde_json::to_string_pretty(&batch)?);
        tracing::info!(dry_run = true, records = batch.len(), "seed batch generated");
        return Ok(());
    }

    let db_url = settings.require_database_url()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await
        .context("connect DATABASE_URL failed")?;

    saleslens_core::storage::migrate(&pool).await?;

    match saleslens_core::storage::transactions::seed_database(&pool).await {
        Ok(report) => {
            let stored =
                saleslens_core::storage::transactions::count_seed_batch(&pool, report.seed_batch_id)
                    .await?;
            tracing::info!(
                seed_batch_id = %report.seed_batch_id,
                inserted = report.inserted,
                stored,
                "database seeded"
            );
        }
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %format!("{err:#}"), "seeding failed");
            return Err(err);
        }
    }

    Ok(())
}

fn init_sentry(settings: &saleslens_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_defaults_off() {
        let args = Args::try_parse_from(["saleslens_worker"]).unwrap();
        assert!(!args.dry_run);

        let args = Args::try_parse_from(["saleslens_worker", "--dry-run"]).unwrap();
        assert!(args.dry_run);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["saleslens_worker", "--as-of-date", "2024-01-01"]).is_err());
    }
}
