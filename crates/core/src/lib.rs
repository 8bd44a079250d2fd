pub mod domain;
pub mod query;
pub mod seed;
pub mod source;
pub mod stats;
pub mod storage;

#[cfg(test)]
pub(crate) mod testutil;

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_SOURCE_URL: &str =
        "https://s3.amazonaws.com/roxiler.com/product_transaction.json";
    pub const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 30;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub database_url: Option<String>,
        pub sentry_dsn: Option<String>,
        pub source_url: String,
        pub source_timeout_secs: u64,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let source_timeout_secs = match std::env::var("TRANSACTIONS_SOURCE_TIMEOUT_SECS") {
                Ok(s) => s
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("invalid TRANSACTIONS_SOURCE_TIMEOUT_SECS: {s}"))?,
                Err(_) => DEFAULT_SOURCE_TIMEOUT_SECS,
            };
            anyhow::ensure!(
                source_timeout_secs >= 1,
                "TRANSACTIONS_SOURCE_TIMEOUT_SECS must be >= 1"
            );

            Ok(Self {
                database_url: std::env::var("DATABASE_URL").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                source_url: std::env::var("TRANSACTIONS_SOURCE_URL")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()),
                source_timeout_secs,
            })
        }

        pub fn require_database_url(&self) -> anyhow::Result<&str> {
            self.database_url
                .as_deref()
                .context("DATABASE_URL is required")
        }
    }
}
