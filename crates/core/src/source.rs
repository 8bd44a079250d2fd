use crate::config::Settings;
use crate::domain::transaction::Transaction;
use anyhow::{Context, Result};
use std::time::Duration;

#[async_trait::async_trait]
pub trait TransactionSource: Send + Sync {
    fn source_name(&self) -> &'static str;

    /// Fetches the full dataset. Nothing is cached between calls.
    async fn fetch_all(&self) -> Result<Vec<Transaction>>;
}

#[derive(Debug, Clone)]
pub struct HttpTransactionSource {
    http: reqwest::Client,
    url: String,
}

impl HttpTransactionSource {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            settings.source_url.clone(),
            Duration::from_secs(settings.source_timeout_secs),
        )
    }

    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        anyhow::ensure!(!url.trim().is_empty(), "transactions source url must be non-empty");

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build transactions source http client")?;

        Ok(Self { http, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl TransactionSource for HttpTransactionSource {
    fn source_name(&self) -> &'static str {
        "remote_json"
    }

    async fn fetch_all(&self) -> Result<Vec<Transaction>> {
        let t0 = std::time::Instant::now();
        let res = self
            .http
            .get(&self.url)
            .send()
            .await
            .context("transactions source request failed")?;

        let status = res.status();
        let text = res
            .text()
            .await
            .context("failed to read transactions source response")?;

        if !status.is_success() {
            anyhow::bail!("transactions source HTTP {status}: {}", truncate(&text, 256));
        }

        let items = parse_dataset(&text)?;

        tracing::debug!(
            url = %self.url,
            records = items.len(),
            elapsed_ms = t0.elapsed().as_millis(),
            "fetched transactions dataset"
        );
        Ok(items)
    }
}

/// Fixed in-memory dataset; each fetch hands out a fresh copy.
#[derive(Debug, Clone, Default)]
pub struct StaticTransactionSource {
    items: Vec<Transaction>,
}

impl StaticTransactionSource {
    pub fn new(items: Vec<Transaction>) -> Self {
        Self { items }
    }
}

#[async_trait::async_trait]
impl TransactionSource for StaticTransactionSource {
    fn source_name(&self) -> &'static str {
        "static"
    }

    async fn fetch_all(&self) -> Result<Vec<Transaction>> {
        Ok(self.items.clone())
    }
}

pub fn parse_dataset(text: &str) -> Result<Vec<Transaction>> {
    serde_json::from_str::<Vec<Transaction>>(text)
        .context("transactions source response is not a JSON array of transactions")
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dataset_array() {
        let text = r#"[
            {"id": 1, "title": "A", "description": "a", "price": 10, "category": "x",
             "sold": true, "dateOfSale": "2021-09-27T20:29:54+05:30"},
            {"id": 2, "title": "B", "description": "b", "price": 5.5, "category": "y",
             "sold": false, "dateOfSale": "2022-01-27T20:29:54+05:30"}
        ]"#;
        let items = parse_dataset(text).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price, Some(10.0));
        assert_eq!(items[1].month(), 1);
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = parse_dataset(r#"{"message": "AccessDenied"}"#).unwrap_err();
        assert!(format!("{err:#}").contains("not a JSON array"));
    }

    #[test]
    fn rejects_unparseable_dates() {
        assert!(parse_dataset(r#"[{"title": "A", "dateOfSale": "soon"}]"#).is_err());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 10), "hi");
    }

    #[test]
    fn rejects_blank_url() {
        assert!(HttpTransactionSource::new("  ".to_string(), Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn static_source_returns_a_fresh_copy_each_time() {
        let src = StaticTransactionSource::new(parse_dataset(
            r#"[{"title": "A", "dateOfSale": "2022-01-01"}]"#,
        )
        .unwrap());
        let mut first = src.fetch_all().await.unwrap();
        first.clear();
        assert_eq!(src.fetch_all().await.unwrap().len(), 1);
    }
}
