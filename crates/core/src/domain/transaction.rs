use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One product transaction as served by the upstream dataset.
///
/// Fields this service does not interpret (`id`, `image`, ...) are kept in `extra`
/// so listing responses pass them through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(with = "sale_date")]
    pub date_of_sale: DateTime<FixedOffset>,
    #[serde(default)]
    pub sold: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transaction {
    /// Calendar month (1..=12) of the sale, read in the offset the date was written with.
    pub fn month(&self) -> u32 {
        self.date_of_sale.month()
    }

    /// Category label, treating an empty string the same as a missing one.
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// `needle_lower` must already be lowercased.
    pub fn mentions(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

pub mod sale_date {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (UTC) or a bare date (midnight UTC).
    pub fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc().fixed_offset());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc().fixed_offset())
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid dateOfSale: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_upstream_row_and_keeps_unknown_fields() {
        let v = json!({
            "id": 1,
            "title": "Fjallraven  - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 329.85,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "sold": false,
            "dateOfSale": "2021-11-27T20:29:54+05:30"
        });

        let tx: Transaction = serde_json::from_value(v).unwrap();
        assert_eq!(tx.month(), 11);
        assert_eq!(tx.price, Some(329.85));
        assert_eq!(tx.category_label(), Some("men's clothing"));
        assert_eq!(tx.extra.get("id"), Some(&json!(1)));

        let back = serde_json::to_value(&tx).unwrap();
        assert_eq!(back["image"], json!("https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg"));
        assert_eq!(back["dateOfSale"], json!("2021-11-27T20:29:54+05:30"));
    }

    #[test]
    fn month_follows_the_written_offset() {
        // 2021-12-31T23:30 at -05:00 is already January in UTC.
        let dt = sale_date::parse("2021-12-31T23:30:00-05:00").unwrap();
        assert_eq!(dt.month(), 12);
    }

    #[test]
    fn accepts_naive_and_date_only_forms() {
        assert_eq!(sale_date::parse("2024-03-05T10:00:00").unwrap().month(), 3);
        assert_eq!(sale_date::parse("2024-03-05T10:00:00.125").unwrap().month(), 3);
        assert_eq!(sale_date::parse("2024-07-01").unwrap().month(), 7);
        assert!(sale_date::parse("last tuesday").is_none());
    }

    #[test]
    fn missing_optional_fields_default() {
        let v = json!({"title": "t", "dateOfSale": "2022-01-02"});
        let tx: Transaction = serde_json::from_value(v).unwrap();
        assert_eq!(tx.price, None);
        assert!(!tx.sold);
        assert_eq!(tx.category_label(), None);
    }

    #[test]
    fn empty_category_is_treated_as_missing() {
        let v = json!({"category": "", "dateOfSale": "2022-01-02"});
        let tx: Transaction = serde_json::from_value(v).unwrap();
        assert_eq!(tx.category_label(), None);
    }

    #[test]
    fn mentions_is_case_insensitive_over_title_and_description() {
        let v = json!({
            "title": "Solid Gold Petite Micropave",
            "description": "Satisfaction Guaranteed",
            "dateOfSale": "2022-01-02"
        });
        let tx: Transaction = serde_json::from_value(v).unwrap();
        assert!(tx.mentions("gold"));
        assert!(tx.mentions("guaranteed"));
        assert!(!tx.mentions("silver"));
    }
}
