use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;

pub const SEED_BATCH_SIZE: usize = 50;
pub const SEED_YEAR: i32 = 2024;
pub const SEED_CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Food", "Books"];

/// Synthetic record destined for the `transactions` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTransaction {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub date_of_sale: DateTime<Utc>,
    pub sold: bool,
}

pub fn generate_batch<R: Rng + ?Sized>(rng: &mut R) -> Vec<SeedTransaction> {
    (0..SEED_BATCH_SIZE).map(|_| generate_one(rng)).collect()
}

pub fn generate_one<R: Rng + ?Sized>(rng: &mut R) -> SeedTransaction {
    let month: u32 = rng.gen_range(1..=12);
    let day: u32 = rng.gen_range(1..=28);
    let price: u32 = rng.gen_range(1..=500);
    let sold: bool = rng.gen_bool(0.5);
    let category = SEED_CATEGORIES[rng.gen_range(0..SEED_CATEGORIES.len())];

    // Day is capped at 28 so every month has it.
    let date_of_sale = NaiveDate::from_ymd_opt(SEED_YEAR, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default();

    SeedTransaction {
        title: format!("Product {}", rng.gen_range(0..100)),
        description: format!("Description for product {}", rng.gen_range(0..100)),
        price: f64::from(price),
        category: category.to_string(),
        date_of_sale,
        sold,
    }
}
