use crate::domain::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed price ranges, upper bound inclusive. Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBucket {
    UpTo50,
    UpTo100,
    UpTo200,
    UpTo500,
    Above500,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 5] = [
        PriceBucket::UpTo50,
        PriceBucket::UpTo100,
        PriceBucket::UpTo200,
        PriceBucket::UpTo500,
        PriceBucket::Above500,
    ];

    pub fn for_price(price: f64) -> Option<Self> {
        if price.is_nan() {
            return None;
        }
        Some(if price <= 50.0 {
            Self::UpTo50
        } else if price <= 100.0 {
            Self::UpTo100
        } else if price <= 200.0 {
            Self::UpTo200
        } else if price <= 500.0 {
            Self::UpTo500
        } else {
            Self::Above500
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo50 => "0-50",
            Self::UpTo100 => "51-100",
            Self::UpTo200 => "101-200",
            Self::UpTo500 => "201-500",
            Self::Above500 => "500+",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRangeCount {
    pub range: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Always five entries, zero counts included. Records without a price are skipped.
pub fn price_histogram(items: &[Transaction]) -> Vec<PriceRangeCount> {
    let mut counts = [0usize; PriceBucket::ALL.len()];
    for bucket in items
        .iter()
        .filter_map(|tx| tx.price)
        .filter_map(PriceBucket::for_price)
    {
        counts[bucket.index()] += 1;
    }

    PriceBucket::ALL
        .iter()
        .map(|b| PriceRangeCount {
            range: b.label().to_string(),
            count: counts[b.index()],
        })
        .collect()
}

/// One entry per observed category, in first-seen order.
pub fn category_histogram(items: &[Transaction]) -> Vec<CategoryCount> {
    let mut out: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for category in items.iter().filter_map(Transaction::category_label) {
        match index.get(category) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(category, out.len());
                out.push(CategoryCount {
                    category: category.to_string(),
                    count: 1,
                });
            }
        }
    }

    out
}
