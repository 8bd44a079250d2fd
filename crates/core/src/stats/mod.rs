pub mod histogram;

use crate::domain::transaction::Transaction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_amount: f64,
    pub total_sold_items: usize,
    pub total_not_sold_items: usize,
}

/// Totals over already-filtered records. A missing price contributes nothing to the amount.
pub fn summarize(items: &[Transaction]) -> Statistics {
    items.iter().fold(Statistics::default(), |mut acc, tx| {
        acc.total_amount += tx.price.unwrap_or(0.0);
        if tx.sold {
            acc.total_sold_items += 1;
        } else {
            acc.total_not_sold_items += 1;
        }
        acc
    })
}
