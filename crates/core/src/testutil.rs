use crate::domain::transaction::{sale_date, Transaction};
use serde_json::Map;

pub fn tx(title: &str, price: f64, date: &str, sold: bool) -> Transaction {
    Transaction {
        title: title.to_string(),
        description: format!("{title} description"),
        price: Some(price),
        category: None,
        date_of_sale: sale_date::parse(date).unwrap(),
        sold,
        extra: Map::new(),
    }
}

pub fn with_category(mut t: Transaction, category: &str) -> Transaction {
    t.category = Some(category.to_string());
    t
}
