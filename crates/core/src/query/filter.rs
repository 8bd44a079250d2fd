use crate::domain::month::Month;
use crate::domain::transaction::Transaction;

/// Optional month and free-text predicates, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub month: Option<Month>,
    /// Matched case-insensitively against title and description. Not trimmed.
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn by_month(month: Month) -> Self {
        Self {
            month: Some(month),
            search: None,
        }
    }

    /// Keeps matching records in their original order.
    pub fn apply(&self, items: Vec<Transaction>) -> Vec<Transaction> {
        let needle = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        items
            .into_iter()
            .filter(|tx| self.month.map_or(true, |m| m.matches(tx)))
            .filter(|tx| needle.as_deref().map_or(true, |n| tx.mentions(n)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::tx;

    fn dataset() -> Vec<Transaction> {
        vec![
            tx("Backpack", 109.95, "2021-11-27T20:29:54+05:30", false),
            tx("Mens Casual T-Shirt", 22.3, "2021-10-27T20:29:54+05:30", true),
            tx("Cotton Jacket", 55.99, "2022-11-27T20:29:54+05:30", true),
            tx("Gold Bracelet", 695.0, "2022-03-27T20:29:54+05:30", false),
        ]
    }

    #[test]
    fn no_predicates_keeps_everything() {
        let out = TransactionFilter::default().apply(dataset());
        assert_eq!(out, dataset());
    }

    #[test]
    fn month_ignores_year_and_preserves_order() {
        let out = TransactionFilter::by_month(Month::new(11).unwrap()).apply(dataset());
        let titles: Vec<_> = out.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Backpack", "Cotton Jacket"]);
        assert!(out.iter().all(|t| t.month() == 11));
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let f = TransactionFilter {
            month: None,
            search: Some("JACKET".to_string()),
        };
        let out = f.apply(dataset());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Cotton Jacket");

        // The fixture description is "<title> description".
        let f = TransactionFilter {
            month: None,
            search: Some("DESCRIPTION".to_string()),
        };
        assert_eq!(f.apply(dataset()).len(), 4);
    }

    #[test]
    fn empty_search_is_no_filter() {
        let f = TransactionFilter {
            month: None,
            search: Some(String::new()),
        };
        assert_eq!(f.apply(dataset()).len(), 4);
    }

    #[test]
    fn search_is_not_trimmed() {
        let f = TransactionFilter {
            month: None,
            search: Some(" backpack".to_string()),
        };
        assert!(f.apply(dataset()).is_empty());
    }

    #[test]
    fn predicates_compose_with_and() {
        let f = TransactionFilter {
            month: Month::new(11),
            search: Some("t".to_string()),
        };
        let titles: Vec<_> = f.apply(dataset()).into_iter().map(|t| t.title).collect();
        // Both November rows contain "t" in their description.
        assert_eq!(titles, vec!["Backpack", "Cotton Jacket"]);

        let f = TransactionFilter {
            month: Month::new(11),
            search: Some("bracelet".to_string()),
        };
        assert!(f.apply(dataset()).is_empty());
    }
}
