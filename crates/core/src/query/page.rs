use serde::Serialize;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-indexed.
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Missing, non-numeric, or zero values fall back to the defaults.
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let per_page = parse_positive(per_page).unwrap_or(DEFAULT_PER_PAGE);
        Self { page, per_page }
    }

    pub fn paginate<T>(self, items: Vec<T>) -> Page<T> {
        let total_count = items.len();
        let total_pages = total_count.div_ceil(self.per_page.max(1));
        let start = self.page.saturating_sub(1).saturating_mul(self.per_page);

        let transactions = items
            .into_iter()
            .skip(start)
            .take(self.per_page)
            .collect();

        Page {
            transactions,
            total_count,
            total_pages,
            current_page: self.page,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n >= 1)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub transactions: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
}
