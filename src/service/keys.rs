//! Page cache key schema
//!
//! Every cached order page lives under the `orders:` namespace; a mutation
//! clears the whole namespace with [`ORDERS_KEY_PATTERN`].

/// Orders per page.
pub const PAGE_SIZE: u64 = 20;

/// Glob covering every cached order page.
pub const ORDERS_KEY_PATTERN: &str = "orders:*";

const PAGE_KEY_PREFIX: &str = "orders:page:";

/// Cache key for one page of the order list.
pub fn page_cache_key(page: u32) -> String {
    format!("{}{}", PAGE_KEY_PREFIX, page)
}

/// Interprets a raw `page` query value.
///
/// Missing, non-numeric, zero and negative values all mean page 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

/// Store window for a 1-indexed page as `(offset, limit)`.
///
/// Rows `offset..=offset + limit - 1` in id-descending order.
pub fn page_window(page: u32) -> (u64, u64) {
    let page = u64::from(page.max(1));
    ((page - 1) * PAGE_SIZE, PAGE_SIZE)
}
