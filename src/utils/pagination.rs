// src/utils/pagination.rs

/// Fixed page size for every paginated question listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parses the raw `?page=` value. Absent or non-numeric input means page 1.
pub fn page_number(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}

/// Returns the 1-based `page` of `items`.
///
/// Out-of-range pages (including anything below 1) yield an empty slice;
/// deciding whether that is an error is left to the caller.
pub fn paginate<T>(page: i64, items: &[T]) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);

    if start >= items.len() {
        return &[];
    }

    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
