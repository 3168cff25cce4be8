//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::NaiveDate;

/// Format a date the way event cards show it, e.g. "Sep 12, 2026"
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a date the way the detail page shows it, e.g. "Saturday, September 12, 2026"
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Derive host initials from a host name: first character of each
/// whitespace-separated token, as typed ("John Smith" -> "JS")
pub fn host_initials(host: &str) -> String {
    host.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// "s" when the count calls for a plural, e.g. "3 Events" / "1 Event"
pub fn plural_suffix(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Number of pages needed for `total_items`, never less than 1
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Half-open index range of the items shown on `page` (1-based)
pub fn page_bounds(page: usize, page_size: usize, total_items: usize) -> (usize, usize) {
    let start = page.saturating_sub(1) * page_size;
    let end = (start + page_size).min(total_items);
    (start.min(total_items), end)
}

/// Create a pagination info string
pub fn pagination_info(current_page: usize, total_pages: usize, total_items: usize) -> String {
    if total_pages <= 1 {
        format!("Total: {}", total_items)
    } else {
        format!(
            "Page {} of {} (Total: {})",
            current_page, total_pages, total_items
        )
    }
}
