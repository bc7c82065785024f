//! HTML rendering
//!
//! Pages are built as plain strings:
//! - `layout`: document shell, fonts and favicons
//! - `page`: collection page, index and not-found page
//! - `moment`: a single decorated moment card

pub mod layout;
pub mod moment;
pub mod page;

pub use page::{render_collection_page, render_index, render_not_found};

use chrono::{DateTime, Utc};

/// Escape text for use in HTML content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// "June 1, 2024"
pub fn long_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Saturday, June 1, 2024"
pub fn full_date(date: &DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "June 1"
pub fn month_day(date: &DateTime<Utc>) -> String {
    date.format("%B %-d").to_string()
}
