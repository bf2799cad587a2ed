//! Shared value formatters used by the list and detail renderers.

use chrono::NaiveDate;

use crate::domain::customer::{Address, Email, Phone};

/// Placeholder rendered for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Renders an ISO date string as a long localized form, `January 5, 1990`.
/// Empty or unparseable input renders as `N/A` instead of failing.
#[must_use]
pub fn format_long_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    parse_iso_date(trimmed)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// Accepts plain dates and full RFC 3339 timestamps, matching what the data
// source has been observed to send.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// One line per address; `No addresses` for an empty list.
#[must_use]
pub fn format_addresses(addresses: &[Address]) -> String {
    if addresses.is_empty() {
        return "No addresses".to_string();
    }
    addresses
        .iter()
        .map(|a| {
            format!(
                "{}: {}, {}, {} {}, {}",
                a.kind, a.street, a.city, a.state, a.zip_code, a.country
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per phone, flagging primaries; `No phone numbers` for an empty list.
#[must_use]
pub fn format_phones(phones: &[Phone]) -> String {
    if phones.is_empty() {
        return "No phone numbers".to_string();
    }
    phones
        .iter()
        .map(|p| format!("{}: {}{}", p.kind, p.number, primary_suffix(p.is_primary)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per email, flagging primaries; `No email addresses` for an empty list.
#[must_use]
pub fn format_emails(emails: &[Email]) -> String {
    if emails.is_empty() {
        return "No email addresses".to_string();
    }
    emails
        .iter()
        .map(|e| format!("{}: {}{}", e.kind, e.address, primary_suffix(e.is_primary)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn primary_suffix(is_primary: bool) -> &'static str {
    if is_primary { " (Primary)" } else { "" }
}
