//! Generic renderers driven by the display schema.

use crate::domain::customer::{Customer, FieldValue};
use crate::dto::{CustomerListItem, FieldView, SectionView};
use crate::schema::{DisplayConfig, DisplayField, FieldFormat, ListItemFormat};
use crate::services::format::{
    NOT_AVAILABLE, format_addresses, format_emails, format_long_date, format_phones,
};

/// Renders the detail view for one customer: sections in configured order,
/// each field resolved by key and passed through its formatting strategy.
#[must_use]
pub fn render_detail(config: &DisplayConfig, customer: &Customer) -> Vec<SectionView> {
    config
        .sorted_sections()
        .into_iter()
        .map(|section| SectionView {
            title: section.title.clone(),
            fields: section
                .fields
                .iter()
                .map(|field| render_field(field, customer))
                .collect(),
        })
        .collect()
}

fn render_field(field: &DisplayField, customer: &Customer) -> FieldView {
    let value = customer.field(&field.key);
    let rendered = match field.format {
        Some(format) => apply_format(format, value),
        None => coerce(value),
    };
    FieldView {
        label: field.label.clone(),
        value: rendered,
    }
}

fn apply_format(format: FieldFormat, value: Option<FieldValue<'_>>) -> String {
    match (format, value) {
        (FieldFormat::LongDate, Some(FieldValue::Text(raw))) => format_long_date(raw),
        (FieldFormat::LongDate, _) => NOT_AVAILABLE.to_string(),
        (FieldFormat::Addresses, Some(FieldValue::Addresses(items))) => format_addresses(items),
        (FieldFormat::Addresses, _) => format_addresses(&[]),
        (FieldFormat::Phones, Some(FieldValue::Phones(items))) => format_phones(items),
        (FieldFormat::Phones, _) => format_phones(&[]),
        (FieldFormat::Emails, Some(FieldValue::Emails(items))) => format_emails(items),
        (FieldFormat::Emails, _) => format_emails(&[]),
    }
}

// Default rendition for fields without a strategy. Scalars become the raw
// string with `N/A` for absent or empty; sequences reuse their dedicated
// formatters so a schema omission still reads sensibly.
fn coerce(value: Option<FieldValue<'_>>) -> String {
    match value {
        Some(FieldValue::Text(raw)) if !raw.is_empty() => raw.to_string(),
        Some(FieldValue::Addresses(items)) => format_addresses(items),
        Some(FieldValue::Phones(items)) => format_phones(items),
        Some(FieldValue::Emails(items)) => format_emails(items),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Formats one row of the results list according to the configured strategy.
#[must_use]
pub fn format_list_item(config: &DisplayConfig, customer: &Customer) -> CustomerListItem {
    match config.list_item {
        ListItemFormat::ContactSummary => contact_summary(customer),
    }
}

fn contact_summary(customer: &Customer) -> CustomerListItem {
    let phone = customer
        .primary_phone()
        .map(|p| p.number.as_str())
        .unwrap_or(NOT_AVAILABLE);
    let email = customer
        .primary_email()
        .map(|e| e.address.as_str())
        .unwrap_or(NOT_AVAILABLE);

    CustomerListItem {
        title: customer.full_name(),
        subtitle: format!("DOB: {}", format_long_date(&customer.date_of_birth)),
        details: vec![format!("Phone: {phone}"), format!("Email: {email}")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{Address, Email, Phone};
    use crate::schema::{DisplaySection, default_display_config};

    fn sample_customer() -> Customer {
        Customer {
            id: "1".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            date_of_birth: "1990-01-05".into(),
            marital_status: "Single".into(),
            addresses: vec![Address {
                kind: "home".into(),
                street: "1 Main St".into(),
                city: "Springfield".into(),
                state: "IL".into(),
                zip_code: "62704".into(),
                country: "USA".into(),
            }],
            phones: vec![
                Phone {
                    kind: "home".into(),
                    number: "111".into(),
                    is_primary: false,
                },
                Phone {
                    kind: "mobile".into(),
                    number: "222".into(),
                    is_primary: true,
                },
            ],
            emails: vec![Email {
                kind: "personal".into(),
                address: "jane@example.com".into(),
                is_primary: false,
            }],
        }
    }

    #[test]
    fn detail_sections_come_out_in_render_order() {
        let config = default_display_config();
        let sections = render_detail(&config, &sample_customer());
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Basic Information", "Addresses", "Contact Information"]
        );
    }

    #[test]
    fn detail_formats_dates_and_plain_fields() {
        let config = default_display_config();
        let sections = render_detail(&config, &sample_customer());
        let basic = &sections[0];
        assert_eq!(
            basic.fields[2],
            FieldView {
                label: "Date of Birth".into(),
                value: "January 5, 1990".into(),
            }
        );
        assert_eq!(basic.fields[3].value, "Single");
    }

    #[test]
    fn empty_address_list_renders_the_no_addresses_message() {
        let config = default_display_config();
        let customer = Customer {
            addresses: Vec::new(),
            ..sample_customer()
        };
        let sections = render_detail(&config, &customer);
        assert_eq!(sections[1].fields[0].value, "No addresses");
    }

    #[test]
    fn unknown_key_renders_not_available() {
        let config = DisplayConfig {
            list_item: ListItemFormat::ContactSummary,
            detail_sections: vec![DisplaySection {
                title: "Extra".into(),
                render_order: 1,
                fields: vec![DisplayField {
                    key: "membershipId".into(),
                    label: "Membership ID".into(),
                    format: None,
                }],
            }],
        };
        let sections = render_detail(&config, &sample_customer());
        assert_eq!(sections[0].fields[0].value, NOT_AVAILABLE);
    }

    #[test]
    fn list_item_selects_flagged_phone_and_first_email() {
        let config = default_display_config();
        let item = format_list_item(&config, &sample_customer());
        assert_eq!(item.title, "Jane Doe");
        assert_eq!(item.subtitle, "DOB: January 5, 1990");
        assert_eq!(
            item.details,
            ["Phone: 222", "Email: jane@example.com"]
        );
    }

    #[test]
    fn list_item_with_no_phones_reports_not_available() {
        let config = default_display_config();
        let customer = Customer {
            phones: Vec::new(),
            emails: Vec::new(),
            ..sample_customer()
        };
        let item = format_list_item(&config, &customer);
        assert_eq!(item.details, ["Phone: N/A", "Email: N/A"]);
    }
}
