//! Declarative UI schema: the search-form fields and the display sections are
//! described as data and rendered generically. Adding a field or a section is
//! a change here, not in the rendering code.

pub mod display;
pub mod fields;

pub use display::{DisplayConfig, DisplayField, DisplaySection, FieldFormat, ListItemFormat};
pub use fields::{FieldConfig, FieldEntry, FieldType, SearchConfig};

/// The default search form: first name, last name, and date of birth.
/// Constructed once at startup and shared read-only.
#[must_use]
pub fn default_search_config() -> SearchConfig {
    SearchConfig {
        fields: vec![
            FieldEntry {
                key: "firstName".to_string(),
                config: FieldConfig {
                    field_type: FieldType::Text,
                    label: "First Name".to_string(),
                    placeholder: Some("Enter first name".to_string()),
                    render_order: 1,
                    required: false,
                },
            },
            FieldEntry {
                key: "lastName".to_string(),
                config: FieldConfig {
                    field_type: FieldType::Text,
                    label: "Last Name".to_string(),
                    placeholder: Some("Enter last name".to_string()),
                    render_order: 2,
                    required: false,
                },
            },
            FieldEntry {
                key: "dateOfBirth".to_string(),
                config: FieldConfig {
                    field_type: FieldType::Date,
                    label: "Date of Birth".to_string(),
                    placeholder: Some("Select date".to_string()),
                    render_order: 3,
                    required: false,
                },
            },
        ],
    }
}

/// The default display schema: basic information, addresses, and contact
/// details, plus the contact-summary list rows.
#[must_use]
pub fn default_display_config() -> DisplayConfig {
    DisplayConfig {
        list_item: ListItemFormat::ContactSummary,
        detail_sections: vec![
            DisplaySection {
                title: "Basic Information".to_string(),
                render_order: 1,
                fields: vec![
                    DisplayField {
                        key: "firstName".to_string(),
                        label: "First Name".to_string(),
                        format: None,
                    },
                    DisplayField {
                        key: "lastName".to_string(),
                        label: "Last Name".to_string(),
                        format: None,
                    },
                    DisplayField {
                        key: "dateOfBirth".to_string(),
                        label: "Date of Birth".to_string(),
                        format: Some(FieldFormat::LongDate),
                    },
                    DisplayField {
                        key: "maritalStatus".to_string(),
                        label: "Marital Status".to_string(),
                        format: None,
                    },
                ],
            },
            DisplaySection {
                title: "Addresses".to_string(),
                render_order: 2,
                fields: vec![DisplayField {
                    key: "addresses".to_string(),
                    label: "Addresses".to_string(),
                    format: Some(FieldFormat::Addresses),
                }],
            },
            DisplaySection {
                title: "Contact Information".to_string(),
                render_order: 3,
                fields: vec![
                    DisplayField {
                        key: "phones".to_string(),
                        label: "Phone Numbers".to_string(),
                        format: Some(FieldFormat::Phones),
                    },
                    DisplayField {
                        key: "emails".to_string(),
                        label: "Email Addresses".to_string(),
                        format: Some(FieldFormat::Emails),
                    },
                ],
            },
        ],
    }
}
