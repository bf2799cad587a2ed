/// A formatting strategy a display field can opt into. Strategies are resolved
/// when the schema is constructed; fields without one fall back to plain string
/// rendering with an `N/A` substitute for absent values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFormat {
    /// Long localized date, e.g. `January 5, 1990`.
    LongDate,
    /// One line per address, `<type>: <street>, <city>, <state> <zip>, <country>`.
    Addresses,
    /// One line per phone with a ` (Primary)` suffix on flagged entries.
    Phones,
    /// One line per email with a ` (Primary)` suffix on flagged entries.
    Emails,
}

/// One field of a detail section: customer attribute key, visible label, and
/// an optional formatting strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayField {
    pub key: String,
    pub label: String,
    pub format: Option<FieldFormat>,
}

/// A titled group of detail fields.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplaySection {
    pub title: String,
    /// Position among sections; ties keep insertion order.
    pub render_order: i32,
    pub fields: Vec<DisplayField>,
}

/// Formatter strategy for one row of the results list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListItemFormat {
    /// Name title, `DOB:` subtitle, preferred phone and email detail lines.
    ContactSummary,
}

/// Complete display schema for the results list and the detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    pub list_item: ListItemFormat,
    pub detail_sections: Vec<DisplaySection>,
}

impl DisplayConfig {
    /// Sections in render order: ascending stable sort on `render_order`.
    #[must_use]
    pub fn sorted_sections(&self) -> Vec<&DisplaySection> {
        let mut sections: Vec<&DisplaySection> = self.detail_sections.iter().collect();
        sections.sort_by_key(|section| section.render_order);
        sections
    }
}
