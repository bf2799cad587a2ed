/// Input kind of a search field. Drives the affordance the form layer offers;
/// unrecognized kinds degrade to plain text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Date,
    Email,
    Phone,
    Select,
}

/// Declarative description of one search input.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub field_type: FieldType,
    pub label: String,
    pub placeholder: Option<String>,
    /// Position in the rendered form. Values need not be unique or contiguous;
    /// ties keep insertion order.
    pub render_order: i32,
    pub required: bool,
}

/// One entry of the search schema: the customer attribute key this field
/// filters on (by convention only) plus its configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldEntry {
    pub key: String,
    pub config: FieldConfig,
}

/// Ordered search-form schema.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchConfig {
    pub fields: Vec<FieldEntry>,
}

impl SearchConfig {
    /// Entries in render order: ascending stable sort on `render_order`.
    #[must_use]
    pub fn sorted_fields(&self) -> Vec<&FieldEntry> {
        let mut entries: Vec<&FieldEntry> = self.fields.iter().collect();
        entries.sort_by_key(|entry| entry.config.render_order);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, render_order: i32) -> FieldEntry {
        FieldEntry {
            key: key.to_string(),
            config: FieldConfig {
                field_type: FieldType::Text,
                label: key.to_string(),
                placeholder: None,
                render_order,
                required: false,
            },
        }
    }

    #[test]
    fn sorted_fields_orders_by_render_order() {
        let config = SearchConfig {
            fields: vec![entry("c", 30), entry("a", 10), entry("b", 20)],
        };
        let keys: Vec<&str> = config
            .sorted_fields()
            .iter()
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn sorted_fields_keeps_insertion_order_on_ties() {
        let config = SearchConfig {
            fields: vec![entry("first", 1), entry("second", 1), entry("third", 1)],
        };
        let keys: Vec<&str> = config
            .sorted_fields()
            .iter()
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(keys, ["first", "second", "third"]);
    }
}
