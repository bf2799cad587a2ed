//! View-shaped customer data produced by the rendering services.

use serde::Serialize;

/// One row of the results list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerListItem {
    pub title: String,
    pub subtitle: String,
    pub details: Vec<String>,
}

/// A resolved label/value pair of the detail view.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldView {
    pub label: String,
    pub value: String,
}

/// A rendered detail section.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub fields: Vec<FieldView>,
}
