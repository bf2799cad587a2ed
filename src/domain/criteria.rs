use std::collections::HashMap;

/// Sparse search filter: absent fields impose no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
}

impl SearchCriteria {
    /// Builds criteria from a submitted form value map. Values are expected to
    /// be pre-trimmed and non-empty; keys without a matching filter are ignored.
    #[must_use]
    pub fn from_values(values: &HashMap<String, String>) -> Self {
        Self {
            first_name: values.get("firstName").cloned(),
            last_name: values.get("lastName").cloned(),
            date_of_birth: values.get("dateOfBirth").cloned(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.date_of_birth.is_none()
    }
}
