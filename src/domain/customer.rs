use serde::{Deserialize, Serialize};

/// A postal address attached to a customer record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "type")]
    pub kind: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// A phone number attached to a customer record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    #[serde(rename = "type")]
    pub kind: String,
    pub number: String,
    pub is_primary: bool,
}

/// An email address attached to a customer record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    pub is_primary: bool,
}

/// A customer record as served by the customer API. Read-only on this side;
/// identifiers are assigned by the data source.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub marital_status: String,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub emails: Vec<Email>,
}

/// A customer attribute resolved by schema key for the generic detail renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Addresses(&'a [Address]),
    Phones(&'a [Phone]),
    Emails(&'a [Email]),
}

impl Customer {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Preferred phone: the first entry flagged primary, else the first entry.
    /// Nothing enforces a single primary flag, so the first flagged one wins.
    #[must_use]
    pub fn primary_phone(&self) -> Option<&Phone> {
        self.phones
            .iter()
            .find(|p| p.is_primary)
            .or_else(|| self.phones.first())
    }

    /// Preferred email, selected with the same rule as [`Customer::primary_phone`].
    #[must_use]
    pub fn primary_email(&self) -> Option<&Email> {
        self.emails
            .iter()
            .find(|e| e.is_primary)
            .or_else(|| self.emails.first())
    }

    /// Resolves an attribute by its schema key (wire-form camelCase names).
    /// Unknown keys yield `None`, which renders as absent.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Text(&self.id)),
            "firstName" => Some(FieldValue::Text(&self.first_name)),
            "lastName" => Some(FieldValue::Text(&self.last_name)),
            "dateOfBirth" => Some(FieldValue::Text(&self.date_of_birth)),
            "maritalStatus" => Some(FieldValue::Text(&self.marital_status)),
            "addresses" => Some(FieldValue::Addresses(&self.addresses)),
            "phones" => Some(FieldValue::Phones(&self.phones)),
            "emails" => Some(FieldValue::Emails(&self.emails)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(number: &str, is_primary: bool) -> Phone {
        Phone {
            kind: "mobile".into(),
            number: number.into(),
            is_primary,
        }
    }

    #[test]
    fn primary_phone_prefers_flagged_entry() {
        let customer = Customer {
            phones: vec![phone("111", false), phone("222", true)],
            ..Customer::default()
        };
        assert_eq!(customer.primary_phone().unwrap().number, "222");
    }

    #[test]
    fn primary_phone_falls_back_to_first_entry() {
        let customer = Customer {
            phones: vec![phone("111", false), phone("222", false)],
            ..Customer::default()
        };
        assert_eq!(customer.primary_phone().unwrap().number, "111");
    }

    #[test]
    fn primary_phone_is_none_for_empty_list() {
        assert!(Customer::default().primary_phone().is_none());
    }

    #[test]
    fn field_lookup_resolves_known_keys_only() {
        let customer = Customer {
            first_name: "Jane".into(),
            ..Customer::default()
        };
        assert_eq!(
            customer.field("firstName"),
            Some(FieldValue::Text("Jane"))
        );
        assert!(customer.field("membershipId").is_none());
    }

    #[test]
    fn customer_decodes_from_camel_case_json() {
        let json = serde_json::json!({
            "id": "1",
            "firstName": "Jane",
            "lastName": "Doe",
            "dateOfBirth": "1990-01-05",
            "maritalStatus": "Single",
            "addresses": [{
                "type": "home",
                "street": "1 Main St",
                "city": "Springfield",
                "state": "IL",
                "zipCode": "62704",
                "country": "USA"
            }],
            "phones": [{"type": "mobile", "number": "555-0100", "isPrimary": true}],
            "emails": []
        });
        let customer: Customer = serde_json::from_value(json).unwrap();
        assert_eq!(customer.addresses[0].zip_code, "62704");
        assert!(customer.phones[0].is_primary);
        assert!(customer.emails.is_empty());
    }
}
