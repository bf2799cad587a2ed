//! Deterministic in-memory repository for isolating screens and services in
//! tests. Filter semantics mirror the REST API: substring name matching,
//! exact date-of-birth matching.

use crate::domain::criteria::SearchCriteria;
use crate::domain::customer::Customer;
use crate::repository::CustomerReader;
use crate::repository::errors::{ApiError, ApiResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Vec<Customer>,
}

impl InMemoryCustomerRepository {
    #[must_use]
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches(customer: &Customer, criteria: &SearchCriteria) -> bool {
    if let Some(first_name) = criteria.first_name.as_deref() {
        if !contains_ignore_case(&customer.first_name, first_name) {
            return false;
        }
    }
    if let Some(last_name) = criteria.last_name.as_deref() {
        if !contains_ignore_case(&customer.last_name, last_name) {
            return false;
        }
    }
    if let Some(date_of_birth) = criteria.date_of_birth.as_deref() {
        if customer.date_of_birth != date_of_birth {
            return false;
        }
    }
    true
}

impl CustomerReader for InMemoryCustomerRepository {
    async fn search(&self, criteria: &SearchCriteria) -> ApiResult<Vec<Customer>> {
        Ok(self
            .customers
            .iter()
            .filter(|c| matches(c, criteria))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> ApiResult<Vec<Customer>> {
        Ok(self.customers.clone())
    }

    async fn get_by_id(&self, id: &str) -> ApiResult<Customer> {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Server {
                status: 404,
                message: "Customer not found".to_string(),
            })
    }
}
