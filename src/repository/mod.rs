//! Customer data access behind a small reader trait so screens and services
//! can be exercised without a live API.

use crate::domain::criteria::SearchCriteria;
use crate::domain::customer::Customer;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use errors::{ApiError, ApiResult};
pub use http::HttpCustomerRepository;

/// Read access to the customer data source.
#[allow(async_fn_in_trait)]
pub trait CustomerReader {
    /// Customers matching the sparse criteria. Empty criteria match everyone.
    async fn search(&self, criteria: &SearchCriteria) -> ApiResult<Vec<Customer>>;

    /// Every customer known to the data source.
    async fn list_all(&self) -> ApiResult<Vec<Customer>>;

    /// One customer by identifier.
    async fn get_by_id(&self, id: &str) -> ApiResult<Customer>;
}
