//! HTTP implementation of [`CustomerReader`] over the REST customer API.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::domain::criteria::SearchCriteria;
use crate::domain::customer::Customer;
use crate::models::config::AppConfig;
use crate::repository::CustomerReader;
use crate::repository::errors::{ApiError, ApiResult, SERVER_ERROR_MESSAGE};

/// Customer API client. This is the only place raw transport failures are
/// caught; everything leaves as a normalized [`ApiError`].
#[derive(Debug, Clone)]
pub struct HttpCustomerRepository {
    client: Client,
    base_url: String,
}

impl HttpCustomerRepository {
    /// Builds a client against the configured base URL with the configured
    /// request timeout.
    pub fn new(config: &AppConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ApiError::from)?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn customers_url(&self) -> String {
        format!("{}/customers", self.base_url)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(ApiError::from)?;
        let response = check_response(response).await?;
        response.json::<T>().await.map_err(ApiError::from)
    }
}

impl CustomerReader for HttpCustomerRepository {
    async fn search(&self, criteria: &SearchCriteria) -> ApiResult<Vec<Customer>> {
        // Sparse query: names filter by substring, date of birth exactly.
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(first_name) = criteria.first_name.as_deref() {
            params.push(("firstName_like", first_name));
        }
        if let Some(last_name) = criteria.last_name.as_deref() {
            params.push(("lastName_like", last_name));
        }
        if let Some(date_of_birth) = criteria.date_of_birth.as_deref() {
            params.push(("dateOfBirth", date_of_birth));
        }
        log::debug!("Searching customers with {} filter(s)", params.len());
        self.fetch(self.client.get(self.customers_url()).query(&params))
            .await
    }

    async fn list_all(&self) -> ApiResult<Vec<Customer>> {
        self.fetch(self.client.get(self.customers_url())).await
    }

    async fn get_by_id(&self, id: &str) -> ApiResult<Customer> {
        let url = format!("{}/{id}", self.customers_url());
        self.fetch(self.client.get(url)).await
    }
}

async fn check_response(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Server {
        status: status.as_u16(),
        message: extract_error_message(&body),
    })
}

/// Pulls the server-supplied `message` field out of a JSON error body, falling
/// back to the generic server-error message.
fn extract_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }
    SERVER_ERROR_MESSAGE.to_string()
}
