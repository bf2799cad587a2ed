use thiserror::Error;

/// Message shown when the endpoint responded with an error status but no
/// usable message of its own.
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred";

/// Message shown when the request went out but no response came back.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and ensure the API server is running.";

/// Uniform error shape every API failure is normalized into before it reaches
/// screen code. Screens never see raw transport errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The endpoint responded with an error status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request was sent but no response arrived.
    #[error("{message}")]
    Network { message: String },

    /// Any other failure, e.g. a malformed request or response body.
    #[error("{0}")]
    Other(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP-style status of the failure: the response status for server
    /// errors, `0` for connectivity failures, absent otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network { .. } => Some(0),
            ApiError::Other(_) => None,
        }
    }

    #[must_use]
    pub fn network() -> Self {
        ApiError::Network {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            return ApiError::network();
        }
        if let Some(status) = err.status() {
            return ApiError::Server {
                status: status.as_u16(),
                message: SERVER_ERROR_MESSAGE.to_string(),
            };
        }
        ApiError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_report_status_zero() {
        assert_eq!(ApiError::network().status(), Some(0));
    }

    #[test]
    fn server_errors_expose_their_status_and_message() {
        let err = ApiError::Server {
            status: 404,
            message: "Customer not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Customer not found");
    }

    #[test]
    fn other_errors_have_no_status() {
        assert_eq!(ApiError::Other("boom".to_string()).status(), None);
    }
}
