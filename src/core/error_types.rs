//! Shared constants for structured error envelopes and error categories.

use std::fmt;

/// Message returned when a generation request lacks a required field.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: prompt, projectId, accessToken";

/// `details` value used when a failure carries no upstream body.
pub const FALLBACK_ERROR_DETAILS: &str = "Internal server error";

pub const ERROR_CATEGORY_INVALID_REQUEST: &str = "invalid_request";
pub const ERROR_CATEGORY_UPSTREAM_4XX: &str = "upstream_4xx";
pub const ERROR_CATEGORY_UPSTREAM_5XX: &str = "upstream_5xx";
pub const ERROR_CATEGORY_TIMEOUT: &str = "timeout";
pub const ERROR_CATEGORY_CONNECT_ERROR: &str = "connect_error";
pub const ERROR_CATEGORY_NETWORK_ERROR: &str = "network_error";
pub const ERROR_CATEGORY_INTERNAL_ERROR: &str = "internal_error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategoryCode {
    InvalidRequest,
    Upstream4xx,
    Upstream5xx,
    Timeout,
    ConnectError,
    NetworkError,
    InternalError,
}

impl ErrorCategoryCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => ERROR_CATEGORY_INVALID_REQUEST,
            Self::Upstream4xx => ERROR_CATEGORY_UPSTREAM_4XX,
            Self::Upstream5xx => ERROR_CATEGORY_UPSTREAM_5XX,
            Self::Timeout => ERROR_CATEGORY_TIMEOUT,
            Self::ConnectError => ERROR_CATEGORY_CONNECT_ERROR,
            Self::NetworkError => ERROR_CATEGORY_NETWORK_ERROR,
            Self::InternalError => ERROR_CATEGORY_INTERNAL_ERROR,
        }
    }
}

impl fmt::Display for ErrorCategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_strings() {
        assert_eq!(ErrorCategoryCode::Upstream4xx.to_string(), "upstream_4xx");
        assert_eq!(ErrorCategoryCode::Timeout.as_str(), "timeout");
        assert_eq!(
            ErrorCategoryCode::ConnectError.to_string(),
            ERROR_CATEGORY_CONNECT_ERROR
        );
    }
}
