//! 标准错误码：为每类发送失败给出统一错误码与重试提示。
//!
//! Standard error codes for failed sends.
//!
//! Every [`Error`](crate::Error) maps onto one of these codes so callers can
//! decide on retries, alerting or user-facing text without inspecting the raw
//! Graph API error body. This layer never retries on its own.
//!
//! ## Error Code Categories
//!
//! | Prefix | Category | Description                                   |
//! |--------|----------|-----------------------------------------------|
//! | E1xxx  | client   | Request-side errors                           |
//! | E2xxx  | rate     | Throughput and spam limits                    |
//! | E3xxx  | server   | Platform-side or network errors               |
//! | E4xxx  | contract | Local configuration or response-shape errors  |
//! | E9xxx  | unknown  | Catch-all / unclassified                      |
//!
//! ## Example
//!
//! ```rust
//! use wa_cloud_messages::error_code::StandardErrorCode;
//!
//! let code = StandardErrorCode::from_graph_code(130429).unwrap();
//! assert_eq!(code.code(), "E2001");
//! assert!(code.retryable());
//! assert_eq!(code.category(), "rate");
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardErrorCode {
    /// E1001: Malformed request, invalid or missing parameters
    InvalidRequest,
    /// E1002: Invalid or expired access token
    Authentication,
    /// E1003: Token lacks the permission for this phone number or WABA
    PermissionDenied,
    /// E1004: Template or resource does not exist
    NotFound,
    /// E1005: Recipient cannot receive this message (not on WhatsApp, 24h window closed)
    RecipientUnavailable,
    /// E2001: Throughput or pair rate limit hit
    RateLimited,
    /// E3001: Unexpected error on the platform side
    ServerError,
    /// E3002: Service temporarily unavailable
    Unavailable,
    /// E3003: Request timed out before a response was received
    Timeout,
    /// E3004: No response reached the client
    Network,
    /// E4001: Success status with a body that is not a message response
    SchemaViolation,
    /// E4002: Client could not be configured
    Configuration,
    /// E9999: Error could not be classified
    Unknown,
}

impl StandardErrorCode {
    /// Returns the canonical code string (e.g., `"E1001"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "E1001",
            Self::Authentication => "E1002",
            Self::PermissionDenied => "E1003",
            Self::NotFound => "E1004",
            Self::RecipientUnavailable => "E1005",
            Self::RateLimited => "E2001",
            Self::ServerError => "E3001",
            Self::Unavailable => "E3002",
            Self::Timeout => "E3003",
            Self::Network => "E3004",
            Self::SchemaViolation => "E4001",
            Self::Configuration => "E4002",
            Self::Unknown => "E9999",
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::RecipientUnavailable => "recipient_unavailable",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Unavailable => "unavailable",
            Self::Timeout => "timeout",
            Self::Network => "network",
            Self::SchemaViolation => "schema_violation",
            Self::Configuration => "configuration",
            Self::Unknown => "unknown",
        }
    }

    /// Whether resending the same envelope later may succeed.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited
                | Self::ServerError
                | Self::Unavailable
                | Self::Timeout
                | Self::Network
        )
    }

    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRequest
            | Self::Authentication
            | Self::PermissionDenied
            | Self::NotFound
            | Self::RecipientUnavailable => "client",
            Self::RateLimited => "rate",
            Self::ServerError | Self::Unavailable | Self::Timeout | Self::Network => "server",
            Self::SchemaViolation | Self::Configuration => "contract",
            Self::Unknown => "unknown",
        }
    }

    /// Maps a numeric Graph API error code (`error.code`) to a standard code.
    pub fn from_graph_code(code: i64) -> Option<Self> {
        let mapped = match code {
            0 | 190 => Self::Authentication,
            3 | 10 | 131005 => Self::PermissionDenied,
            200..=299 => Self::PermissionDenied,
            4 | 80007 | 130429 | 131048 | 131056 => Self::RateLimited,
            100 | 131008 | 131009 | 131051 | 132000 | 132012 => Self::InvalidRequest,
            132001 => Self::NotFound,
            131026 | 131047 | 133010 => Self::RecipientUnavailable,
            1 | 131000 => Self::ServerError,
            2 | 131016 => Self::Unavailable,
            _ => return None,
        };
        Some(mapped)
    }

    /// Maps an HTTP status code to the most likely standard code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            408 | 504 => Self::Timeout,
            429 => Self::RateLimited,
            500 => Self::ServerError,
            502 | 503 => Self::Unavailable,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for StandardErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
