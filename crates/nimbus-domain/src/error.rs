//! Error handling types
//!
//! Every failure surfaced by the client carries one of a closed set of
//! [`ErrorCode`]s. Service failures additionally keep the raw wire [`Status`]
//! they were normalized from.

use crate::wire::Status;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Closed set of client error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Invalid argument passed to the client or rejected by the service
    InvalidArgument,
    /// Service returned an unknown response
    UnknownService,
    /// Resource already exists
    AlreadyExists,
    /// Cache or item not found
    NotFound,
    /// Unexpected failure inside the service or the client
    InternalServer,
    /// Insufficient permissions
    PermissionDenied,
    /// Invalid credentials
    Authentication,
    /// Request was cancelled
    Cancelled,
    /// Could not connect to the service
    Connection,
    /// Account limit exceeded
    LimitExceeded,
    /// Malformed request
    BadRequest,
    /// Client side timeout exceeded
    Timeout,
    /// Service unable to handle the request
    ServerUnavailable,
    /// Failure inside the client library
    ClientSdk,
    /// Service not in the state required by the operation
    FailedPrecondition,
    /// Invalid client configuration
    Configuration,
}

impl ErrorCode {
    /// Stable string form of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "InvalidArgumentError",
            Self::UnknownService => "UnknownServiceError",
            Self::AlreadyExists => "AlreadyExistsError",
            Self::NotFound => "NotFoundError",
            Self::InternalServer => "InternalServerError",
            Self::PermissionDenied => "PermissionError",
            Self::Authentication => "AuthenticationError",
            Self::Cancelled => "CancelledError",
            Self::Connection => "ConnectionError",
            Self::LimitExceeded => "LimitExceededError",
            Self::BadRequest => "BadRequestError",
            Self::Timeout => "TimeoutError",
            Self::ServerUnavailable => "ServerUnavailable",
            Self::ClientSdk => "ClientSdkError",
            Self::FailedPrecondition => "FailedPreconditionError",
            Self::Configuration => "ConfigurationError",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the Nimbus client
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument, detected locally or by the service
    #[error("InvalidArgumentError: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Service returned a response the client does not understand
    #[error("UnknownServiceError: {message}")]
    UnknownService {
        /// Description of the failure
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Resource already exists
    #[error("AlreadyExistsError: {message}")]
    AlreadyExists {
        /// Description of the conflict
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Cache or item not found
    #[error("NotFoundError: {message}")]
    NotFound {
        /// Description of the missing resource
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Internal service or client failure
    #[error("InternalServerError: {message}")]
    InternalServer {
        /// Description of the failure
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Insufficient permissions
    #[error("PermissionError: {message}")]
    PermissionDenied {
        /// Description of the denial
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Invalid credentials
    #[error("AuthenticationError: {message}")]
    Authentication {
        /// Description of the failure
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Request cancelled
    #[error("CancelledError: {message}")]
    Cancelled {
        /// Description of the cancellation
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Account limit exceeded
    #[error("LimitExceededError: {message}")]
    LimitExceeded {
        /// Which limit was exceeded
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Malformed request
    #[error("BadRequestError: {message}")]
    BadRequest {
        /// Description of the failure
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Client side timeout exceeded
    #[error("TimeoutError: {message}")]
    Timeout {
        /// Description of the timeout
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Service unable to handle the request
    #[error("ServerUnavailable: {message}")]
    ServerUnavailable {
        /// Description of the failure
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Service not in the required state
    #[error("FailedPreconditionError: {message}")]
    FailedPrecondition {
        /// Description of the failed precondition
        message: String,
        /// Wire status the error was normalized from
        details: Option<Box<Status>>,
    },

    /// Failure inside the client library
    #[error("ClientSdkError: {message}")]
    ClientSdk {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Could not establish a connection
    #[error("ConnectionError: {message}")]
    Connection {
        /// Description of the connection failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Invalid client configuration
    #[error("ConfigurationError: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an error for a code with an optional wire status
    ///
    /// Codes that never originate from the wire (`ClientSdk`, `Connection`,
    /// `Configuration`) drop the status.
    pub fn with_code<S: Into<String>>(code: ErrorCode, message: S, details: Option<Status>) -> Self {
        let message = message.into();
        let details = details.map(Box::new);
        match code {
            ErrorCode::InvalidArgument => Self::InvalidArgument { message, details },
            ErrorCode::UnknownService => Self::UnknownService { message, details },
            ErrorCode::AlreadyExists => Self::AlreadyExists { message, details },
            ErrorCode::NotFound => Self::NotFound { message, details },
            ErrorCode::InternalServer => Self::InternalServer { message, details },
            ErrorCode::PermissionDenied => Self::PermissionDenied { message, details },
            ErrorCode::Authentication => Self::Authentication { message, details },
            ErrorCode::Cancelled => Self::Cancelled { message, details },
            ErrorCode::LimitExceeded => Self::LimitExceeded { message, details },
            ErrorCode::BadRequest => Self::BadRequest { message, details },
            ErrorCode::Timeout => Self::Timeout { message, details },
            ErrorCode::ServerUnavailable => Self::ServerUnavailable { message, details },
            ErrorCode::FailedPrecondition => Self::FailedPrecondition { message, details },
            ErrorCode::ClientSdk => Self::ClientSdk {
                message,
                source: None,
            },
            ErrorCode::Connection => Self::Connection {
                message,
                source: None,
            },
            ErrorCode::Configuration => Self::Configuration {
                message,
                source: None,
            },
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            details: None,
        }
    }

    /// Create an internal server error
    pub fn internal_server<S: Into<String>>(message: S) -> Self {
        Self::InternalServer {
            message: message.into(),
            details: None,
        }
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout {
            message: message.into(),
            details: None,
        }
    }

    /// Create a client SDK error
    pub fn client_sdk<S: Into<String>>(message: S) -> Self {
        Self::ClientSdk {
            message: message.into(),
            source: None,
        }
    }
}

// Connection and configuration error creation methods
impl Error {
    /// Create a connection error
    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection error with source
    pub fn connection_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Accessors
impl Error {
    /// The client error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::UnknownService { .. } => ErrorCode::UnknownService,
            Self::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::InternalServer { .. } => ErrorCode::InternalServer,
            Self::PermissionDenied { .. } => ErrorCode::PermissionDenied,
            Self::Authentication { .. } => ErrorCode::Authentication,
            Self::Cancelled { .. } => ErrorCode::Cancelled,
            Self::LimitExceeded { .. } => ErrorCode::LimitExceeded,
            Self::BadRequest { .. } => ErrorCode::BadRequest,
            Self::Timeout { .. } => ErrorCode::Timeout,
            Self::ServerUnavailable { .. } => ErrorCode::ServerUnavailable,
            Self::FailedPrecondition { .. } => ErrorCode::FailedPrecondition,
            Self::ClientSdk { .. } => ErrorCode::ClientSdk,
            Self::Connection { .. } => ErrorCode::Connection,
            Self::Configuration { .. } => ErrorCode::Configuration,
        }
    }

    /// The human-readable message, without the code prefix
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message, .. }
            | Self::UnknownService { message, .. }
            | Self::AlreadyExists { message, .. }
            | Self::NotFound { message, .. }
            | Self::InternalServer { message, .. }
            | Self::PermissionDenied { message, .. }
            | Self::Authentication { message, .. }
            | Self::Cancelled { message, .. }
            | Self::LimitExceeded { message, .. }
            | Self::BadRequest { message, .. }
            | Self::Timeout { message, .. }
            | Self::ServerUnavailable { message, .. }
            | Self::FailedPrecondition { message, .. }
            | Self::ClientSdk { message, .. }
            | Self::Connection { message, .. }
            | Self::Configuration { message, .. } => message,
        }
    }

    /// The wire status this error was normalized from, if any
    pub fn details(&self) -> Option<&Status> {
        match self {
            Self::InvalidArgument { details, .. }
            | Self::UnknownService { details, .. }
            | Self::AlreadyExists { details, .. }
            | Self::NotFound { details, .. }
            | Self::InternalServer { details, .. }
            | Self::PermissionDenied { details, .. }
            | Self::Authentication { details, .. }
            | Self::Cancelled { details, .. }
            | Self::LimitExceeded { details, .. }
            | Self::BadRequest { details, .. }
            | Self::Timeout { details, .. }
            | Self::ServerUnavailable { details, .. }
            | Self::FailedPrecondition { details, .. } => details.as_deref(),
            Self::ClientSdk { .. } | Self::Connection { .. } | Self::Configuration { .. } => None,
        }
    }
}
