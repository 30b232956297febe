//! Wire status and its normalization into client errors

use crate::constants::*;
use crate::error::{Error, ErrorCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status codes carried by the RPC protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    Ok,
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Failure status returned by a transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Status code
    pub code: StatusCode,
    /// Raw message from the service
    pub message: String,
    /// Response headers and trailers
    pub metadata: BTreeMap<String, String>,
}

impl Status {
    /// Create a status with no metadata
    pub fn new<S: Into<String>>(code: StatusCode, message: S) -> Self {
        Self {
            code,
            message: message.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadata entry
    pub fn with_metadata<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The `err` metadata value qualifying this status, if present
    pub fn error_cause(&self) -> Option<&str> {
        self.metadata
            .get(ERROR_CAUSE_METADATA_KEY)
            .map(String::as_str)
    }

    /// Client error code this status normalizes to
    pub fn error_code(&self) -> ErrorCode {
        match self.code {
            StatusCode::InvalidArgument => ErrorCode::InvalidArgument,
            StatusCode::OutOfRange | StatusCode::Unimplemented => ErrorCode::BadRequest,
            StatusCode::FailedPrecondition => ErrorCode::FailedPrecondition,
            StatusCode::Cancelled => ErrorCode::Cancelled,
            StatusCode::DeadlineExceeded => ErrorCode::Timeout,
            StatusCode::PermissionDenied => ErrorCode::PermissionDenied,
            StatusCode::Unauthenticated => ErrorCode::Authentication,
            StatusCode::ResourceExhausted => ErrorCode::LimitExceeded,
            StatusCode::NotFound => ErrorCode::NotFound,
            StatusCode::AlreadyExists => ErrorCode::AlreadyExists,
            StatusCode::Unknown => ErrorCode::UnknownService,
            StatusCode::Unavailable => ErrorCode::ServerUnavailable,
            StatusCode::Ok | StatusCode::Aborted | StatusCode::Internal | StatusCode::DataLoss => {
                ErrorCode::InternalServer
            }
        }
    }

    fn message_wrapper(&self) -> &'static str {
        match self.code {
            StatusCode::InvalidArgument => INVALID_ARGUMENT_MESSAGE_WRAPPER,
            StatusCode::OutOfRange | StatusCode::Unimplemented => BAD_REQUEST_MESSAGE_WRAPPER,
            StatusCode::FailedPrecondition => FAILED_PRECONDITION_MESSAGE_WRAPPER,
            StatusCode::Cancelled => CANCELLED_MESSAGE_WRAPPER,
            StatusCode::DeadlineExceeded => TIMEOUT_MESSAGE_WRAPPER,
            StatusCode::PermissionDenied => PERMISSION_MESSAGE_WRAPPER,
            StatusCode::Unauthenticated => AUTHENTICATION_MESSAGE_WRAPPER,
            StatusCode::ResourceExhausted => self.limit_exceeded_message(),
            StatusCode::NotFound => match self.error_cause() {
                Some(ITEM_NOT_FOUND_CAUSE) => ITEM_NOT_FOUND_MESSAGE_WRAPPER,
                _ => CACHE_NOT_FOUND_MESSAGE_WRAPPER,
            },
            StatusCode::AlreadyExists => CACHE_ALREADY_EXISTS_MESSAGE_WRAPPER,
            StatusCode::Unknown => UNKNOWN_SERVICE_ERROR_MESSAGE_WRAPPER,
            StatusCode::Unavailable => SERVER_UNAVAILABLE_MESSAGE_WRAPPER,
            StatusCode::Ok | StatusCode::Aborted | StatusCode::Internal | StatusCode::DataLoss => {
                INTERNAL_SERVER_ERROR_MESSAGE_WRAPPER
            }
        }
    }

    /// Pick the limit description from the `err` metadata, falling back to
    /// the wording of the raw message
    fn limit_exceeded_message(&self) -> &'static str {
        match self.error_cause() {
            Some("operations_rate_limit_exceeded") => return OPERATIONS_RATE_LIMIT_EXCEEDED,
            Some("throughput_rate_limit_exceeded") => return THROUGHPUT_RATE_LIMIT_EXCEEDED,
            Some("request_size_limit_exceeded") => return REQUEST_SIZE_LIMIT_EXCEEDED,
            Some("item_size_limit_exceeded") => return ITEM_SIZE_LIMIT_EXCEEDED,
            Some("element_size_limit_exceeded") => return ELEMENT_SIZE_LIMIT_EXCEEDED,
            _ => {}
        }

        let lower = self.message.to_lowercase();
        if lower.contains("request rate") || lower.contains("operations") {
            OPERATIONS_RATE_LIMIT_EXCEEDED
        } else if lower.contains("bandwidth") || lower.contains("throughput") {
            THROUGHPUT_RATE_LIMIT_EXCEEDED
        } else if lower.contains("request size") {
            REQUEST_SIZE_LIMIT_EXCEEDED
        } else if lower.contains("item size") {
            ITEM_SIZE_LIMIT_EXCEEDED
        } else if lower.contains("element size") {
            ELEMENT_SIZE_LIMIT_EXCEEDED
        } else {
            UNKNOWN_LIMIT_EXCEEDED
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl From<Status> for Error {
    fn from(status: Status) -> Self {
        let code = status.error_code();
        let message = if status.message.is_empty() {
            status.message_wrapper().to_string()
        } else {
            format!("{}: {}", status.message_wrapper(), status.message)
        };
        Error::with_code(code, message, Some(status))
    }
}
