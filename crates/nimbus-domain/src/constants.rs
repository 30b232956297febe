//! Domain layer constants
//!
//! Message wrappers prepended to service error messages, and the limit
//! descriptions selected for `LimitExceeded` errors.

// ============================================================================
// ERROR MESSAGE WRAPPERS
// ============================================================================

pub const INVALID_ARGUMENT_MESSAGE_WRAPPER: &str = "Invalid argument passed to the cache client";
pub const BAD_REQUEST_MESSAGE_WRAPPER: &str = "The request was invalid";
pub const FAILED_PRECONDITION_MESSAGE_WRAPPER: &str =
    "System is not in a state required for the operation's execution";
pub const CANCELLED_MESSAGE_WRAPPER: &str = "The request was cancelled by the server";
pub const TIMEOUT_MESSAGE_WRAPPER: &str = "The client's configured timeout was exceeded; you may need to use a configuration with more lenient timeouts";
pub const PERMISSION_MESSAGE_WRAPPER: &str = "Insufficient permissions to perform operation";
pub const AUTHENTICATION_MESSAGE_WRAPPER: &str =
    "Invalid authentication credentials to connect to the cache service";
pub const CACHE_NOT_FOUND_MESSAGE_WRAPPER: &str = "A cache with the specified name does not exist.  To resolve this error, make sure you have created the cache before attempting to use it";
pub const ITEM_NOT_FOUND_MESSAGE_WRAPPER: &str = "An item with the specified key does not exist";
pub const CACHE_ALREADY_EXISTS_MESSAGE_WRAPPER: &str = "A cache with the specified name already exists.  To resolve this error, either delete the existing cache and make a new one, or use a different name";
pub const UNKNOWN_SERVICE_ERROR_MESSAGE_WRAPPER: &str = "Service returned an unknown response";
pub const INTERNAL_SERVER_ERROR_MESSAGE_WRAPPER: &str =
    "Unexpected error encountered while trying to fulfill the request";
pub const SERVER_UNAVAILABLE_MESSAGE_WRAPPER: &str =
    "The server was unable to handle the request; consider retrying";

// ============================================================================
// LIMIT EXCEEDED MESSAGES
// ============================================================================

pub const OPERATIONS_RATE_LIMIT_EXCEEDED: &str = "Request rate limit exceeded for this account";
pub const THROUGHPUT_RATE_LIMIT_EXCEEDED: &str = "Bandwidth limit exceeded for this account";
pub const REQUEST_SIZE_LIMIT_EXCEEDED: &str = "Request size limit exceeded for this account";
pub const ITEM_SIZE_LIMIT_EXCEEDED: &str = "Item size limit exceeded for this account";
pub const ELEMENT_SIZE_LIMIT_EXCEEDED: &str = "Element size limit exceeded for this account";
pub const UNKNOWN_LIMIT_EXCEEDED: &str = "Limit exceeded for this account";

// ============================================================================
// WIRE METADATA
// ============================================================================

/// Metadata key the service uses to qualify an error status
pub const ERROR_CAUSE_METADATA_KEY: &str = "err";

/// Metadata key carrying the target cache of a data request
pub const CACHE_METADATA_KEY: &str = "cache";

/// `err` metadata value for a missing item
pub const ITEM_NOT_FOUND_CAUSE: &str = "item_not_found";
