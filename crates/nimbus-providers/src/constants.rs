//! Provider constants

use std::time::Duration;

// ============================================================================
// LOCAL TRANSPORT
// ============================================================================

/// Registry name of the in-process transport
pub const LOCAL_TRANSPORT_NAME: &str = "local";

/// Longest TTL the in-process transport honors
pub const LOCAL_MAX_ITEM_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);
