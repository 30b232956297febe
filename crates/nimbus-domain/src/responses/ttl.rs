//! TTL update responses

/// Result of `update_ttl`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTtlResponse {
    Set,
    Miss,
}

/// Result of `increase_ttl`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncreaseTtlResponse {
    Set,
    /// The existing TTL was already longer
    NotSet,
    Miss,
}

/// Result of `decrease_ttl`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecreaseTtlResponse {
    Set,
    /// The existing TTL was already shorter
    NotSet,
    Miss,
}
