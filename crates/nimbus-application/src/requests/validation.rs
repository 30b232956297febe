//! Argument validation
//!
//! Every failure is an `InvalidArgument` error raised before anything is
//! sent.

use nimbus_domain::value_objects::CollectionTtl;
use nimbus_domain::wire::{Bytes, WireCollectionTtl};
use nimbus_domain::{Error, Result, Value};
use std::time::Duration;

/// Require a name that is not blank
pub fn validate_name(name: &str, label: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_argument(format!("{label} cannot be empty")));
    }
    Ok(())
}

/// Validate a cache name
pub fn validate_cache_name(name: &str) -> Result<()> {
    validate_name(name, "Cache name")
}

/// Validate a name and return its wire bytes
pub fn prepare_name(name: &str, label: &str) -> Result<Bytes> {
    validate_name(name, label)?;
    Ok(name.as_bytes().to_vec())
}

pub fn prepare_key(key: &Value) -> Result<Bytes> {
    if key.is_empty() {
        return Err(Error::invalid_argument("key cannot be empty"));
    }
    Ok(key.as_bytes().to_vec())
}

pub fn prepare_keys(keys: &[Value]) -> Result<Vec<Bytes>> {
    if keys.is_empty() {
        return Err(Error::invalid_argument("keys cannot be empty"));
    }
    keys.iter().map(prepare_key).collect()
}

pub fn prepare_value(value: &Value) -> Result<Bytes> {
    if value.is_empty() {
        return Err(Error::invalid_argument("value cannot be empty"));
    }
    Ok(value.as_bytes().to_vec())
}

pub fn prepare_values(values: &[Value]) -> Result<Vec<Bytes>> {
    values
        .iter()
        .map(|v| {
            if v.is_empty() {
                Err(Error::invalid_argument("value in list cannot be empty"))
            } else {
                Ok(v.as_bytes().to_vec())
            }
        })
        .collect()
}

pub fn prepare_field(field: &Value) -> Result<Bytes> {
    if field.is_empty() {
        return Err(Error::invalid_argument("field cannot be empty"));
    }
    Ok(field.as_bytes().to_vec())
}

pub fn prepare_fields(fields: &[Value]) -> Result<Vec<Bytes>> {
    fields.iter().map(prepare_field).collect()
}

/// Milliseconds in `ttl`, saturating
pub fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX)
}

fn validate_ttl(ttl: Duration) -> Result<()> {
    if ttl_millis(ttl) == 0 {
        return Err(Error::invalid_argument("ttl must be a positive duration"));
    }
    Ok(())
}

/// Resolve a scalar TTL to milliseconds, falling back to `default_ttl`
pub fn prepare_ttl(ttl: Option<Duration>, default_ttl: Duration) -> Result<u64> {
    if let Some(ttl) = ttl {
        validate_ttl(ttl)?;
    }
    Ok(ttl_millis(ttl.unwrap_or(default_ttl)))
}

/// Resolve a collection TTL to its wire form
pub fn prepare_collection_ttl(
    ttl: &CollectionTtl,
    default_ttl: Duration,
) -> Result<WireCollectionTtl> {
    if let Some(explicit) = ttl.ttl {
        validate_ttl(explicit)?;
    }
    Ok(WireCollectionTtl {
        ttl_milliseconds: ttl_millis(ttl.effective_ttl(default_ttl)),
        refresh_ttl: ttl.refresh_ttl,
    })
}

/// TTL for update operations, which must be positive
pub fn prepare_update_ttl(ttl: Duration) -> Result<u64> {
    validate_ttl(ttl)?;
    Ok(ttl_millis(ttl))
}

/// Require a non-zero increment amount
pub fn validate_amount_i64(amount: i64) -> Result<()> {
    if amount == 0 {
        return Err(Error::invalid_argument(
            "Amount must be given and cannot be 0",
        ));
    }
    Ok(())
}

/// Require a non-zero, finite score increment
pub fn validate_amount_f64(amount: f64) -> Result<()> {
    if amount == 0.0 || !amount.is_finite() {
        return Err(Error::invalid_argument(
            "Amount must be given and cannot be 0",
        ));
    }
    Ok(())
}

/// Check an index range whose bounds share a sign
///
/// Mixed-sign bounds cannot be compared without the collection length and
/// are left to the service.
pub fn validate_index_range(start: Option<i32>, end: Option<i32>, label: &str) -> Result<()> {
    if let (Some(start), Some(end)) = (start, end) {
        let same_sign = (start >= 0 && end >= 0) || (start < 0 && end < 0);
        if same_sign && start >= end {
            return Err(Error::invalid_argument(format!(
                "start {label} must be less than end {label}"
            )));
        }
    }
    Ok(())
}

/// Check that a score range is not inverted
pub fn validate_score_range(min: Option<f64>, max: Option<f64>) -> Result<()> {
    if let (Some(min), Some(max)) = (min, max)
        && min > max
    {
        return Err(Error::invalid_argument(
            "min score must be less than or equal to max score",
        ));
    }
    Ok(())
}
