//! Control-plane wire messages

use crate::value_objects::CacheInfo;
use serde::{Deserialize, Serialize};

/// Control-plane request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlRequest {
    CreateCache { cache_name: String },
    DeleteCache { cache_name: String },
    ListCaches { next_token: Option<String> },
}

impl ControlRequest {
    /// RPC method name of this request
    pub fn rpc_name(&self) -> &'static str {
        match self {
            Self::CreateCache { .. } => "CreateCache",
            Self::DeleteCache { .. } => "DeleteCache",
            Self::ListCaches { .. } => "ListCaches",
        }
    }
}

/// Control-plane response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlResponse {
    CreateCache,
    DeleteCache,
    ListCaches {
        caches: Vec<CacheInfo>,
        next_token: Option<String>,
    },
}

impl ControlResponse {
    /// RPC method name this response answers
    pub fn rpc_name(&self) -> &'static str {
        match self {
            Self::CreateCache => "CreateCache",
            Self::DeleteCache => "DeleteCache",
            Self::ListCaches { .. } => "ListCaches",
        }
    }
}
