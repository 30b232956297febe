//! Item types stored in a cache

use serde::{Deserialize, Serialize};

/// Type of the item stored under a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Scalar,
    Dictionary,
    Set,
    List,
    SortedSet,
}

impl ItemType {
    /// Lowercase name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Dictionary => "dictionary",
            Self::Set => "set",
            Self::List => "list",
            Self::SortedSet => "sorted_set",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
