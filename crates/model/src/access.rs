//! Access-control classification of attributes.

use serde::{Deserialize, Serialize};

/// How an attribute may be accessed through the management interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessKind {
    /// Configuration value readable but never written through the interface.
    ReadOnly,
    /// Configuration value that may be written through the interface.
    ReadWrite,
    /// Runtime-only measurement; readable, never writable.
    Metric,
}

impl AccessKind {
    /// Only read-write attributes are writable through the projected
    /// interface.
    pub fn is_writable(self) -> bool {
        matches!(self, Self::ReadWrite)
    }
}
