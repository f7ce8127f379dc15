//! Session identifiers
//!
//! A session id is generated once per session instance. It correlates a
//! portal-rendered subtree back to its owning session and doubles as the
//! host identifier for accessibility relationships.

use crate::PortalKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a menu session.
/// Uses UUID v4 so ids from nested sessions never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random SessionId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a SessionId from its string form
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Host id of the trigger element (target of label-by relationships)
    pub fn trigger_id(&self) -> String {
        format!("context-menu-trigger-{}", self.0)
    }

    /// Host id of the content element (target of controls relationships)
    pub fn content_id(&self) -> String {
        format!("context-menu-content-{}", self.0)
    }

    /// Key under which the portal host mounts this session's content
    pub fn portal_key(&self) -> PortalKey {
        PortalKey::new(format!("context-menu-portal-{}", self.0))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
