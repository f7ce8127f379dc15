//! Portal mounting contract
//!
//! The portal host mounts a detached subtree under a key and unmounts it
//! when the content is withdrawn. `PortalSync` tracks the mounted flag so
//! the host only sees edge transitions.

use serde::{Deserialize, Serialize};

/// Key under which a portal subtree is mounted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortalKey(String);

impl PortalKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PortalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host collaborator that moves rendered output to another point in the tree
pub trait PortalHost {
    fn mount(&mut self, key: &PortalKey);
    fn unmount(&mut self, key: &PortalKey);
}

/// Edge-triggered mount state for one portal
#[derive(Debug, Clone)]
pub struct PortalSync {
    key: PortalKey,
    mounted: bool,
}

impl PortalSync {
    pub fn new(key: PortalKey) -> Self {
        Self {
            key,
            mounted: false,
        }
    }

    pub fn key(&self) -> &PortalKey {
        &self.key
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mount when `open || force_mount`, unmount otherwise.
    ///
    /// Returns true when the host was called.
    pub fn sync(&mut self, open: bool, force_mount: bool, host: &mut dyn PortalHost) -> bool {
        let should_mount = open || force_mount;
        if should_mount == self.mounted {
            return false;
        }
        if should_mount {
            host.mount(&self.key);
        } else {
            host.unmount(&self.key);
        }
        self.mounted = should_mount;
        true
    }

    /// Withdraw the subtree unconditionally (owner teardown)
    pub fn release(&mut self, host: &mut dyn PortalHost) {
        if self.mounted {
            host.unmount(&self.key);
            self.mounted = false;
        }
    }
}
