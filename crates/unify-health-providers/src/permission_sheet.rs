// ABOUTME: Observable permission-sheet state shared between an adapter and the host UI
// ABOUTME: A watch channel for the visibility flag plus the set of permissions being requested
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock};

use tokio::sync::watch;
use tracing::debug;

/// Permission-sheet signal owned by one adapter
///
/// The adapter is the only writer. The host UI observes the flag through
/// [`PermissionSheet::subscribe`], performs the OS dialog for
/// [`PermissionSheet::requested_permissions`], and reports back with
/// [`PermissionSheet::hide`].
#[derive(Debug)]
pub struct PermissionSheet {
    visible: watch::Sender<bool>,
    requested: RwLock<BTreeSet<String>>,
}

impl Default for PermissionSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionSheet {
    /// Create a hidden sheet with nothing requested
    #[must_use]
    pub fn new() -> Self {
        let (visible, _) = watch::channel(false);
        Self {
            visible,
            requested: RwLock::new(BTreeSet::new()),
        }
    }

    /// Record the native permissions to request and raise the sheet
    pub fn request(&self, permissions: BTreeSet<String>) {
        debug!(count = permissions.len(), "Raising permission sheet");
        *self
            .requested
            .write()
            .unwrap_or_else(PoisonError::into_inner) = permissions;
        self.visible.send_replace(true);
    }

    /// Raise the sheet without changing the requested set
    pub fn show(&self) {
        self.visible.send_replace(true);
    }

    /// Lower the sheet and clear the requested set
    pub fn hide(&self) {
        self.requested
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.visible.send_replace(false);
    }

    /// Current visibility
    #[must_use]
    pub fn is_visible(&self) -> bool {
        *self.visible.borrow()
    }

    /// Native permission identifiers currently being requested
    #[must_use]
    pub fn requested_permissions(&self) -> BTreeSet<String> {
        self.requested
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Observe visibility changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.visible.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_resets_flag_and_requested_set() {
        let sheet = PermissionSheet::new();
        sheet.request(BTreeSet::from(["READ_STEPS".to_owned()]));
        assert!(sheet.is_visible());
        assert_eq!(sheet.requested_permissions().len(), 1);

        sheet.hide();
        assert!(!sheet.is_visible());
        assert!(sheet.requested_permissions().is_empty());
    }

    #[tokio::test]
    async fn test_subscriber_sees_transition() {
        let sheet = PermissionSheet::new();
        let mut rx = sheet.subscribe();
        assert!(!*rx.borrow_and_update());

        sheet.show();
        assert!(rx.changed().await.is_ok());
        assert!(*rx.borrow_and_update());
    }
}
