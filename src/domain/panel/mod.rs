// SPDX-License-Identifier: MPL-2.0
//! Panel kinds and placement preferences.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of floating panel.
///
/// Settings such as the maximized flag are kept per kind, and at most one
/// kind may hold the dock pin at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalType {
    /// Accounting verification details.
    Verification,
    /// Supplier invoice details.
    SupplierInvoice,
    /// Customer invoice details.
    CustomerInvoice,
    /// Unassigned attachment inbox.
    AttachmentInbox,
}

impl ModalType {
    /// All panel kinds, in display order.
    pub const ALL: [ModalType; 4] = [
        ModalType::Verification,
        ModalType::SupplierInvoice,
        ModalType::CustomerInvoice,
        ModalType::AttachmentInbox,
    ];

    /// Stable key used in persisted settings and log fields.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ModalType::Verification => "verification",
            ModalType::SupplierInvoice => "supplier-invoice",
            ModalType::CustomerInvoice => "customer-invoice",
            ModalType::AttachmentInbox => "attachment-inbox",
        }
    }
}

impl fmt::Display for ModalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Horizontal side a panel opens on when it has no custom position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionSide {
    /// Horizontally centered in the viewport.
    #[default]
    Center,
    /// Aligned to the left edge with a margin.
    Left,
    /// Aligned to the right edge with a margin.
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = ModalType::ALL.iter().map(|m| m.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ModalType::ALL.len());
    }

    #[test]
    fn display_matches_key() {
        assert_eq!(ModalType::SupplierInvoice.to_string(), "supplier-invoice");
    }

    #[test]
    fn default_side_is_center() {
        assert_eq!(PositionSide::default(), PositionSide::Center);
    }
}
