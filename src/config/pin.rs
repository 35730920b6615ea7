// SPDX-License-Identifier: MPL-2.0
//! Process-wide dock pin slot.
//!
//! At most one panel kind holds the pin. The register is shared by cloning
//! the handle; `acquire` and `release` are its only mutators. The slot is not
//! persisted.

use crate::domain::panel::ModalType;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared single-slot register holding the pinned [`ModalType`], if any.
#[derive(Debug, Clone, Default)]
pub struct PinRegister {
    slot: Arc<Mutex<Option<ModalType>>>,
}

impl PinRegister {
    /// Creates an empty register.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<ModalType>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pins `modal`, superseding any other holder (last writer wins).
    ///
    /// Returns the kind that lost the pin, if a different one held it.
    pub fn acquire(&self, modal: ModalType) -> Option<ModalType> {
        let previous = self.slot().replace(modal);
        match previous {
            Some(prev) if prev != modal => {
                tracing::debug!(pinned = %modal, superseded = %prev, "pin superseded");
                Some(prev)
            }
            _ => {
                tracing::debug!(pinned = %modal, "pin acquired");
                None
            }
        }
    }

    /// Clears the slot if `modal` holds it.
    ///
    /// Returns `true` if the pin was released. A holder that was superseded
    /// cannot clear the new holder's pin.
    pub fn release(&self, modal: ModalType) -> bool {
        let mut slot = self.slot();
        if *slot == Some(modal) {
            *slot = None;
            tracing::debug!(released = %modal, "pin released");
            true
        } else {
            false
        }
    }

    /// Current holder.
    #[must_use]
    pub fn holder(&self) -> Option<ModalType> {
        *self.slot()
    }

    /// Returns whether `modal` currently holds the pin.
    #[must_use]
    pub fn is_pinned(&self, modal: ModalType) -> bool {
        self.holder() == Some(modal)
    }

    /// Returns whether two handles share the same slot.
    #[must_use]
    pub fn same_slot(&self, other: &PinRegister) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_and_release() {
        let pins = PinRegister::new();
        assert_eq!(pins.holder(), None);

        assert_eq!(pins.acquire(ModalType::Verification), None);
        assert!(pins.is_pinned(ModalType::Verification));

        assert!(pins.release(ModalType::Verification));
        assert_eq!(pins.holder(), None);
        assert!(!pins.release(ModalType::Verification));
    }

    #[test]
    fn last_writer_wins() {
        let pins = PinRegister::new();
        pins.acquire(ModalType::Verification);

        let superseded = pins.acquire(ModalType::SupplierInvoice);
        assert_eq!(superseded, Some(ModalType::Verification));
        assert!(pins.is_pinned(ModalType::SupplierInvoice));
        assert!(!pins.is_pinned(ModalType::Verification));
    }

    #[test]
    fn superseded_holder_cannot_release() {
        let pins = PinRegister::new();
        pins.acquire(ModalType::Verification);
        pins.acquire(ModalType::CustomerInvoice);

        assert!(!pins.release(ModalType::Verification));
        assert!(pins.is_pinned(ModalType::CustomerInvoice));
    }

    #[test]
    fn clones_share_the_slot() {
        let pins = PinRegister::new();
        let other = pins.clone();
        other.acquire(ModalType::AttachmentInbox);

        assert!(pins.same_slot(&other));
        assert!(pins.is_pinned(ModalType::AttachmentInbox));
        assert!(!pins.same_slot(&PinRegister::new()));
    }

    #[test]
    fn reacquire_by_holder_is_not_a_supersede() {
        let pins = PinRegister::new();
        pins.acquire(ModalType::Verification);
        assert_eq!(pins.acquire(ModalType::Verification), None);
    }
}
