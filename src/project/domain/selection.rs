//! Pending and applied ordering choices for an ordering selector.

use super::ProjectsOrder;

/// Ordering selection held by a sort selector.
///
/// The pending choice follows the user's taps; the applied choice is the one
/// the ordering stage actually uses. They only converge on
/// [`OrderSelection::apply`], [`OrderSelection::discard`], or
/// [`OrderSelection::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderSelection {
    pending: ProjectsOrder,
    applied: ProjectsOrder,
}

impl OrderSelection {
    /// Creates a selection where pending and applied both equal `order`.
    #[must_use]
    pub const fn new(order: ProjectsOrder) -> Self {
        Self {
            pending: order,
            applied: order,
        }
    }

    /// Returns the choice currently highlighted in the selector.
    #[must_use]
    pub const fn pending(&self) -> ProjectsOrder {
        self.pending
    }

    /// Returns the choice in effect for ordering.
    #[must_use]
    pub const fn applied(&self) -> ProjectsOrder {
        self.applied
    }

    /// Returns whether the selector has unapplied changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.pending != self.applied
    }

    /// Returns whether `order` is the highlighted choice.
    #[must_use]
    pub fn is_selected(&self, order: ProjectsOrder) -> bool {
        self.pending == order
    }

    /// Changes the pending choice without affecting ordering.
    pub const fn select(&mut self, order: ProjectsOrder) {
        self.pending = order;
    }

    /// Makes the pending choice the applied one and returns it.
    pub const fn apply(&mut self) -> ProjectsOrder {
        self.applied = self.pending;
        self.applied
    }

    /// Drops the pending choice in favour of the applied one.
    pub const fn discard(&mut self) {
        self.pending = self.applied;
    }

    /// Restores both choices to the default ordering and returns it.
    pub fn reset(&mut self) -> ProjectsOrder {
        *self = Self::default();
        self.applied
    }
}
