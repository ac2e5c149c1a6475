//! Accordion selection state.
//!
//! At most one section is expanded at a time. The state is a plain value:
//! `toggle` consumes the current state and returns the next one.

use crate::content::SectionId;

/// Which section, if any, is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Collapsed,
    Expanded(SectionId),
}

impl Selection {
    /// Apply a toggle request for `id`.
    ///
    /// Toggling the expanded section collapses it; toggling any other
    /// section expands that one instead.
    #[must_use]
    pub fn toggle(self, id: SectionId) -> Self {
        match self {
            Self::Expanded(current) if current == id => Self::Collapsed,
            _ => Self::Expanded(id),
        }
    }

    pub fn is_expanded(self, id: SectionId) -> bool {
        self == Self::Expanded(id)
    }

    pub fn active(self) -> Option<SectionId> {
        match self {
            Self::Collapsed => None,
            Self::Expanded(id) => Some(id),
        }
    }
}
