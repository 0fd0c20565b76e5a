//! WindowStack entity - shown top-level windows and modal nesting
//!
//! Passed explicitly to show/close operations so that modal nesting can be
//! driven and inspected without any process-wide state.

use crate::domain::errors::DomainError;

/// Identifier of a top-level window
pub type WindowId = u32;

/// How a window was shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modality {
    Modeless,
    Modal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    id: WindowId,
    modality: Modality,
}

/// Stack of currently shown windows, topmost last
#[derive(Clone, Debug, Default)]
pub struct WindowStack {
    entries: Vec<Entry>,
}

impl WindowStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a modeless window on top
    pub fn show(&mut self, id: WindowId) -> Result<(), DomainError> {
        self.push(id, Modality::Modeless)
    }

    /// Show a modal window on top; windows below it stop accepting input
    pub fn show_modal(&mut self, id: WindowId) -> Result<(), DomainError> {
        self.push(id, Modality::Modal)
    }

    fn push(&mut self, id: WindowId, modality: Modality) -> Result<(), DomainError> {
        if self.contains(id) {
            return Err(DomainError::Validation(format!(
                "window {} is already shown",
                id
            )));
        }
        crate::log!("window stack: show {} ({:?})", id, modality);
        self.entries.push(Entry { id, modality });
        Ok(())
    }

    /// Remove a shown window wherever it sits in the stack
    pub fn close(&mut self, id: WindowId) -> Result<Modality, DomainError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DomainError::Validation(format!("window {} is not shown", id)))?;
        let entry = self.entries.remove(index);
        crate::log!("window stack: close {} ({:?})", id, entry.modality);
        Ok(entry.modality)
    }

    /// Topmost shown window
    pub fn active(&self) -> Option<WindowId> {
        self.entries.last().map(|e| e.id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// A window accepts input unless a modal window sits above it
    pub fn accepts_input(&self, id: WindowId) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        !self.entries[index + 1..]
            .iter()
            .any(|e| e.modality == Modality::Modal)
    }

    /// Number of modal windows currently shown
    pub fn modal_depth(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.modality == Modality::Modal)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_close() {
        let mut stack = WindowStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.active(), None);

        stack.show(1).unwrap();
        stack.show(2).unwrap();
        assert_eq!(stack.active(), Some(2));
        assert_eq!(stack.len(), 2);

        assert_eq!(stack.close(2).unwrap(), Modality::Modeless);
        assert_eq!(stack.active(), Some(1));
    }

    #[test]
    fn test_modal_blocks_windows_below() {
        let mut stack = WindowStack::new();
        stack.show(1).unwrap();
        stack.show_modal(2).unwrap();
        stack.show(3).unwrap();

        assert!(!stack.accepts_input(1));
        assert!(stack.accepts_input(2));
        assert!(stack.accepts_input(3));
        assert_eq!(stack.modal_depth(), 1);

        stack.close(2).unwrap();
        assert!(stack.accepts_input(1));
    }

    #[test]
    fn test_nested_modals() {
        let mut stack = WindowStack::new();
        stack.show(1).unwrap();
        stack.show_modal(2).unwrap();
        stack.show_modal(3).unwrap();

        assert!(!stack.accepts_input(2));
        assert_eq!(stack.modal_depth(), 2);

        stack.close(3).unwrap();
        assert!(stack.accepts_input(2));
        assert!(!stack.accepts_input(1));
    }

    #[test]
    fn test_invalid_operations() {
        let mut stack = WindowStack::new();
        stack.show(1).unwrap();

        assert!(matches!(stack.show(1), Err(DomainError::Validation(_))));
        assert!(matches!(stack.close(9), Err(DomainError::Validation(_))));
        assert!(!stack.accepts_input(9));
    }
}
