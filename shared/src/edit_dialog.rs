//! # Edit Dialog State
//!
//! Local state of the "edit entry" dialog: whether it is open, whether an
//! update is in flight, and the draft being edited.
//!
//! ## Lifecycle:
//! - `Closed` -> `Idle` when the dialog opens (draft seeded from the entry)
//! - `Idle` -> `Updating` when a valid draft is submitted
//! - `Updating` -> `Closed` on a successful update, back to `Idle` otherwise
//!
//! Field edits only touch the draft. The draft is dropped whenever the dialog
//! closes, so abandoned edits never leak into the next opening.

use crate::entry::{format_amount_input, parse_amount, Entry, EntryPatch, EntryType};

/// Where the dialog is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Idle,
    Updating,
}

/// Editable copy of an entry, with the amount kept as typed
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub entry_type: EntryType,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl EntryDraft {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            entry_type: entry.entry_type,
            category: entry.category.clone(),
            amount: format_amount_input(entry.amount),
            date: entry.date.clone(),
            description: entry.description.clone().unwrap_or_default(),
        }
    }

    /// Switching type clears the category, since lists are per type
    pub fn set_entry_type(&mut self, entry_type: EntryType) {
        if self.entry_type != entry_type {
            self.entry_type = entry_type;
            self.category.clear();
        }
    }

    /// Returns false (and leaves the draft alone) if the category is not in the
    /// current type's list.
    pub fn set_category(&mut self, category: &str) -> bool {
        if !self.entry_type.allows_category(category) {
            return false;
        }
        self.category = category.to_string();
        true
    }

    pub fn category_options(&self) -> &'static [&'static str] {
        self.entry_type.categories()
    }

    pub fn is_submittable(&self) -> bool {
        !self.category.is_empty() && !self.amount.is_empty()
    }

    pub fn to_patch(&self) -> EntryPatch {
        EntryPatch {
            entry_type: self.entry_type,
            category: self.category.clone(),
            amount: parse_amount(&self.amount),
            date: self.date.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
        }
    }
}

/// Arguments for one call of the update callback
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    pub id: String,
    pub patch: EntryPatch,
}

#[derive(Debug, Clone)]
pub struct EditDialogState {
    entry: Entry,
    phase: DialogPhase,
    draft: Option<EntryDraft>,
}

impl EditDialogState {
    pub fn new(entry: Entry) -> Self {
        Self {
            entry,
            phase: DialogPhase::Closed,
            draft: None,
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Closed
    }

    pub fn is_updating(&self) -> bool {
        self.phase == DialogPhase::Updating
    }

    pub fn draft(&self) -> Option<&EntryDraft> {
        self.draft.as_ref()
    }

    /// Replace the entry the next opening is seeded from. An open draft is kept.
    pub fn set_entry(&mut self, entry: Entry) {
        self.entry = entry;
    }

    pub fn open(&mut self) {
        if self.phase == DialogPhase::Closed {
            self.draft = Some(EntryDraft::from_entry(&self.entry));
            self.phase = DialogPhase::Idle;
        }
    }

    /// Discard the draft and close. Ignored while an update is in flight.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            DialogPhase::Idle => {
                self.close();
                true
            }
            DialogPhase::Closed | DialogPhase::Updating => false,
        }
    }

    pub fn set_entry_type(&mut self, entry_type: EntryType) {
        self.edit(|draft| draft.set_entry_type(entry_type));
    }

    pub fn set_category(&mut self, category: &str) {
        self.edit(|draft| {
            draft.set_category(category);
        });
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        let amount = amount.into();
        self.edit(|draft| draft.amount = amount);
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        let date = date.into();
        self.edit(|draft| draft.date = date);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        self.edit(|draft| draft.description = description);
    }

    /// Options for the category select, following the draft's type when open
    pub fn category_options(&self) -> &'static [&'static str] {
        match &self.draft {
            Some(draft) => draft.category_options(),
            None => self.entry.entry_type.categories(),
        }
    }

    /// Move to `Updating` and hand out the update arguments.
    ///
    /// Returns `None` without changing anything when the dialog is not idle
    /// (closed, or an update is already in flight) or the draft is missing its
    /// category or amount.
    pub fn begin_update(&mut self) -> Option<UpdateRequest> {
        if self.phase != DialogPhase::Idle {
            return None;
        }
        let draft = self.draft.as_ref().filter(|draft| draft.is_submittable())?;
        let request = UpdateRequest {
            id: self.entry.id.clone(),
            patch: draft.to_patch(),
        };
        self.phase = DialogPhase::Updating;
        Some(request)
    }

    /// Leave `Updating`: close on success, otherwise back to idle with the
    /// draft untouched.
    pub fn finish_update(&mut self, saved: bool) {
        if self.phase != DialogPhase::Updating {
            return;
        }
        if saved {
            self.close();
        } else {
            self.phase = DialogPhase::Idle;
        }
    }

    fn close(&mut self) {
        self.phase = DialogPhase::Closed;
        self.draft = None;
    }

    // Inputs are disabled while updating, so edits only land when idle
    fn edit(&mut self, apply: impl FnOnce(&mut EntryDraft)) {
        if self.phase != DialogPhase::Idle {
            return;
        }
        if let Some(draft) = self.draft.as_mut() {
            apply(draft);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meat_expense() -> Entry {
        Entry {
            id: "entry-1".to_string(),
            entry_type: EntryType::Expense,
            category: "Carne".to_string(),
            amount: 100.0,
            date: "2024-01-01".to_string(),
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn open_dialog() -> EditDialogState {
        let mut dialog = EditDialogState::new(meat_expense());
        dialog.open();
        dialog
    }

    #[test]
    fn test_starts_closed_without_draft() {
        let dialog = EditDialogState::new(meat_expense());
        assert_eq!(dialog.phase(), DialogPhase::Closed);
        assert!(dialog.draft().is_none());
    }

    #[test]
    fn test_open_seeds_draft_from_entry() {
        let dialog = open_dialog();
        assert_eq!(dialog.phase(), DialogPhase::Idle);

        let draft = dialog.draft().unwrap();
        assert_eq!(draft.entry_type, EntryType::Expense);
        assert_eq!(draft.category, "Carne");
        assert_eq!(draft.amount, "100");
        assert_eq!(draft.date, "2024-01-01");
        assert_eq!(draft.description, "");
    }

    #[test]
    fn test_switching_type_clears_category_and_swaps_options() {
        let mut dialog = open_dialog();
        dialog.set_entry_type(EntryType::Income);

        let draft = dialog.draft().unwrap();
        assert_eq!(draft.category, "");
        assert_eq!(
            dialog.category_options(),
            &["Efectivo", "Transferencia", "Ventas", "Servicios", "Otros"]
        );
    }

    #[test]
    fn test_reselecting_same_type_keeps_category() {
        let mut dialog = open_dialog();
        dialog.set_entry_type(EntryType::Expense);
        assert_eq!(dialog.draft().unwrap().category, "Carne");
    }

    #[test]
    fn test_category_outside_type_list_is_rejected() {
        let mut dialog = open_dialog();
        dialog.set_category("Ventas");
        assert_eq!(dialog.draft().unwrap().category, "Carne");

        dialog.set_category("Gas");
        assert_eq!(dialog.draft().unwrap().category, "Gas");
    }

    #[test]
    fn test_missing_category_or_amount_blocks_update() {
        let mut dialog = open_dialog();
        dialog.set_entry_type(EntryType::Income);
        assert!(dialog.begin_update().is_none());
        assert_eq!(dialog.phase(), DialogPhase::Idle);

        dialog.set_category("Ventas");
        dialog.set_amount("");
        assert!(dialog.begin_update().is_none());
        assert_eq!(dialog.phase(), DialogPhase::Idle);
    }

    #[test]
    fn test_begin_update_builds_patch() {
        let mut dialog = open_dialog();
        dialog.set_amount("42.50");
        dialog.set_description("Asado del sábado");

        let request = dialog.begin_update().unwrap();
        assert_eq!(dialog.phase(), DialogPhase::Updating);
        assert_eq!(request.id, "entry-1");
        assert_eq!(
            request.patch,
            EntryPatch {
                entry_type: EntryType::Expense,
                category: "Carne".to_string(),
                amount: 42.5,
                date: "2024-01-01".to_string(),
                description: Some("Asado del sábado".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_description_becomes_none() {
        let mut dialog = EditDialogState::new(Entry {
            description: Some("old".to_string()),
            ..meat_expense()
        });
        dialog.open();
        dialog.set_description("");

        let request = dialog.begin_update().unwrap();
        assert_eq!(request.patch.description, None);
    }

    #[test]
    fn test_second_begin_while_updating_is_ignored() {
        let mut dialog = open_dialog();
        assert!(dialog.begin_update().is_some());
        assert!(dialog.begin_update().is_none());
        assert_eq!(dialog.phase(), DialogPhase::Updating);
    }

    #[test]
    fn test_edits_and_cancel_ignored_while_updating() {
        let mut dialog = open_dialog();
        dialog.begin_update().unwrap();

        dialog.set_amount("999");
        assert!(!dialog.cancel());
        assert_eq!(dialog.draft().unwrap().amount, "100");
        assert_eq!(dialog.phase(), DialogPhase::Updating);
    }

    #[test]
    fn test_successful_update_closes_and_drops_draft() {
        let mut dialog = open_dialog();
        dialog.begin_update().unwrap();
        dialog.finish_update(true);

        assert_eq!(dialog.phase(), DialogPhase::Closed);
        assert!(dialog.draft().is_none());
    }

    #[test]
    fn test_declined_update_keeps_draft_open() {
        let mut dialog = open_dialog();
        dialog.set_amount("75");
        dialog.begin_update().unwrap();
        dialog.finish_update(false);

        assert_eq!(dialog.phase(), DialogPhase::Idle);
        assert_eq!(dialog.draft().unwrap().amount, "75");
    }

    #[test]
    fn test_cancel_discards_edits() {
        let mut dialog = open_dialog();
        dialog.set_amount("1");
        assert!(dialog.cancel());
        assert_eq!(dialog.phase(), DialogPhase::Closed);

        dialog.open();
        assert_eq!(dialog.draft().unwrap().amount, "100");
    }

    #[test]
    fn test_huge_amount_seeds_in_exponent_form() {
        let mut dialog = EditDialogState::new(Entry {
            amount: 1e21,
            ..meat_expense()
        });
        dialog.open();
        assert_eq!(dialog.draft().unwrap().amount, "1e+21");
    }

    #[test]
    fn test_set_entry_reseeds_next_opening() {
        let mut dialog = EditDialogState::new(meat_expense());
        dialog.set_entry(Entry {
            amount: 120.0,
            ..meat_expense()
        });
        dialog.open();
        assert_eq!(dialog.draft().unwrap().amount, "120");
    }
}
