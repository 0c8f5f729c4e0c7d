//! Platform-neutral ledger types and edit logic shared by the frontend.
//!
//! Everything in here is plain Rust so it can be exercised with `cargo test`
//! on the host, without a browser.

pub mod date_badge;
pub mod edit_dialog;
pub mod entry;
pub mod error;
pub mod submit;

pub use date_badge::{DateBadge, INVALID_DATE_LABEL};
pub use edit_dialog::{DialogPhase, EditDialogState, EntryDraft, UpdateRequest};
pub use entry::{
    format_amount_input, parse_amount, Entry, EntryPatch, EntryType, EXPENSE_CATEGORIES, INCOME_CATEGORIES,
};
pub use error::{UnknownEntryType, UpdateError};
pub use submit::{OnUpdate, SubmitOutcome, UpdateFuture, UpdateTicket};
