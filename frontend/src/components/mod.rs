pub mod date_display;
pub mod edit_entry_dialog;
pub mod entry_table;

pub use date_display::DateDisplay;
pub use edit_entry_dialog::EditEntryDialog;
pub use entry_table::EntryTable;
