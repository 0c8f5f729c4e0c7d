pub mod use_entries;

pub use use_entries::{use_entries, UseEntriesResult};
