pub mod dom;
pub mod entries;
pub mod heading;
pub mod senses;

pub use entries::{parse_entries, EntryBody};
