mod filter;

pub use filter::{filter_notes, ResultList};
