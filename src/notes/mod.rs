mod store;

pub use store::{load_notes, Note};
