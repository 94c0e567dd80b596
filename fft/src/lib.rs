//! File-tree core of fk-files: listings, entries and the operations performed on them.

mod error;
pub use error::*;

mod entry;
pub use entry::*;

mod format;
pub use format::*;

mod listing;
pub use listing::*;

pub mod clipboard;
pub mod history;
pub mod opener;
pub mod ops;
pub mod pins;
pub mod preview;
pub mod runner;
pub mod search;
