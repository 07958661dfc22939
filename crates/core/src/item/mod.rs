mod error;
mod listing;
mod types;

pub use error::ItemError;
pub use listing::filter_and_sort;
pub use types::Item;
