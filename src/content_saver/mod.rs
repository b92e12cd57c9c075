//! Persistence of search results

mod json_saver;

pub use json_saver::{load_search_result, save_search_result};
