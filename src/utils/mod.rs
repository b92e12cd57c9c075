pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{query_slug, result_file_name};
pub use url_utils::{absolutize_href, search_url};
