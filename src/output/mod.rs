//! Output formatting module
//!
//! Terminal and JSON renderings of a check result.

pub mod json;
pub mod results;

pub use json::print_json;
pub use results::{print_pem, print_result};
