pub mod errors;
pub mod file;
pub mod html;
pub mod json;

pub use errors::{error_response, json_error_response};
pub use file::file_response;
pub use html::{html_response, html_response_with_status};
pub use json::json_response;
