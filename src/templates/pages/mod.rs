pub mod home;
pub mod property;
pub mod search;

pub use home::home_page;
pub use property::{property_not_found_page, property_page};
pub use search::search_page;
