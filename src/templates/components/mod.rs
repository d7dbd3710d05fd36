use maud::{html, Markup};

pub mod error;
pub mod pagination;
pub mod property_card;
pub mod search_form;

pub use error::html_error_response;
pub use pagination::{page_numbers, pagination, PageItem};
pub use property_card::{format_price, property_card, PLACEHOLDER_IMAGE};
pub use search_form::search_form;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
